//! # ASCII tileset generator
#![warn(missing_docs)]

pub mod cli;
