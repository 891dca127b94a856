#![warn(missing_docs)]
//! # ASCII glyph tilesets
//!
//! This crate renders a list of colored characters into a single PNG strip,
//! one glyph per fixed-size cell, left to right in list order. It is meant
//! for text-mode map renderers that address a tile by its index, i.e. the
//! tile at index `i` starts at pixel column `i * CELL_WIDTH`.
//!
//! ```no_run
//! use std::path::Path;
//! use tileset::{font, generate, tiles::TileList, CellLayout, FONT_SIZE};
//!
//! let tiles = TileList::default();
//! let source = font::load_font(Path::new(tileset::PREFERRED_FONT), FONT_SIZE);
//! let sheet = generate(&tiles, source.font(), CellLayout::DEFAULT)?;
//! sheet.save(Path::new(tileset::OUTPUT_PATH))?;
//! # Ok::<(), tileset::TilesetError>(())
//! ```

mod error;
pub mod font;
pub mod manifest;
pub mod sheet;
pub mod tiles;

pub use error::TilesetError;
pub use sheet::{generate, CellLayout, TileSheet};

/// Width of a single cell in pixels
pub const CELL_WIDTH: u32 = 16;
/// Height of a single cell in pixels
pub const CELL_HEIGHT: u32 = 32;
/// Size of the em square in pixels
pub const FONT_SIZE: f32 = 24.0;

/// The font that is tried first
pub const PREFERRED_FONT: &str = "/System/Library/Fonts/Menlo.ttc";
/// Where the tileset is written by default
pub const OUTPUT_PATH: &str = "tools/tileset.png";
