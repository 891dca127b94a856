//! Errors when building a tileset
use displaydoc::Display;
use thiserror::Error;

/// Error when validating, rendering or writing a tileset
#[derive(Debug, Display, Error)]
pub enum TilesetError {
    /// The tile list is empty
    Empty,
    /// {0} tiles don't fit into a single strip
    TooManyTiles(usize),
    /// Glyph {0:?} at index {1} can't be drawn (whitespace or control character)
    InvalidGlyph(char, usize),
    /// Glyph {0:?} is not available in the font
    MissingGlyph(char),
    /// Glyph {0:?} rendered without any ink
    BlankGlyph(char),
    /// Failed to encode the image
    Image(#[from] image::ImageError),
    /// Failed IO
    Io(#[from] std::io::Error),
}
