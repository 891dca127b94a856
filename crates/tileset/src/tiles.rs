//! # The tile table

use serde::{Deserialize, Serialize};

use crate::TilesetError;

/// A single glyph and the color it is drawn in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    /// The character to draw
    pub glyph: char,
    /// The RGB color of the ink
    pub color: [u8; 3],
}

impl TileSpec {
    /// Create a new tile
    pub const fn new(glyph: char, color: [u8; 3]) -> Self {
        Self { glyph, color }
    }
}

const fn t(glyph: char, r: u8, g: u8, b: u8) -> TileSpec {
    TileSpec::new(glyph, [r, g, b])
}

/// The built-in tiles, in strip order
pub const DEFAULT_TILES: [TileSpec; 29] = [
    t('.', 128, 128, 128), // floor
    t('#', 139, 90, 43),   // corridor
    t('+', 255, 255, 0),   // door
    t('<', 0, 255, 255),   // stairs up
    t('>', 0, 200, 200),   // stairs down
    t('-', 255, 255, 255), // horizontal wall
    t('|', 255, 255, 255), // vertical wall
    t('_', 255, 0, 255),
    t(',', 0, 200, 0),   // grass
    t('~', 0, 100, 255), // water
    // room walls
    t('1', 255, 100, 100),
    t('2', 100, 255, 100),
    t('3', 100, 100, 255),
    t('4', 255, 255, 100),
    t('5', 255, 100, 255),
    t('6', 100, 255, 255),
    t('7', 255, 180, 100),
    t('8', 180, 100, 255),
    t('9', 100, 255, 180),
    // markers
    t('A', 255, 80, 80),
    t('B', 255, 120, 80),
    t('C', 255, 160, 80),
    t('D', 255, 200, 80),
    t('E', 255, 80, 120),
    t('F', 255, 80, 160),
    t('G', 255, 80, 200),
    t('H', 200, 80, 255),
    t('I', 160, 80, 255),
    t('J', 120, 80, 255),
];

/// An ordered, non-empty list of tiles
///
/// The position of a tile in this list is its position in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileList {
    tiles: Vec<TileSpec>,
}

impl TileList {
    /// Check the tiles and wrap them
    pub fn new(tiles: Vec<TileSpec>) -> Result<Self, TilesetError> {
        if tiles.is_empty() {
            return Err(TilesetError::Empty);
        }
        for (index, tile) in tiles.iter().enumerate() {
            if tile.glyph.is_whitespace() || tile.glyph.is_control() {
                return Err(TilesetError::InvalidGlyph(tile.glyph, index));
            }
        }
        Ok(Self { tiles })
    }

    /// The tiles in order
    pub fn as_slice(&self) -> &[TileSpec] {
        &self.tiles
    }

    /// Number of tiles (always at least 1)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`, an empty list is rejected by [`TileList::new`]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the tiles in order
    pub fn iter(&self) -> std::slice::Iter<'_, TileSpec> {
        self.tiles.iter()
    }

    /// The glyphs in order
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().map(|t| t.glyph)
    }
}

impl Default for TileList {
    fn default() -> Self {
        Self {
            tiles: DEFAULT_TILES.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a TileList {
    type Item = &'a TileSpec;
    type IntoIter = std::slice::Iter<'a, TileSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{TileList, TileSpec, DEFAULT_TILES};
    use crate::TilesetError;

    #[test]
    fn test_default_tiles() {
        let list = TileList::default();
        assert_eq!(list.len(), 29);
        assert!(TileList::new(DEFAULT_TILES.to_vec()).is_ok());

        let order: String = list.glyphs().collect();
        assert_eq!(order, ".#+<>-|_,~123456789ABCDEFGHIJ");
        assert_eq!(list.as_slice()[1].color, [139, 90, 43]);
    }

    #[test]
    fn test_reject_empty() {
        assert!(matches!(TileList::new(vec![]), Err(TilesetError::Empty)));
    }

    #[test]
    fn test_reject_blank_glyph() {
        let tiles = vec![TileSpec::new('#', [1, 2, 3]), TileSpec::new(' ', [1, 2, 3])];
        match TileList::new(tiles) {
            Err(TilesetError::InvalidGlyph(' ', 1)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
