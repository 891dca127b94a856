//! # Tile order manifest
//!
//! Consumers address tiles by pixel offset, so the manifest records where
//! each glyph ended up in the strip.

use serde::{Deserialize, Serialize};

use crate::{sheet::CellLayout, tiles::TileList};

/// Where a glyph is in the strip
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// The character
    pub glyph: char,
    /// Left edge of the cell in pixels
    pub x: u32,
    /// Width of the cell in pixels
    pub width: u32,
}

/// All glyphs of a tileset in strip order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Height of the strip in pixels
    pub height: u32,
    /// One entry per cell, left to right
    pub tiles: Vec<ManifestEntry>,
}

impl Manifest {
    /// Lay out `tiles` in cells of the given size
    pub fn new(tiles: &TileList, layout: CellLayout) -> Self {
        let tiles = tiles
            .glyphs()
            .enumerate()
            .map(|(index, glyph)| ManifestEntry {
                glyph,
                x: layout.cell_x(index),
                width: layout.width,
            })
            .collect();
        Self {
            height: layout.height,
            tiles,
        }
    }

    /// The glyphs separated by single spaces
    pub fn order(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() * 2);
        for (index, entry) in self.tiles.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            out.push(entry.glyph);
        }
        out
    }

    /// The two lines that are printed after a run
    pub fn summary(&self, file_name: &str) -> [String; 2] {
        [
            format!("Generated {} with {} tiles", file_name, self.tiles.len()),
            format!("Tile order: {}", self.order()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use crate::{
        sheet::CellLayout,
        tiles::{TileList, TileSpec},
    };

    #[test]
    fn test_offsets() {
        let manifest = Manifest::new(&TileList::default(), CellLayout::DEFAULT);
        assert_eq!(manifest.height, 32);
        for (index, entry) in manifest.tiles.iter().enumerate() {
            assert_eq!(entry.x, 16 * index as u32);
            assert_eq!(entry.width, 16);
        }
        assert_eq!(manifest.tiles[9].glyph, '~');
        assert_eq!(manifest.tiles[9].x, 144);
    }

    #[test]
    fn test_summary() {
        let tiles = TileList::new(vec![
            TileSpec::new('<', [0, 255, 255]),
            TileSpec::new('>', [0, 200, 200]),
            TileSpec::new('A', [255, 80, 80]),
        ])
        .unwrap();
        let manifest = Manifest::new(&tiles, CellLayout::DEFAULT);
        let [count, order] = manifest.summary("tileset.png");
        assert_eq!(count, "Generated tileset.png with 3 tiles");
        assert_eq!(order, "Tile order: < > A");
    }
}
