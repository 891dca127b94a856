//! # The tile strip

use std::{io::Cursor, path::Path};

use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;

use crate::{
    font::{BoundingBox, Glyph, GlyphFont},
    tiles::TileList,
    TilesetError, CELL_HEIGHT, CELL_WIDTH,
};

/// The size of one cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellLayout {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CellLayout {
    /// 16 x 32 pixel cells
    pub const DEFAULT: CellLayout = CellLayout {
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    };

    /// Get the position of the glyph origin within a cell.
    ///
    /// The origin is moved in by half the space the ink leaves free. Only the
    /// vertical position is corrected by the top of `bbox`, so the ink lines
    /// up across glyphs with different ascenders; horizontally the side
    /// bearing of the glyph is kept.
    ///
    /// Odd remainders are floored. A glyph larger than the cell gets a
    /// negative offset.
    pub fn center(&self, bbox: &BoundingBox) -> (i32, i32) {
        let x = (self.width as i32 - bbox.width()).div_euclid(2);
        let y = (self.height as i32 - bbox.height()).div_euclid(2) - bbox.top;
        (x, y)
    }

    /// The left edge of the cell at `index`
    pub fn cell_x(&self, index: usize) -> u32 {
        index as u32 * self.width
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A strip of cells, drawn left to right
#[derive(Debug, Clone)]
pub struct TileSheet {
    layout: CellLayout,
    image: RgbaImage,
}

impl TileSheet {
    /// Create a fully transparent sheet with `count` cells
    pub fn new(count: usize, layout: CellLayout) -> Result<Self, TilesetError> {
        if count == 0 {
            return Err(TilesetError::Empty);
        }
        let width = u32::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(layout.width))
            .ok_or(TilesetError::TooManyTiles(count))?;
        let image = RgbaImage::new(width, layout.height);
        Ok(Self { layout, image })
    }

    /// The cell geometry
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        (self.image.width() / self.layout.width) as usize
    }

    /// The pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Draw a glyph into the cell at `index`
    ///
    /// `origin` is the position of the glyph origin relative to the top
    /// left corner of the cell. Ink outside of the cell is dropped.
    pub fn render_glyph(
        &mut self,
        index: usize,
        origin: (i32, i32),
        glyph: &Glyph,
        color: [u8; 3],
    ) {
        let cell_x = self.layout.cell_x(index) as i32;
        let (w, h) = (self.layout.width as i32, self.layout.height as i32);
        let (ox, oy) = (origin.0 + glyph.bbox.left, origin.1 + glyph.bbox.top);

        for gy in 0..glyph.bbox.height() {
            let y = oy + gy;
            if !(0..h).contains(&y) {
                continue;
            }
            for gx in 0..glyph.bbox.width() {
                let x = ox + gx;
                if !(0..w).contains(&x) {
                    continue;
                }
                let alpha = glyph.coverage_at(gx as u32, gy as u32);
                if alpha == 0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut((cell_x + x) as u32, y as u32);
                blend(pixel, color, alpha);
            }
        }
    }

    /// Encode the sheet as PNG
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, TilesetError> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Write the sheet to `path` as PNG, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<(), TilesetError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Source-over compositing of `color` at coverage `alpha` onto `dst`
fn blend(dst: &mut Rgba<u8>, color: [u8; 3], alpha: u8) {
    let sa = alpha as u32;
    let da = dst[3] as u32;
    // all values scaled by 255
    let out_a = sa * 255 + da * (255 - sa);
    if out_a == 0 {
        return;
    }
    for c in 0..3 {
        let src = color[c] as u32 * sa * 255;
        let below = dst[c] as u32 * da * (255 - sa);
        dst[c] = ((src + below + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

/// Render every tile of `tiles` into a new sheet
pub fn generate(
    tiles: &TileList,
    font: &GlyphFont,
    layout: CellLayout,
) -> Result<TileSheet, TilesetError> {
    let mut sheet = TileSheet::new(tiles.len(), layout)?;
    for (index, tile) in tiles.iter().enumerate() {
        let glyph = font.rasterize(tile.glyph)?;
        let origin = layout.center(&glyph.bbox);
        debug!(
            "{:02} {:?}: bbox {:?}, origin {:?}",
            index, tile.glyph, glyph.bbox, origin
        );
        sheet.render_glyph(index, origin, &glyph, tile.color);
    }
    Ok(sheet)
}
