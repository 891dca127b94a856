//! # Glyph fonts
//!
//! A tileset is drawn either with a TrueType / OpenType font from disk
//! (via `fontdue`), or with the bitmap font bundled into the binary when
//! that font can't be used.

use std::{fmt, io, path::Path};

use log::debug;
use noto_sans_mono_bitmap::{get_raster, FontWeight, RasterHeight};
use thiserror::Error;

use crate::TilesetError;

/// The face of the bundled font
pub const FALLBACK_WEIGHT: FontWeight = FontWeight::Regular;
/// The line height of the bundled font
pub const FALLBACK_HEIGHT: RasterHeight = RasterHeight::Size24;

/// Ink bounds of a glyph in pixels
///
/// The coordinates are relative to the glyph origin, which is the pen
/// position on the ascender line. `x` grows to the right, `y` grows down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BoundingBox {
    /// First column with ink
    pub left: i32,
    /// First row with ink
    pub top: i32,
    /// One past the last column with ink
    pub right: i32,
    /// One past the last row with ink
    pub bottom: i32,
}

impl BoundingBox {
    /// Width of the box
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the box
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A rasterized glyph
///
/// `coverage` is row-major and spans exactly `bbox`; 0 is no ink and
/// 255 is full ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// The character
    pub ch: char,
    /// The ink bounds
    pub bbox: BoundingBox,
    /// The coverage of every pixel in `bbox`
    pub coverage: Vec<u8>,
}

impl Glyph {
    /// Coverage at `(x, y)` relative to the top left of `bbox`
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        let width = self.bbox.width() as u32;
        self.coverage[(y * width + x) as usize]
    }
}

/// Error when loading a font file
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// The file could not be read
    #[error("Failed IO")]
    Io(#[from] io::Error),
    /// The file is not a usable font
    #[error("Parsing failed: {0}")]
    Parse(&'static str),
    /// The font has no horizontal line metrics
    #[error("Missing line metrics")]
    NoLineMetrics,
}

/// A font that can draw glyphs at a single size
pub enum GlyphFont {
    /// An outline font from a file
    TrueType {
        /// The parsed font
        font: fontdue::Font,
        /// The size of the em square in pixels
        px: f32,
        /// Distance from the ascender line to the baseline in pixels
        ascent: i32,
    },
    /// The bundled bitmap font
    Bitmap {
        /// The weight
        weight: FontWeight,
        /// The line height
        height: RasterHeight,
    },
}

impl fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrueType { font, px, ascent } => f
                .debug_struct("TrueType")
                .field("name", &font.name())
                .field("px", px)
                .field("ascent", ascent)
                .finish(),
            Self::Bitmap { height, .. } => f
                .debug_struct("Bitmap")
                .field("height", &height.val())
                .finish(),
        }
    }
}

impl GlyphFont {
    /// The bundled font
    pub fn fallback() -> Self {
        Self::Bitmap {
            weight: FALLBACK_WEIGHT,
            height: FALLBACK_HEIGHT,
        }
    }

    /// Parse a font file (face 0 of a collection) for drawing at `px`
    pub fn from_bytes(data: Vec<u8>, px: f32) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(FontLoadError::Parse)?;
        let ascent = font
            .horizontal_line_metrics(px)
            .ok_or(FontLoadError::NoLineMetrics)?
            .ascent
            .round() as i32;
        Ok(Self::TrueType { font, px, ascent })
    }

    /// Get the ink bounds of `ch` as it would be rendered
    pub fn measure(&self, ch: char) -> Result<BoundingBox, TilesetError> {
        match self {
            Self::TrueType { font, px, ascent } => {
                if font.lookup_glyph_index(ch) == 0 {
                    return Err(TilesetError::MissingGlyph(ch));
                }
                let metrics = font.metrics(ch, *px);
                if metrics.width == 0 || metrics.height == 0 {
                    return Err(TilesetError::BlankGlyph(ch));
                }
                Ok(outline_bbox(*ascent, &metrics))
            }
            Self::Bitmap { .. } => self.rasterize(ch).map(|g| g.bbox),
        }
    }

    /// Render `ch` into a coverage buffer cropped to its ink
    pub fn rasterize(&self, ch: char) -> Result<Glyph, TilesetError> {
        match self {
            Self::TrueType { font, px, ascent } => {
                if font.lookup_glyph_index(ch) == 0 {
                    return Err(TilesetError::MissingGlyph(ch));
                }
                let (metrics, coverage) = font.rasterize(ch, *px);
                if !coverage.iter().any(|&c| c > 0) {
                    return Err(TilesetError::BlankGlyph(ch));
                }
                let bbox = outline_bbox(*ascent, &metrics);
                Ok(Glyph { ch, bbox, coverage })
            }
            Self::Bitmap { weight, height } => {
                let raster =
                    get_raster(ch, *weight, *height).ok_or(TilesetError::MissingGlyph(ch))?;
                crop_raster(ch, raster.raster()).ok_or(TilesetError::BlankGlyph(ch))
            }
        }
    }
}

fn outline_bbox(ascent: i32, metrics: &fontdue::Metrics) -> BoundingBox {
    let width = metrics.width as i32;
    let height = metrics.height as i32;
    // `ymin` is the bottom edge, measured upwards from the baseline
    let top = ascent - (metrics.ymin + height);
    BoundingBox {
        left: metrics.xmin,
        top,
        right: metrics.xmin + width,
        bottom: top + height,
    }
}

/// Cut the ink out of a full-cell raster
fn crop_raster<R: AsRef<[u8]>>(ch: char, rows: &[R]) -> Option<Glyph> {
    let mut bbox: Option<BoundingBox> = None;
    for (y, row) in rows.iter().enumerate() {
        for (x, _) in row.as_ref().iter().enumerate().filter(|&(_, &v)| v > 0) {
            let (x, y) = (x as i32, y as i32);
            let b = bbox.get_or_insert(BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            });
            b.left = b.left.min(x);
            b.right = b.right.max(x + 1);
            b.bottom = b.bottom.max(y + 1);
        }
    }
    let bbox = bbox?;
    let mut coverage = Vec::with_capacity((bbox.width() * bbox.height()) as usize);
    for row in &rows[bbox.top as usize..bbox.bottom as usize] {
        coverage.extend_from_slice(&row.as_ref()[bbox.left as usize..bbox.right as usize]);
    }
    Some(Glyph { ch, bbox, coverage })
}

/// The result of looking for a font
pub enum FontSource {
    /// The requested font was loaded
    Loaded(GlyphFont),
    /// The requested font was not usable, the bundled one is used instead
    Fallback(GlyphFont),
}

impl FontSource {
    /// The font to draw with
    pub fn font(&self) -> &GlyphFont {
        match self {
            Self::Loaded(f) | Self::Fallback(f) => f,
        }
    }

    /// Whether the bundled font is used
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Try to load the font file at `path` for drawing at `px`
pub fn try_load_truetype(path: &Path, px: f32) -> Result<GlyphFont, FontLoadError> {
    let data = std::fs::read(path)?;
    GlyphFont::from_bytes(data, px)
}

/// Load the font at `path`, or fall back to the bundled font
///
/// This never fails. The reason for a fallback is only logged at `debug`.
pub fn load_font(path: &Path, px: f32) -> FontSource {
    match try_load_truetype(path, px) {
        Ok(font) => {
            debug!("Loaded font {:?} from '{}'", font, path.display());
            FontSource::Loaded(font)
        }
        Err(e) => {
            debug!(
                "Using bundled font, '{}' is not usable: {}",
                path.display(),
                e
            );
            FontSource::Fallback(GlyphFont::fallback())
        }
    }
}
