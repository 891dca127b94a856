use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use tileset::{
    tiles::{TileList, TileSpec},
    OUTPUT_PATH, PREFERRED_FONT,
};

#[derive(Parser, Debug)]
/// Render colored ASCII glyphs into a PNG tile strip
pub struct Options {
    /// Where to store the tileset image
    #[clap(short, long, default_value = OUTPUT_PATH)]
    pub out: PathBuf,

    /// The TrueType font (or font collection) to draw with.
    ///
    /// If it can't be loaded, a bundled bitmap font is used instead.
    #[clap(short, long, default_value = PREFERRED_FONT)]
    pub font: PathBuf,

    /// A RON file with the tiles, e.g. `[(glyph: '.', color: (128, 128, 128))]`
    #[clap(short, long)]
    pub tiles: Option<PathBuf>,

    /// Also write the tile offsets to this RON file
    #[clap(short, long)]
    pub manifest: Option<PathBuf>,

    /// Log the font and the position of every glyph
    #[clap(short, long)]
    pub verbose: bool,
}

impl Options {
    /// Get the tiles to render
    pub fn tile_list(&self) -> eyre::Result<TileList> {
        match &self.tiles {
            Some(path) => read_tile_list(path),
            None => Ok(TileList::default()),
        }
    }

    /// The name printed in the summary
    pub fn out_name(&self) -> String {
        self.out
            .file_name()
            .unwrap_or(self.out.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Parse a RON tile list
pub fn parse_tile_list(text: &str) -> eyre::Result<TileList> {
    let tiles: Vec<TileSpec> = ron::from_str(text).wrap_err("Failed to parse tile list")?;
    let list = TileList::new(tiles)?;
    Ok(list)
}

fn read_tile_list(path: &Path) -> eyre::Result<TileList> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read file '{}'", path.display()))?;
    parse_tile_list(&text).wrap_err_with(|| format!("in '{}'", path.display()))
}
