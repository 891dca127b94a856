use std::path::Path;

use tileset::{
    font::{load_font, GlyphFont},
    generate,
    manifest::Manifest,
    tiles::{TileList, TileSpec},
    CellLayout, TilesetError, FONT_SIZE,
};

fn fallback_sheet(tiles: &TileList) -> tileset::TileSheet {
    generate(tiles, &GlyphFont::fallback(), CellLayout::DEFAULT).unwrap()
}

#[test]
fn default_tiles_fill_every_cell() {
    let tiles = TileList::default();
    let sheet = fallback_sheet(&tiles);
    let image = sheet.image();
    assert_eq!(image.dimensions(), (16 * 29, 32));

    let manifest = Manifest::new(&tiles, CellLayout::DEFAULT);
    for (entry, tile) in manifest.tiles.iter().zip(&tiles) {
        assert_eq!(entry.glyph, tile.glyph);
        let mut inked = 0;
        for y in 0..32 {
            for x in entry.x..entry.x + entry.width {
                let p = image.get_pixel(x, y);
                if p[3] > 0 {
                    inked += 1;
                    assert_eq!([p[0], p[1], p[2]], tile.color, "{:?}", tile.glyph);
                }
            }
        }
        assert!(inked > 0, "no ink for {:?}", tile.glyph);
    }
}

#[test]
fn dimensions_follow_tile_count() {
    for n in [1usize, 2, 7] {
        let tiles = TileList::new(vec![TileSpec::new('+', [255, 255, 0]); n]).unwrap();
        let sheet = fallback_sheet(&tiles);
        assert_eq!(sheet.image().dimensions(), (16 * n as u32, 32));
    }
}

#[test]
fn output_is_deterministic() {
    let tiles = TileList::default();
    let a = fallback_sheet(&tiles).to_png_bytes().unwrap();
    let b = fallback_sheet(&tiles).to_png_bytes().unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_font_still_generates() {
    let source = load_font(Path::new("/nonexistent/Menlo.ttc"), FONT_SIZE);
    assert!(source.is_fallback());
    let sheet = generate(&TileList::default(), source.font(), CellLayout::DEFAULT).unwrap();
    assert_eq!(sheet.image().width(), 16 * 29);
}

#[test]
fn save_overwrites_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tileset.png");
    std::fs::write(&path, b"stale").unwrap();

    let sheet = fallback_sheet(&TileList::default());
    sheet.save(&path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, sheet.to_png_bytes().unwrap());
    let decoded = image::load_from_memory(&written).unwrap().to_rgba8();
    assert_eq!(&decoded, sheet.image());
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("tileset.png");
    let sheet = fallback_sheet(&TileList::default());
    assert!(matches!(sheet.save(&path), Err(TilesetError::Image(_))));
    assert!(!path.exists());
}
