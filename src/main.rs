use color_eyre::eyre::{self, WrapErr};
use log::{debug, info};
use tileset::{font::load_font, generate, manifest::Manifest, CellLayout, FONT_SIZE};

use tileset_tool::cli;

fn main() -> eyre::Result<()> {
    let opt = cli::init()?;
    let tiles = opt.tile_list()?;

    let source = load_font(&opt.font, FONT_SIZE);
    debug!(
        "Font: {:?} (fallback: {})",
        source.font(),
        source.is_fallback()
    );

    let layout = CellLayout::DEFAULT;
    let sheet = generate(&tiles, source.font(), layout).wrap_err("failed to render tileset")?;
    sheet
        .save(&opt.out)
        .wrap_err_with(|| format!("failed to write '{}'", opt.out.display()))?;

    let manifest = Manifest::new(&tiles, layout);
    if let Some(path) = &opt.manifest {
        let text = ron::ser::to_string_pretty(&manifest, ron::ser::PrettyConfig::new())?;
        std::fs::write(path, text)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        info!("Wrote manifest to '{}'", path.display());
    }

    for line in manifest.summary(&opt.out_name()) {
        println!("{}", line);
    }
    Ok(())
}
