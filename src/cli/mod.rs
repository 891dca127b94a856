//! Command line setup
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

/// Options for the tileset generator
pub mod opt;

use opt::Options;

/// Environment variable with the log filter, e.g. `TILESET_LOG=debug`
pub const LOG_ENV: &str = "TILESET_LOG";

/// The base log level; `TILESET_LOG` still overrides it
pub fn log_level(verbose: bool) -> LevelFilter {
    match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    }
}

/// Parse the options, then install error reporting and logging
pub fn init() -> color_eyre::Result<Options> {
    let opt = Options::parse();
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(log_level(opt.verbose))
        .format_timestamp(None)
        .parse_env(Env::new().filter(LOG_ENV))
        .init();
    Ok(opt)
}
