use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use zx81sprite::config::Config;
use zx81sprite::convert;
use zx81sprite::grid::PixelGrid;
use zx81sprite::pattern::BlockCode;
use zx81sprite::types::Pixel;

/// Convert a text sprite into ZX81 low-res block graphics data
#[derive(Parser)]
#[command(name = "zx81sprite", version)]
struct Args {
    /// Sprite text file: rows of '-', 'o', '*' and '@'
    input: PathBuf,

    /// Assembler file to write
    output: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Label written before the data (overrides the config)
    #[arg(long)]
    label: Option<String>,

    /// Fail if any cell matches no block pattern
    #[arg(long)]
    strict: bool,

    /// Print each pixel of the sprite as a word before converting
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("Text based ZX81 sprite converter v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_deref())?;
    let strict = args.strict || config.strict;
    let mut style = config.output;
    if let Some(label) = args.label {
        style.label = label;
    }

    log::info!(
        "using input file {} outputting to {}",
        args.input.display(),
        args.output.display()
    );

    let conversion = convert::convert_file(&args.input, &args.output, &style)
        .with_context(|| format!("converting {}", args.input.display()))?;

    if args.dump {
        dump_grid(&conversion.grid);
    }

    let census = conversion.grid.pixel_census();
    log::debug!(
        "pixels: {} blank, {} ink, {} grey, {} inverse grey, {} other",
        census.blank,
        census.ink,
        census.grey,
        census.inverse_grey,
        census.other
    );

    for d in &conversion.encoding.diagnostics {
        log::warn!("{d}, emitted {}", BlockCode::BLANK);
    }

    log::info!(
        "wrote {} {} lines ({} blocks) to {}",
        conversion.encoding.rows.len(),
        style.directive,
        conversion.encoding.block_count(),
        args.output.display()
    );

    if strict {
        conversion
            .encoding
            .ensure_clean()
            .context("strict mode: sprite contains unknown patterns")?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

fn dump_grid(grid: &PixelGrid) {
    for row in grid.rows() {
        let words: Vec<&str> = row
            .iter()
            .map(|&c| match Pixel::from_char(c) {
                Some(Pixel::Blank) => "BLANK",
                Some(Pixel::Ink) => "PIXEL",
                Some(Pixel::Grey) => "GREY",
                Some(Pixel::InverseGrey) => "INVERSE",
                None => "OTHER",
            })
            .collect();
        println!("{}", words.join(" "));
    }
    println!("----");
}
