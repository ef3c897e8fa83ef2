use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fa_core::ramp::{DensityRamp, RAMP_IMAGE};
use fa_core::render::ansi_art;
use fa_source::ImageSource;

/// Contrast on a scale -10 -> 10. Compile-time calibration, deliberately
/// not a CLI option.
const CONTRAST: i8 = 10;

/// imgascii — Render an image as ANSI-colored ASCII art on stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image to render (PNG, JPEG, BMP, GIF).
    pub img_name: PathBuf,

    /// Output width in characters. Height is derived from the aspect
    /// ratio and cannot be set directly.
    #[arg(default_value_t = 100)]
    pub width: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // One image per invocation: a load failure is fatal.
    let source = ImageSource::open(&cli.img_name)?;
    let (gray, rgb) = source.sample(cli.width)?;

    let ramp = DensityRamp::with_contrast(RAMP_IMAGE, CONTRAST)?;
    let out = ansi_art(&gray, &rgb, &ramp);

    let stdout = std::io::stdout();
    stdout
        .lock()
        .write_all(out.as_bytes())
        .context("cannot write to stdout")?;
    Ok(())
}
