use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use fa_core::ramp::{DensityRamp, RAMP_GLYPH};
use fa_font::report::ArtMap;
use fa_font::{GlyphRasterizer, GlyphRecord, parse_font, report};

/// Rasterization size in pixels; the canvas is twice this (see
/// GlyphRasterizer) before downsampling to the art grid.
const GLYPH_SIZE_PX: f32 = 48.0;

/// ttfascii — Convert TTF font files to ASCII text reports.
///
/// Extracts name-table metadata, metrics, and the character map, and
/// renders each glyph as a brightness-mapped ASCII grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TTF font file(s) or glob pattern(s) to convert.
    #[arg(required = true)]
    pub ttf_files: Vec<String>,

    /// Output file name (honored only for a single input file).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for multiple files (created if absent).
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Width of the ASCII art grid for each character.
    #[arg(long, default_value_t = 12)]
    pub art_width: u32,

    /// Height of the ASCII art grid for each character.
    #[arg(long, default_value_t = 12)]
    pub art_height: u32,

    /// Skip ASCII art generation (metadata and character list only).
    #[arg(long, default_value_t = false)]
    pub no_ascii_art: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let files = resolve_inputs(&cli.ttf_files);
    if files.is_empty() {
        bail!("No valid TTF files found");
    }

    let single = files.len() == 1;
    for file in &files {
        println!("Processing: {}", file.display());
        match process_file(file, &cli, single) {
            Ok(output) => println!("Created: {}", output.display()),
            Err(e) => {
                // Per-file failure: report it and continue the batch.
                log::error!("Error processing {}: {e:#}", file.display());
            }
        }
    }

    println!("Conversion complete!");
    Ok(())
}

/// Expand patterns and keep only `.ttf` paths, in pattern order.
fn resolve_inputs(patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for pattern in patterns {
        let mut matched = false;
        if let Ok(paths) = glob::glob(pattern) {
            for path in paths.flatten() {
                matched = true;
                if is_ttf(&path) {
                    files.push(path);
                }
            }
        }
        if !matched {
            let path = PathBuf::from(pattern);
            if path.exists() && is_ttf(&path) {
                files.push(path);
            }
        }
    }
    files
}

fn is_ttf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ttf"))
}

/// Process one font: parse, optionally generate art, assemble, write.
///
/// The report is fully assembled in memory before the write, so a failure
/// never leaves a partial output file behind.
fn process_file(path: &Path, cli: &Cli, single: bool) -> Result<PathBuf> {
    let data = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let (info, records) = parse_font(&data)?;

    let art = if cli.no_ascii_art {
        None
    } else {
        Some(generate_art(&data, &records, cli.art_width, cli.art_height)?)
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown.ttf");
    let content = report::assemble(file_name, &info, &records, art.as_ref());

    let output = resolve_output(
        path,
        single,
        cli.output.as_deref(),
        cli.output_dir.as_deref(),
    );
    if let Some(dir) = output.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    }
    fs::write(&output, content).with_context(|| format!("cannot write {}", output.display()))?;
    Ok(output)
}

/// Render every character's art grid. Per-character failures are logged
/// and simply leave no entry, so the report falls back to a placeholder
/// for that character.
fn generate_art(
    font_data: &[u8],
    records: &[GlyphRecord],
    art_width: u32,
    art_height: u32,
) -> Result<ArtMap> {
    let rasterizer = GlyphRasterizer::new(font_data, GLYPH_SIZE_PX)?;
    let ramp = DensityRamp::new(RAMP_GLYPH)?;

    log::info!("Generating ASCII art for {} characters...", records.len());
    let mut art = ArtMap::new();
    for (processed, record) in records.iter().enumerate() {
        // Scoped strictly to the rasterize-and-sample step: any other
        // failure here is a bug, not a per-character condition.
        match rasterizer.ascii_art(record.ch, art_width, art_height, &ramp) {
            Ok(rows) => {
                art.insert(record.ch, rows);
            }
            Err(e) => log::warn!("Skipping character '{}': {e}", record.ch),
        }
        if (processed + 1) % 50 == 0 {
            log::info!("Processed {}/{} characters...", processed + 1, records.len());
        }
    }
    log::info!("ASCII art generation complete! Processed {} characters.", art.len());
    Ok(art)
}

/// Output path for one input: `-o` wins for a single input, otherwise
/// `<stem>.txt` under `-d` (or the working directory).
fn resolve_output(
    input: &Path,
    single: bool,
    output: Option<&Path>,
    output_dir: Option<&Path>,
) -> PathBuf {
    if single && let Some(out) = output {
        return out.to_path_buf();
    }
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = format!("{stem}.txt");
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_input_honors_explicit_output() {
        let out = resolve_output(
            Path::new("fonts/Fleur.ttf"),
            true,
            Some(Path::new("custom.txt")),
            None,
        );
        assert_eq!(out, PathBuf::from("custom.txt"));
    }

    #[test]
    fn multi_input_ignores_explicit_output() {
        let out = resolve_output(
            Path::new("fonts/Fleur.ttf"),
            false,
            Some(Path::new("custom.txt")),
            Some(Path::new("out")),
        );
        assert_eq!(out, PathBuf::from("out/Fleur.txt"));
    }

    #[test]
    fn default_output_is_stem_txt() {
        let out = resolve_output(Path::new("a/b/Roboto.ttf"), true, None, None);
        assert_eq!(out, PathBuf::from("Roboto.txt"));
    }

    #[test]
    fn ttf_extension_filter_is_case_insensitive() {
        assert!(is_ttf(Path::new("x.ttf")));
        assert!(is_ttf(Path::new("x.TTF")));
        assert!(!is_ttf(Path::new("x.otf")));
        assert!(!is_ttf(Path::new("ttf")));
    }

    #[test]
    fn nonexistent_patterns_resolve_to_nothing() {
        let files = resolve_inputs(&["definitely-not-here-*.ttf".to_string()]);
        assert!(files.is_empty());
    }

    #[test]
    fn resolve_inputs_finds_real_files() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("test.ttf");
        let other = dir.path().join("test.otf");
        fs::write(&font, b"stub").unwrap();
        fs::write(&other, b"stub").unwrap();

        let pattern = format!("{}/*.ttf", dir.path().display());
        assert_eq!(resolve_inputs(&[pattern]), vec![font.clone()]);

        // A direct path works without glob metacharacters too.
        let direct = resolve_inputs(&[font.display().to_string()]);
        assert_eq!(direct, vec![font]);
    }
}
