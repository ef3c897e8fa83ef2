/// TTF introspection for fontascii: name-table metadata, character-map
/// records, glyph rasterization, and report assembly.
///
/// Parsing uses `ttf-parser`, rasterization uses `ab_glyph`; both operate
/// on the same borrowed font bytes so a file is read exactly once.

pub mod charmap;
pub mod error;
pub mod meta;
pub mod raster;
pub mod report;

pub use charmap::GlyphRecord;
pub use error::FontError;
pub use meta::FontInfo;
pub use raster::GlyphRasterizer;

use ttf_parser::Face;

/// Parse a font and extract everything the report needs in one pass.
///
/// # Errors
/// Returns [`FontError::Parse`] for unreadable or corrupt font data.
/// Per-file failure: the caller skips this file and continues the batch.
pub fn parse_font(data: &[u8]) -> Result<(FontInfo, Vec<GlyphRecord>), FontError> {
    let face = Face::parse(data, 0).map_err(|e| FontError::Parse(e.to_string()))?;
    let info = meta::extract_info(&face);
    let records = charmap::char_records(&face);
    log::debug!(
        "parsed font: {} name entries, {} character records",
        info.names.len(),
        records.len()
    );
    Ok((info, records))
}
