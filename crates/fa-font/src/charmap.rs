use std::collections::BTreeSet;

use ttf_parser::Face;

/// One character-map entry: created once per cmap code point, consumed by
/// the report assembler, never mutated.
#[derive(Clone, Debug)]
pub struct GlyphRecord {
    /// The mapped character.
    pub ch: char,
    /// Unicode code point.
    pub codepoint: u32,
    /// Glyph name from the `post` table, or the `uniXXXX` fallback.
    pub glyph_name: String,
}

impl GlyphRecord {
    /// `U+XXXX` form used throughout the report.
    #[must_use]
    pub fn unicode_hex(&self) -> String {
        format!("U+{:04X}", self.codepoint)
    }
}

/// Collect displayable character records from the font's Unicode cmap
/// subtables, deduplicated and ascending by code point.
#[must_use]
pub fn char_records(face: &Face) -> Vec<GlyphRecord> {
    let mut codepoints = BTreeSet::new();
    if let Some(cmap) = face.tables().cmap {
        for subtable in cmap.subtables {
            if subtable.is_unicode() {
                subtable.codepoints(|cp| {
                    codepoints.insert(cp);
                });
            }
        }
    }

    let mut records = Vec::new();
    for cp in codepoints {
        let Some(ch) = char::from_u32(cp) else { continue };
        if !is_displayable(ch) {
            continue;
        }
        let Some(glyph_id) = face.glyph_index(ch) else {
            continue;
        };
        let glyph_name = face
            .glyph_name(glyph_id)
            .map_or_else(|| format!("uni{cp:04X}"), str::to_string);
        records.push(GlyphRecord {
            ch,
            codepoint: cp,
            glyph_name,
        });
    }
    records
}

/// Space is the only whitespace worth a record; control characters and
/// exotic separators have nothing to draw.
fn is_displayable(ch: char) -> bool {
    ch == ' ' || (!ch.is_control() && !ch.is_whitespace())
}
