use std::collections::HashMap;

use crate::charmap::GlyphRecord;
use crate::meta::FontInfo;

/// How many extended characters get an art block before the remainder is
/// summarized by count.
const EXTENDED_SAMPLE: usize = 50;

/// Art blocks keyed by character. A missing key means art generation
/// failed (or was skipped) for that character; the report substitutes a
/// placeholder and keeps the metadata line.
pub type ArtMap = HashMap<char, Vec<String>>;

/// Assemble the complete report text for one font file.
///
/// Section order is fixed: header banner, metadata, metrics, character
/// map (standard 32–126 then extended sample), closing banner. The whole
/// document is built in memory; the caller writes it in one shot so no
/// partial file ever hits disk.
#[must_use]
pub fn assemble(
    file_name: &str,
    info: &FontInfo,
    records: &[GlyphRecord],
    art: Option<&ArtMap>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(80));
    lines.push(format!("TTF FONT INFORMATION: {file_name}"));
    lines.push("=".repeat(80));
    lines.push(String::new());

    if info.has_name_table {
        lines.push("FONT METADATA:".to_string());
        lines.push("-".repeat(40));
        for (label, value) in &info.names {
            lines.push(format!("{label:<25}: {value}"));
        }
        lines.push(String::new());
    }

    if !info.metrics.is_empty() {
        lines.push("FONT METRICS:".to_string());
        lines.push("-".repeat(40));
        for (label, value) in &info.metrics {
            lines.push(format!("{label:<25}: {value}"));
        }
        lines.push(String::new());
    }

    lines.push("CHARACTER MAP:".to_string());
    lines.push("-".repeat(40));
    lines.push(format!("Total Characters: {}", records.len()));
    lines.push(String::new());

    let mut standard: Vec<&GlyphRecord> = records
        .iter()
        .filter(|r| (32..=126).contains(&r.codepoint))
        .collect();
    let mut extended: Vec<&GlyphRecord> = records
        .iter()
        .filter(|r| !(32..=126).contains(&r.codepoint))
        .collect();
    standard.sort_by_key(|r| r.codepoint);
    extended.sort_by_key(|r| r.codepoint);

    if !standard.is_empty() {
        lines.push("ASCII CHARACTERS (32-126) WITH ASCII ART:".to_string());
        lines.push("=".repeat(60));
        for record in &standard {
            push_char_block(&mut lines, record, art);
        }
        lines.push(String::new());
    }

    if !extended.is_empty() {
        lines.push("EXTENDED CHARACTERS (sample with ASCII art):".to_string());
        lines.push("=".repeat(60));
        for record in extended.iter().take(EXTENDED_SAMPLE) {
            push_char_block(&mut lines, record, art);
        }
        if extended.len() > EXTENDED_SAMPLE {
            lines.push(format!(
                "\n... and {} more extended characters",
                extended.len() - EXTENDED_SAMPLE
            ));
        }
        lines.push(String::new());
    }

    lines.push("=".repeat(80));
    lines.push("End of font information".to_string());
    lines.push("=".repeat(80));

    lines.join("\n")
}

fn push_char_block(lines: &mut Vec<String>, record: &GlyphRecord, art: Option<&ArtMap>) {
    lines.push(format!(
        "\nCharacter: '{}' | Unicode: {} | Glyph: {}",
        record.ch,
        record.unicode_hex(),
        record.glyph_name
    ));
    lines.push("-".repeat(50));
    match art.and_then(|m| m.get(&record.ch)) {
        Some(rows) => lines.extend(rows.iter().cloned()),
        None => lines.push(format!("[ASCII art not available for '{}']", record.ch)),
    }
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ch: char) -> GlyphRecord {
        GlyphRecord {
            ch,
            codepoint: ch as u32,
            glyph_name: format!("uni{:04X}", ch as u32),
        }
    }

    fn sample_info() -> FontInfo {
        FontInfo {
            names: vec![
                ("Font Family", "Testia".to_string()),
                ("Designer", "Nobody".to_string()),
            ],
            metrics: vec![("Units Per Em".to_string(), "1000".to_string())],
            has_name_table: true,
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let records = vec![record('A'), record('\u{e9}')];
        let out = assemble("test.ttf", &sample_info(), &records, None);

        let header = out.find("TTF FONT INFORMATION: test.ttf").unwrap();
        let meta = out.find("FONT METADATA:").unwrap();
        let metrics = out.find("FONT METRICS:").unwrap();
        let charmap = out.find("CHARACTER MAP:").unwrap();
        let standard = out.find("ASCII CHARACTERS (32-126) WITH ASCII ART:").unwrap();
        let extended = out.find("EXTENDED CHARACTERS (sample with ASCII art):").unwrap();
        let footer = out.find("End of font information").unwrap();

        assert!(header < meta && meta < metrics && metrics < charmap);
        assert!(charmap < standard && standard < extended && extended < footer);
        assert!(out.starts_with(&"=".repeat(80)));
        assert!(out.ends_with(&"=".repeat(80)));
    }

    #[test]
    fn missing_art_keeps_metadata_and_adds_placeholder() {
        let records = vec![record('A'), record('B')];
        let mut art = ArtMap::new();
        art.insert('A', vec!["@@".to_string(), "@@".to_string()]);
        let out = assemble("f.ttf", &sample_info(), &records, Some(&art));

        assert!(out.contains("Character: 'A' | Unicode: U+0041"));
        assert!(out.contains("Character: 'B' | Unicode: U+0042"));
        assert!(out.contains("[ASCII art not available for 'B']"));
        assert!(!out.contains("[ASCII art not available for 'A']"));
    }

    #[test]
    fn extended_sample_is_capped_at_fifty() {
        let records: Vec<GlyphRecord> = (0xA1..=0xA1 + 60)
            .filter_map(char::from_u32)
            .map(record)
            .collect();
        let out = assemble("f.ttf", &FontInfo::default(), &records, None);

        let blocks = out.matches("Character: '").count();
        assert_eq!(blocks, 50);
        assert!(out.contains("... and 11 more extended characters"));
    }

    #[test]
    fn no_art_mode_has_zero_art_blocks() {
        let records = vec![record('A'), record('z')];
        let out = assemble("f.ttf", &sample_info(), &records, None);
        assert_eq!(out.matches("[ASCII art not available for").count(), 2);
    }

    #[test]
    fn assembly_is_deterministic() {
        let records = vec![record('b'), record('a')];
        let a = assemble("f.ttf", &sample_info(), &records, None);
        let b = assemble("f.ttf", &sample_info(), &records, None);
        assert_eq!(a, b);
        // Input order does not matter: the assembler sorts by code point.
        let reversed = vec![record('a'), record('b')];
        assert_eq!(a, assemble("f.ttf", &sample_info(), &reversed, None));
    }

    #[test]
    fn empty_name_table_still_prints_metadata_header() {
        // A name table with zero decodable records keeps its bare section;
        // a font with no name table at all drops it.
        let with_table = FontInfo {
            has_name_table: true,
            ..FontInfo::default()
        };
        let out = assemble("f.ttf", &with_table, &[record('A')], None);
        assert!(out.contains("FONT METADATA:"));

        let without_table = FontInfo::default();
        let out = assemble("f.ttf", &without_table, &[record('A')], None);
        assert!(!out.contains("FONT METADATA:"));
    }

    #[test]
    fn total_count_reflects_all_records() {
        let records = vec![record(' '), record('~'), record('\u{f1}')];
        let out = assemble("f.ttf", &FontInfo::default(), &records, None);
        assert!(out.contains("Total Characters: 3"));
    }
}
