use ttf_parser::{Face, Tag};

/// Name-table IDs worth reporting, with their display labels.
///
/// Order here fixes the fallback ordering; actual report order follows
/// name-table discovery order (first record wins the position, later
/// records for the same ID overwrite the value).
const NAME_LABELS: &[(u16, &str)] = &[
    (0, "Copyright"),
    (1, "Font Family"),
    (2, "Font Subfamily"),
    (3, "Unique Font Identifier"),
    (4, "Full Font Name"),
    (5, "Version"),
    (6, "PostScript Name"),
    (7, "Trademark"),
    (8, "Manufacturer"),
    (9, "Designer"),
    (10, "Description"),
    (11, "Vendor URL"),
    (12, "Designer URL"),
    (13, "License Description"),
    (14, "License Info URL"),
    (16, "Typographic Family"),
    (17, "Typographic Subfamily"),
];

/// Metadata and metric fields extracted from one font, in report order.
///
/// Fixed record shape instead of a dictionary-of-dictionaries: the report
/// depends on field order, so both lists preserve discovery order.
#[derive(Debug, Default)]
pub struct FontInfo {
    /// Name-table entries: (label, decoded value).
    pub names: Vec<(&'static str, String)>,
    /// Metric entries: (label, rendered value).
    pub metrics: Vec<(String, String)>,
    /// True when the font carries a name table at all. The report prints
    /// the metadata section header for any font that has one, even if no
    /// record decoded.
    pub has_name_table: bool,
}

/// Extract name-table metadata and head/OS-2 metrics from a parsed face.
#[must_use]
pub fn extract_info(face: &Face) -> FontInfo {
    let mut info = FontInfo {
        has_name_table: face.tables().name.is_some(),
        ..FontInfo::default()
    };

    let names = face.names();
    for i in 0..names.len() {
        let Some(record) = names.get(i) else { continue };
        let Some(label) = label_for(record.name_id) else {
            continue;
        };
        // Non-Unicode records decode to None and are skipped, like
        // undecodable records in any other extractor.
        let Some(value) = record.to_string() else {
            continue;
        };
        if let Some(slot) = info.names.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = value;
        } else {
            info.names.push((label, value));
        }
    }

    push_head_metrics(face, &mut info);
    if let Some(os2) = face.tables().os2 {
        info.metrics.push((
            "Weight Class".to_string(),
            os2.weight().to_number().to_string(),
        ));
        info.metrics.push((
            "Width Class".to_string(),
            os2.width().to_number().to_string(),
        ));
    }
    info
}

fn label_for(name_id: u16) -> Option<&'static str> {
    NAME_LABELS
        .iter()
        .find(|(id, _)| *id == name_id)
        .map(|(_, label)| *label)
}

/// Units-per-em, creation/modification stamps, and revision from `head`.
///
/// ttf-parser's typed head table stops at units-per-em, so the timestamp
/// and revision fields come from the raw table bytes: fontRevision is a
/// 16.16 fixed at offset 4, created/modified are LONGDATETIME (seconds
/// since 1904-01-01) at offsets 20 and 28.
fn push_head_metrics(face: &Face, info: &mut FontInfo) {
    info.metrics.push((
        "Units Per Em".to_string(),
        face.units_per_em().to_string(),
    ));

    let head = face.raw_face().table(Tag::from_bytes(b"head"));
    let created = head
        .and_then(|t| read_i64(t, 20))
        .map_or_else(|| "Unknown".to_string(), |v| v.to_string());
    let modified = head
        .and_then(|t| read_i64(t, 28))
        .map_or_else(|| "Unknown".to_string(), |v| v.to_string());
    let revision = head
        .and_then(|t| read_i32(t, 4))
        .map_or_else(|| "Unknown".to_string(), format_revision);

    info.metrics.push(("Created".to_string(), created));
    info.metrics.push(("Modified".to_string(), modified));
    info.metrics.push(("Font Revision".to_string(), revision));
}

/// Render a 16.16 fixed revision the way a float prints: shortest form,
/// but never without a decimal point (`1.0`, not `1` or `1.000`).
fn format_revision(fixed: i32) -> String {
    let value = f64::from(fixed) / 65536.0;
    let mut s = format!("{value}");
    if !s.contains('.') && !s.contains('e') {
        s.push_str(".0");
    }
    s
}

fn read_i32(data: &[u8], offset: usize) -> Option<i32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_i64(data: &[u8], offset: usize) -> Option<i64> {
    let bytes = data.get(offset..offset + 8)?;
    Some(i64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_table_covers_the_documented_ids() {
        assert_eq!(label_for(1), Some("Font Family"));
        assert_eq!(label_for(13), Some("License Description"));
        // 15 (sample text) is deliberately absent.
        assert_eq!(label_for(15), None);
    }

    #[test]
    fn revision_prints_minimal_float_form() {
        // Whole revisions keep one decimal, fractional ones print shortest.
        assert_eq!(format_revision(0x0001_0000), "1.0");
        assert_eq!(format_revision(0x0002_0000), "2.0");
        assert_eq!(format_revision(0x0001_8000), "1.5");
        assert_eq!(format_revision(0x0000_4000), "0.25");
    }

    #[test]
    fn raw_readers_reject_short_tables() {
        assert_eq!(read_i32(&[0u8; 3], 0), None);
        assert_eq!(read_i64(&[0u8; 20], 20), None);
        assert_eq!(read_i32(&[0, 1, 0, 0], 0), Some(0x0001_0000));
    }
}
