//! Export rendering: column sets, delimited output, method-name remapping

use std::io;

use crate::models::InteractionRow;

/// Columns present in every delimited export
pub const BASE_COLUMNS: &[&str] = &[
    "eei_id",
    "exon1",
    "exon2",
    "protein1",
    "protein2",
    "method_name",
    "pdb_id",
    "jaccard_percent",
    "aa1",
    "aa2",
];

/// Columns appended whenever the export includes predicted rows
pub const PREDICTED_COLUMNS: &[&str] = &[
    "confidence",
    "identity1",
    "identity2",
    "mouse_exon1_coordinates",
    "mouse_exon2_coordinates",
];

/// Base method name → its predicted-variant name
///
/// The "All" export fetches experimental and predicted sets independently; a
/// generic method filter names the base method for the experimental fetch and
/// remaps through this table for the predicted one. Unknown names pass
/// through unchanged.
pub const PREDICTED_METHOD_VARIANTS: &[(&str, &str)] = &[
    ("PISA", "predicted_PISA"),
    ("EPPIC", "predicted_EPPIC"),
    ("CONTACT", "predicted_CONTACT"),
];

pub fn predicted_variant(method: &str) -> String {
    PREDICTED_METHOD_VARIANTS
        .iter()
        .find(|(base, _)| *base == method)
        .map(|(_, variant)| (*variant).to_string())
        .unwrap_or_else(|| method.to_string())
}

/// Column set for a delimited export
pub fn columns_for(include_predicted: bool) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = BASE_COLUMNS.to_vec();
    if include_predicted {
        columns.extend_from_slice(PREDICTED_COLUMNS);
    }
    columns
}

fn fmt_opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn fmt_opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Render one field; nulls become empty cells
fn field_value(row: &InteractionRow, column: &str) -> String {
    match column {
        "eei_id" => row.eei_id.to_string(),
        "exon1" => row.exon1.clone(),
        "exon2" => row.exon2.clone(),
        "protein1" => row.protein1.clone(),
        "protein2" => row.protein2.clone(),
        "method_name" => row.method_name.clone(),
        "pdb_id" => fmt_opt_str(&row.pdb_id),
        "jaccard_percent" => fmt_opt_f64(row.jaccard_percent),
        "aa1" => fmt_opt_str(&row.aa1),
        "aa2" => fmt_opt_str(&row.aa2),
        "confidence" => fmt_opt_f64(row.confidence),
        "identity1" => fmt_opt_f64(row.identity1),
        "identity2" => fmt_opt_f64(row.identity2),
        "mouse_exon1_coordinates" => fmt_opt_str(&row.mouse_exon1_coordinates),
        "mouse_exon2_coordinates" => fmt_opt_str(&row.mouse_exon2_coordinates),
        _ => String::new(),
    }
}

/// Write rows as delimited text with a header line
pub fn write_delimited(
    rows: &[InteractionRow],
    columns: &[&str],
    delimiter: u8,
) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|column| field_value(row, column)))?;
    }

    let buffer = writer.into_inner().map_err(|e| {
        csv::Error::from(io::Error::new(io::ErrorKind::Other, e.to_string()))
    })?;
    String::from_utf8(buffer)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::METHOD_TYPE_PREDICTED;

    fn predicted_row() -> InteractionRow {
        InteractionRow {
            eei_id: 7,
            exon1_id: 1,
            exon2_id: 2,
            exon1: "ENSE00000000001".to_string(),
            exon2: "ENSE00000000002".to_string(),
            protein1: "P04637".to_string(),
            protein2: "Q00987".to_string(),
            gene1: Some("TP53".to_string()),
            gene2: Some("MDM2".to_string()),
            method_name: "predicted_PISA".to_string(),
            method_type: METHOD_TYPE_PREDICTED.to_string(),
            pdb_id: None,
            jaccard_percent: None,
            aa1: None,
            aa2: None,
            confidence: Some(0.85),
            identity1: Some(97.2),
            identity2: Some(95.0),
            mouse_exon1_coordinates: Some("chr11:69580000-69580150".to_string()),
            mouse_exon2_coordinates: Some("chr11:69581000-69581200".to_string()),
        }
    }

    #[test]
    fn test_predicted_columns_are_appended() {
        let columns = columns_for(true);
        assert!(columns.contains(&"confidence"));
        assert!(columns.contains(&"mouse_exon2_coordinates"));
        assert_eq!(columns.len(), BASE_COLUMNS.len() + PREDICTED_COLUMNS.len());
    }

    #[test]
    fn test_experimental_columns_exclude_prediction_fields() {
        let columns = columns_for(false);
        assert!(!columns.contains(&"confidence"));
        assert!(!columns.contains(&"identity1"));
        assert_eq!(columns.len(), BASE_COLUMNS.len());
    }

    #[test]
    fn test_predicted_variant_remaps_known_methods() {
        assert_eq!(predicted_variant("PISA"), "predicted_PISA");
        assert_eq!(predicted_variant("EPPIC"), "predicted_EPPIC");
        assert_eq!(predicted_variant("CONTACT"), "predicted_CONTACT");
    }

    #[test]
    fn test_predicted_variant_passes_unknown_through() {
        assert_eq!(predicted_variant("predicted_PISA"), "predicted_PISA");
        assert_eq!(predicted_variant("FOLDX"), "FOLDX");
    }

    #[test]
    fn test_csv_has_header_and_empty_cells_for_nulls() {
        let text = write_delimited(&[predicted_row()], &columns_for(true), b',').unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("eei_id,exon1,exon2"));
        assert!(header.ends_with("mouse_exon1_coordinates,mouse_exon2_coordinates"));

        let data = lines.next().unwrap();
        // pdb_id, jaccard, aa1, aa2 are all null -> four consecutive empty cells
        assert!(data.contains(",,,,"));
        assert!(data.contains("0.85"));
    }

    #[test]
    fn test_tsv_uses_tab_delimiter() {
        let text = write_delimited(&[predicted_row()], &columns_for(false), b'\t').unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.contains("eei_id\texon1"));
    }
}
