use serde::{Deserialize, Deserializer};

use crate::input::CatalogError;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "kepoi_name",
    "koi_disposition",
    "HZ_bin",
    "koi_insol",
    "koi_teq",
    "koi_prad",
    "H_index",
];

/// Typed view of one catalog record. Columns outside this set are ignored here
/// but survive in the raw record the loader keeps for the extract output.
///
/// Every physical field is optional: an empty cell is a legitimate missing
/// value, never an error, and propagates as `None` through scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    pub kepoi_name: String,
    #[serde(rename = "koi_disposition")]
    pub disposition: String,
    #[serde(rename = "HZ_bin", deserialize_with = "flag_from_float")]
    pub hz_bin: Option<i64>,
    #[serde(rename = "koi_insol")]
    pub insol: Option<f64>,
    #[serde(rename = "koi_teq")]
    pub teq: Option<f64>,
    #[serde(rename = "koi_prad")]
    pub prad: Option<f64>,
    #[serde(rename = "H_index")]
    pub h_index: Option<f64>,
}

// Catalog exports write the bin flag as "1.0" when the column carries missing
// cells, so accept float-formatted flags and truncate.
fn flag_from_float<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(|v| v as i64))
}

pub fn parse_rows<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    headers: &csv::StringRecord,
) -> Result<(Vec<csv::StringRecord>, Vec<CatalogRow>), CatalogError> {
    let mut records = Vec::new();
    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row: CatalogRow = record
            .deserialize(Some(headers))
            .map_err(|e| CatalogError::Parse(format!("line {}: {}", idx + 2, e)))?;
        records.push(record);
        rows.push(row);
    }
    Ok((records, rows))
}
