use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod catalog;

use catalog::{CatalogRow, REQUIRED_COLUMNS, parse_rows};
use flate2::read::GzDecoder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Full catalog held in memory: the raw records (original schema, needed for
/// the HZ-bin=1 extract) alongside the typed per-row fields used everywhere
/// else.
#[derive(Debug, Clone)]
pub struct CatalogBundle {
    pub headers: csv::StringRecord,
    pub records: Vec<csv::StringRecord>,
    pub rows: Vec<CatalogRow>,
}

impl CatalogBundle {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Indices of rows flagged as inside the habitable zone, in catalog order.
    pub fn hz_bin1_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.hz_bin == Some(1))
            .map(|(idx, _)| idx)
            .collect()
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::MissingInput(format!(
            "catalog file {} not found",
            path.display()
        )));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_catalog(path: &Path) -> Result<CatalogBundle, CatalogError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|name| name == required) {
            return Err(CatalogError::MissingColumn(required.to_string()));
        }
    }

    let (records, rows) = parse_rows(&mut csv_reader, &headers)?;
    crate::info!(
        "loaded {} catalog rows ({} columns) from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    Ok(CatalogBundle {
        headers,
        records,
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
