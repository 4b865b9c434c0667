use std::fs;
use std::path::Path;

pub mod tables;

use thiserror::Error;

use crate::input::CatalogBundle;
use crate::pipeline::aggregate::AggregateOutput;
use crate::pipeline::histogram::HistogramOutput;
use crate::model::scores::RankedCandidate;

pub const HZ_BIN_COUNT_FILE: &str = "HZ_bin_count.csv";
pub const HZ_BIN1_FILE: &str = "kepler_hz_bin1.csv";
pub const HZ_BIN1_HISTOGRAM_FILE: &str = "kepler_hz_bin1_histogram.csv";
pub const DISPOSITION_HZ_FILE: &str = "koi_disposition_by_HZ_bin.csv";
pub const DISPOSITION_PIVOT_FILE: &str = "koi_disposition_hz_pivot.csv";
pub const DISPOSITION_PCT_FILE: &str = "koi_disposition_hz_percentage.csv";
pub const TOP_CANDIDATES_FILE: &str = "kepler_combined_habitability_top15.csv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub bundle: &'a CatalogBundle,
    pub aggregates: &'a AggregateOutput,
    pub histogram: &'a HistogramOutput,
    pub ranked: &'a [RankedCandidate],
}

/// Rows written per output file, in pipeline order.
#[derive(Debug, Clone, Copy)]
pub struct ReportCounts {
    pub hz_bin_count: usize,
    pub hz_bin1_extract: usize,
    pub histogram_bins: usize,
    pub disposition_hz: usize,
    pub disposition_pivot: usize,
    pub disposition_pct: usize,
    pub top_candidates: usize,
}

pub fn write_outputs(input: &ReportInput<'_>, out_dir: &Path) -> Result<ReportCounts, ReportError> {
    fs::create_dir_all(out_dir)?;

    let hz_bin_count =
        tables::write_hz_bin_count(&out_dir.join(HZ_BIN_COUNT_FILE), &input.aggregates.hz_bin_counts)?;
    let hz_bin1_extract = tables::write_hz_bin1_extract(&out_dir.join(HZ_BIN1_FILE), input.bundle)?;
    let histogram_bins =
        tables::write_histogram(&out_dir.join(HZ_BIN1_HISTOGRAM_FILE), &input.histogram.bins)?;
    let disposition_hz =
        tables::write_disposition_hz(&out_dir.join(DISPOSITION_HZ_FILE), &input.aggregates.disposition_hz)?;
    let disposition_pivot =
        tables::write_disposition_pivot(&out_dir.join(DISPOSITION_PIVOT_FILE), &input.aggregates.pivot)?;
    let disposition_pct = tables::write_disposition_percentage(
        &out_dir.join(DISPOSITION_PCT_FILE),
        &input.aggregates.percentages,
    )?;
    let top_candidates =
        tables::write_top_candidates(&out_dir.join(TOP_CANDIDATES_FILE), input.ranked)?;

    Ok(ReportCounts {
        hz_bin_count,
        hz_bin1_extract,
        histogram_bins,
        disposition_hz,
        disposition_pivot,
        disposition_pct,
        top_candidates,
    })
}

/// Shortest round-trip representation, empty cell for a missing value.
pub fn format_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn format_1dp(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
