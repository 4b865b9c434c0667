use std::path::Path;

use crate::input::CatalogBundle;
use crate::model::scores::RankedCandidate;
use crate::pipeline::aggregate::{DispositionHzCount, DispositionPctRow, DispositionPivotRow};
use crate::pipeline::histogram::HistogramBin;
use crate::report::{ReportError, format_1dp, format_opt};

pub fn write_hz_bin_count(path: &Path, counts: &[(i64, usize)]) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["HZ_bin", "count"])?;
    for &(bin, count) in counts {
        writer.write_record([bin.to_string(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(counts.len())
}

/// Re-emits the original schema untouched for rows inside the habitable zone.
pub fn write_hz_bin1_extract(path: &Path, bundle: &CatalogBundle) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&bundle.headers)?;
    let mut written = 0usize;
    for idx in bundle.hz_bin1_indices() {
        writer.write_record(&bundle.records[idx])?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

pub fn write_histogram(path: &Path, bins: &[HistogramBin]) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "temp_C_bin_left",
        "temp_C_bin_right",
        "temp_C_bin_center",
        "frequency",
    ])?;
    for bin in bins {
        writer.write_record([
            format_1dp(bin.left),
            format_1dp(bin.right),
            format_1dp(bin.center),
            bin.frequency.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(bins.len())
}

pub fn write_disposition_hz(
    path: &Path,
    rows: &[DispositionHzCount],
) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["koi_disposition", "HZ_bin", "count"])?;
    for row in rows {
        writer.write_record([
            row.disposition.clone(),
            row.hz_bin.to_string(),
            row.count.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

pub fn write_disposition_pivot(
    path: &Path,
    rows: &[DispositionPivotRow],
) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["koi_disposition", "Outside_HZ", "Inside_HZ"])?;
    for row in rows {
        writer.write_record([
            row.disposition.clone(),
            row.outside.to_string(),
            row.inside.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

pub fn write_disposition_percentage(
    path: &Path,
    rows: &[DispositionPctRow],
) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["koi_disposition", "Outside_HZ_pct", "Inside_HZ_pct"])?;
    for row in rows {
        writer.write_record([
            row.disposition.clone(),
            format_1dp(row.outside_pct),
            format_1dp(row.inside_pct),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

pub fn write_top_candidates(path: &Path, ranked: &[RankedCandidate]) -> Result<usize, ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "kepoi_name",
        "H_index_combined",
        "H_vis",
        "H_delta",
        "koi_insol",
        "koi_teq",
        "koi_prad",
        "H_index",
        "HZ_bin",
    ])?;
    for candidate in ranked {
        writer.write_record([
            candidate.kepoi_name.clone(),
            candidate.combined.to_string(),
            candidate.vis.to_string(),
            candidate.delta.to_string(),
            candidate.insol.to_string(),
            candidate.teq.to_string(),
            candidate.prad.to_string(),
            format_opt(candidate.h_index),
            candidate.hz_bin.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(ranked.len())
}
