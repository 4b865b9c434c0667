use std::collections::BTreeMap;

use crate::input::CatalogBundle;
use crate::pipeline::histogram::round1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispositionHzCount {
    pub disposition: String,
    pub hz_bin: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispositionPivotRow {
    pub disposition: String,
    pub outside: usize,
    pub inside: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispositionPctRow {
    pub disposition: String,
    pub outside_pct: f64,
    pub inside_pct: f64,
}

#[derive(Debug)]
pub struct AggregateOutput {
    /// Count per distinct bin value, ascending; rows with a missing bin are
    /// excluded rather than counted as a bin of their own.
    pub hz_bin_counts: Vec<(i64, usize)>,
    pub disposition_hz: Vec<DispositionHzCount>,
    pub pivot: Vec<DispositionPivotRow>,
    pub percentages: Vec<DispositionPctRow>,
}

pub fn run_aggregate(bundle: &CatalogBundle) -> AggregateOutput {
    let mut bin_counts: BTreeMap<i64, usize> = BTreeMap::new();
    let mut pair_counts: BTreeMap<(String, i64), usize> = BTreeMap::new();
    let mut pivot_counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for row in &bundle.rows {
        let Some(bin) = row.hz_bin else { continue };
        *bin_counts.entry(bin).or_default() += 1;
        *pair_counts
            .entry((row.disposition.clone(), bin))
            .or_default() += 1;
        let entry = pivot_counts.entry(row.disposition.clone()).or_default();
        if bin == 1 {
            entry.1 += 1;
        } else {
            entry.0 += 1;
        }
    }

    let disposition_hz = pair_counts
        .into_iter()
        .map(|((disposition, hz_bin), count)| DispositionHzCount {
            disposition,
            hz_bin,
            count,
        })
        .collect();

    let pivot: Vec<DispositionPivotRow> = pivot_counts
        .into_iter()
        .map(|(disposition, (outside, inside))| DispositionPivotRow {
            disposition,
            outside,
            inside,
        })
        .collect();

    let percentages = percentage_rows(&pivot);

    AggregateOutput {
        hz_bin_counts: bin_counts.into_iter().collect(),
        disposition_hz,
        pivot,
        percentages,
    }
}

/// Row-wise percentages of the pivot counts, one decimal. Pivot rows only
/// exist for observed dispositions, so the total is never zero in practice;
/// the guard keeps a hypothetical empty row at 0.0 instead of NaN.
pub fn percentage_rows(pivot: &[DispositionPivotRow]) -> Vec<DispositionPctRow> {
    pivot
        .iter()
        .map(|row| {
            let total = (row.outside + row.inside) as f64;
            let (outside_pct, inside_pct) = if total > 0.0 {
                (
                    round1(row.outside as f64 / total * 100.0),
                    round1(row.inside as f64 / total * 100.0),
                )
            } else {
                (0.0, 0.0)
            };
            DispositionPctRow {
                disposition: row.disposition.clone(),
                outside_pct,
                inside_pct,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCounts {
    pub above_threshold: usize,
    pub confirmed_above_threshold: usize,
}

/// Summary counts over the whole catalog against the precomputed external
/// habitability index. Missing indices never pass the threshold.
pub fn reference_counts(
    bundle: &CatalogBundle,
    threshold: f64,
    confirmed_label: &str,
) -> ReferenceCounts {
    let mut above_threshold = 0usize;
    let mut confirmed_above_threshold = 0usize;
    for row in &bundle.rows {
        if matches!(row.h_index, Some(h) if h > threshold) {
            above_threshold += 1;
            if row.disposition == confirmed_label {
                confirmed_above_threshold += 1;
            }
        }
    }
    ReferenceCounts {
        above_threshold,
        confirmed_above_threshold,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
