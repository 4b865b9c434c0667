use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistogramError {
    #[error("cannot bin an empty sample")]
    EmptySample,
}

/// How bin edges are derived from the sample. Only Freedman–Diaconis is
/// implemented; the enum keeps the rule swappable without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinningRule {
    FreedmanDiaconis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub center: f64,
    pub frequency: usize,
}

#[derive(Debug)]
pub struct HistogramOutput {
    pub bins: Vec<HistogramBin>,
}

/// Equal-width histogram over `values` with a data-driven bin count. Edges
/// and centers are rounded to one decimal for the output table; counting uses
/// the unrounded edges, with the last bin right-inclusive.
pub fn run_histogram(values: &[f64], rule: BinningRule) -> Result<HistogramOutput, HistogramError> {
    if values.is_empty() {
        return Err(HistogramError::EmptySample);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    // Degenerate sample: a single distinct value gets one unit-wide bin.
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let n_bins = match rule {
        BinningRule::FreedmanDiaconis => freedman_diaconis_bins(values, max - min),
    };

    let mut frequencies = vec![0usize; n_bins];
    let span = max - min;
    for &v in values {
        let idx = if v >= max {
            n_bins - 1
        } else {
            (((v - min) / span) * n_bins as f64) as usize
        };
        frequencies[idx.min(n_bins - 1)] += 1;
    }

    let width = span / n_bins as f64;
    let bins = frequencies
        .iter()
        .enumerate()
        .map(|(i, &frequency)| {
            let left = round1(min + i as f64 * width);
            let right = round1(min + (i + 1) as f64 * width);
            HistogramBin {
                left,
                right,
                center: round1((left + right) / 2.0),
                frequency,
            }
        })
        .collect();

    Ok(HistogramOutput { bins })
}

/// Bin count from the Freedman–Diaconis width `2 * IQR / n^(1/3)`, falling
/// back to a single bin when the IQR collapses.
fn freedman_diaconis_bins(values: &[f64], range: f64) -> usize {
    let iqr = quantile_sorted_copy(values, 0.75) - quantile_sorted_copy(values, 0.25);
    let width = 2.0 * iqr / (values.len() as f64).cbrt();
    if width <= 0.0 || range <= 0.0 {
        return 1;
    }
    ((range / width).ceil() as usize).max(1)
}

/// Linear-interpolation quantile over a sorted copy of the sample.
fn quantile_sorted_copy(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/histogram.rs"]
mod tests;
