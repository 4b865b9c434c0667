mod input;
mod model;
mod pipeline;
mod report;
mod tracing;

use std::path::PathBuf;

use crate::input::load_catalog;
use crate::model::profile::ScoringProfile;
use crate::pipeline::aggregate::{reference_counts, run_aggregate};
use crate::pipeline::histogram::{BinningRule, run_histogram};
use crate::pipeline::rank::rank_top;
use crate::pipeline::score::run_scoring;
use crate::report::{ReportInput, write_outputs};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = parse_args(&args)?;

    let profile = match config.alpha {
        Some(alpha) => ScoringProfile::with_alpha(alpha),
        None => ScoringProfile::default_v1(),
    };
    if profile.alpha < profile.alpha_lo || profile.alpha > profile.alpha_hi {
        crate::warn!(
            "--alpha {} is outside the intended range {}..{}; the visualization transform may compress instead of expand",
            profile.alpha,
            profile.alpha_lo,
            profile.alpha_hi
        );
    }

    let bundle = load_catalog(&config.input_path).map_err(|e| e.to_string())?;

    let aggregates = run_aggregate(&bundle);

    let filtered = bundle.hz_bin1_indices();
    let temps_c = filtered
        .iter()
        .filter_map(|&idx| bundle.rows[idx].teq)
        .map(|teq| teq - 273.15)
        .collect::<Vec<_>>();
    let histogram =
        run_histogram(&temps_c, BinningRule::FreedmanDiaconis).map_err(|e| e.to_string())?;

    let scored = run_scoring(&bundle, &filtered, &profile);
    let ranked = rank_top(&bundle, &scored.records, profile.top_n);

    let counts = write_outputs(
        &ReportInput {
            bundle: &bundle,
            aggregates: &aggregates,
            histogram: &histogram,
            ranked: &ranked,
        },
        &config.out_dir,
    )
    .map_err(|e| e.to_string())?;

    let out = |name: &str| config.out_dir.join(name).display().to_string();
    println!(
        "HZ_bin count saved to {} ({} rows)",
        out(report::HZ_BIN_COUNT_FILE),
        counts.hz_bin_count
    );
    println!("Filtered {} entries with HZ_bin = 1", counts.hz_bin1_extract);
    println!(
        "Binned Celsius data saved to {}: {} bins",
        out(report::HZ_BIN1_HISTOGRAM_FILE),
        counts.histogram_bins
    );
    println!(
        "koi_disposition by HZ_bin saved to {} ({} rows)",
        out(report::DISPOSITION_HZ_FILE),
        counts.disposition_hz
    );
    println!(
        "Pivoted koi_disposition dataset saved to {} ({} rows)",
        out(report::DISPOSITION_PIVOT_FILE),
        counts.disposition_pivot
    );
    println!(
        "Percentage-normalized dataset saved to {} ({} rows)",
        out(report::DISPOSITION_PCT_FILE),
        counts.disposition_pct
    );
    println!(
        "Top {} combined habitability saved to {} ({} rows)",
        profile.top_n,
        out(report::TOP_CANDIDATES_FILE),
        counts.top_candidates
    );

    let reference = reference_counts(
        &bundle,
        profile.reference_threshold,
        profile.confirmed_label,
    );
    println!(
        "Planets with H_index > {}: {}",
        profile.reference_threshold, reference.above_threshold
    );
    println!(
        "Confirmed planets with H_index > {}: {}",
        profile.reference_threshold, reference.confirmed_above_threshold
    );

    Ok(())
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_path: PathBuf,
    out_dir: PathBuf,
    alpha: Option<f64>,
}

fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    if args.is_empty() {
        return Err("missing command (usage: kepler-hzprep run --input <catalog.csv[.gz]> --out <dir> [--alpha <f>])".to_string());
    }
    let mut args = args.to_vec();
    let cmd = args.remove(0);
    if cmd != "run" {
        return Err("unsupported command (only `run` is available)".to_string());
    }

    let mut input_path: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut alpha: Option<f64> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --input".to_string());
                }
                input_path = Some(PathBuf::from(&args[i]));
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --out".to_string());
                }
                out_dir = Some(PathBuf::from(&args[i]));
            }
            "--alpha" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --alpha".to_string());
                }
                let value = args[i]
                    .parse::<f64>()
                    .map_err(|_| format!("invalid --alpha value: {}", args[i]))?;
                if !(value > 0.0 && value <= 1.0) {
                    return Err("invalid --alpha (must be in (0, 1])".to_string());
                }
                alpha = Some(value);
            }
            other => {
                return Err(format!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(RunConfig {
        input_path: input_path.ok_or_else(|| "missing --input".to_string())?,
        out_dir: out_dir.ok_or_else(|| "missing --out".to_string())?,
        alpha,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
