use crate::input::CatalogBundle;
use crate::model::profile::ScoringProfile;
use crate::model::scores::ScoreRecord;

#[derive(Debug)]
pub struct ScoreOutput {
    pub records: Vec<ScoreRecord>,
}

/// Score every HZ-bin=1 row. `filtered` carries catalog indices in original
/// order, which is what gives the later stable sort its tie-break.
pub fn run_scoring(
    bundle: &CatalogBundle,
    filtered: &[usize],
    profile: &ScoringProfile,
) -> ScoreOutput {
    let mut records = Vec::with_capacity(filtered.len());
    for &row in filtered {
        let source = &bundle.rows[row];
        let insol_score = source.insol.map(|s| score_insolation(s, profile));
        let teq_score = source.teq.map(|t| score_teq(t, profile));
        let prad_score = source.prad.map(|r| score_radius(r, profile));

        let combined = combined_index(insol_score, teq_score, prad_score);
        let vis = combined.map(|h| vis_transform(h, profile.alpha));
        let delta = combined.map(|h| 1.0 - h);

        records.push(ScoreRecord {
            row,
            insol_score,
            teq_score,
            prad_score,
            combined,
            vis,
            delta,
        });
    }
    ScoreOutput { records }
}

/// Two ramps meeting at the single-point plateau `insol_peak`: the input is
/// clamped to [zero_lo, zero_hi] first, so out-of-range flux saturates to the
/// boundary score rather than falling outside the ramps.
pub fn score_insolation(flux: f64, profile: &ScoringProfile) -> f64 {
    let s = flux.clamp(profile.insol_zero_lo, profile.insol_zero_hi);
    if s <= profile.insol_peak {
        (s - profile.insol_zero_lo) / (profile.insol_peak - profile.insol_zero_lo)
    } else {
        (profile.insol_zero_hi - s) / (profile.insol_zero_hi - profile.insol_peak)
    }
}

/// Plateau with linear ramps: 0 at or beyond the outer bounds, 1 on the
/// inclusive plateau, linear in between.
pub fn score_teq(teq: f64, profile: &ScoringProfile) -> f64 {
    ramp_score(
        teq,
        profile.teq_zero_lo,
        profile.teq_plateau_lo,
        profile.teq_plateau_hi,
        profile.teq_zero_hi,
    )
}

pub fn score_radius(radius: f64, profile: &ScoringProfile) -> f64 {
    ramp_score(
        radius,
        profile.prad_zero_lo,
        profile.prad_plateau_lo,
        profile.prad_plateau_hi,
        profile.prad_zero_hi,
    )
}

fn ramp_score(x: f64, zero_lo: f64, plateau_lo: f64, plateau_hi: f64, zero_hi: f64) -> f64 {
    if x <= zero_lo || x >= zero_hi {
        return 0.0;
    }
    if x >= plateau_lo && x <= plateau_hi {
        return 1.0;
    }
    if x < plateau_lo {
        (x - zero_lo) / (plateau_lo - zero_lo)
    } else {
        (zero_hi - x) / (zero_hi - plateau_hi)
    }
}

/// Geometric mean of the three dimension scores. The cube root keeps the
/// endpoints exact: any zero dimension forces 0, all-ones force 1. Undefined
/// if any dimension is undefined.
pub fn combined_index(
    insol_score: Option<f64>,
    teq_score: Option<f64>,
    prad_score: Option<f64>,
) -> Option<f64> {
    match (insol_score, teq_score, prad_score) {
        (Some(si), Some(st), Some(sr)) => Some((si * st * sr).cbrt()),
        _ => None,
    }
}

/// `1 - (1 - h)^alpha` opens up the crowded region near 1 while fixing both
/// endpoints and preserving rank order for any alpha > 0.
pub fn vis_transform(combined: f64, alpha: f64) -> f64 {
    1.0 - (1.0 - combined).powf(alpha)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
