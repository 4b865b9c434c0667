/// Every tunable of the scoring and ranking stage in one place. The ramp
/// bounds are in the raw physical units of their column (Earth flux, kelvin,
/// Earth radii).
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub insol_zero_lo: f64,
    pub insol_peak: f64,
    pub insol_zero_hi: f64,

    pub teq_zero_lo: f64,
    pub teq_plateau_lo: f64,
    pub teq_plateau_hi: f64,
    pub teq_zero_hi: f64,

    pub prad_zero_lo: f64,
    pub prad_plateau_lo: f64,
    pub prad_plateau_hi: f64,
    pub prad_zero_hi: f64,

    /// Exponent of the visualization transform `1 - (1 - h)^alpha`.
    pub alpha: f64,
    /// Advisory range for `alpha`; values outside only produce a warning.
    pub alpha_lo: f64,
    pub alpha_hi: f64,

    pub top_n: usize,

    /// Threshold for the external-reference summary counts.
    pub reference_threshold: f64,
    pub confirmed_label: &'static str,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            insol_zero_lo: 0.1,
            insol_peak: 1.0,
            insol_zero_hi: 10.0,

            teq_zero_lo: 150.0,
            teq_plateau_lo: 240.0,
            teq_plateau_hi: 320.0,
            teq_zero_hi: 400.0,

            prad_zero_lo: 0.5,
            prad_plateau_lo: 1.0,
            prad_plateau_hi: 2.0,
            prad_zero_hi: 4.0,

            alpha: 0.4,
            alpha_lo: 0.3,
            alpha_hi: 0.5,

            top_n: 15,

            reference_threshold: 0.7,
            confirmed_label: "CONFIRMED",
        }
    }

    pub fn with_alpha(alpha: f64) -> Self {
        let mut base = Self::default_v1();
        base.alpha = alpha;
        base
    }
}
