/// Derived habitability values for one HZ-bin=1 catalog row. `row` indexes
/// into the catalog bundle. A `None` anywhere means the source field was
/// missing; it is never substituted.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub row: usize,
    pub insol_score: Option<f64>,
    pub teq_score: Option<f64>,
    pub prad_score: Option<f64>,
    pub combined: Option<f64>,
    pub vis: Option<f64>,
    pub delta: Option<f64>,
}

/// One row of the top-N output table. Present only for rows whose combined
/// index is defined, which implies all three raw fields are present.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub kepoi_name: String,
    pub combined: f64,
    pub vis: f64,
    pub delta: f64,
    pub insol: f64,
    pub teq: f64,
    pub prad: f64,
    pub h_index: Option<f64>,
    pub hz_bin: i64,
}
