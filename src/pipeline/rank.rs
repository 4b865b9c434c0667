use crate::input::CatalogBundle;
use crate::model::scores::{RankedCandidate, ScoreRecord};

/// Drop records with an undefined combined index, sort the rest descending by
/// combined index, and keep the first `top_n`. The sort is stable, so ties
/// keep their original catalog order.
pub fn rank_top(
    bundle: &CatalogBundle,
    records: &[ScoreRecord],
    top_n: usize,
) -> Vec<RankedCandidate> {
    let mut defined: Vec<&ScoreRecord> = records
        .iter()
        .filter(|record| record.combined.is_some())
        .collect();

    defined.sort_by(|a, b| {
        let ha = a.combined.unwrap_or(0.0);
        let hb = b.combined.unwrap_or(0.0);
        hb.partial_cmp(&ha).unwrap_or(std::cmp::Ordering::Equal)
    });

    defined
        .into_iter()
        .take(top_n)
        .map(|record| {
            let source = &bundle.rows[record.row];
            RankedCandidate {
                kepoi_name: source.kepoi_name.clone(),
                combined: record.combined.unwrap_or(0.0),
                vis: record.vis.unwrap_or(0.0),
                delta: record.delta.unwrap_or(0.0),
                insol: source.insol.unwrap_or(0.0),
                teq: source.teq.unwrap_or(0.0),
                prad: source.prad.unwrap_or(0.0),
                h_index: source.h_index,
                hz_bin: source.hz_bin.unwrap_or(1),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/rank.rs"]
mod tests;
