
use super::*;

use crate::input::catalog::CatalogRow;

fn profile() -> ScoringProfile {
    ScoringProfile::default_v1()
}

fn row(insol: Option<f64>, teq: Option<f64>, prad: Option<f64>) -> CatalogRow {
    CatalogRow {
        kepoi_name: "K00001.01".to_string(),
        disposition: "CANDIDATE".to_string(),
        hz_bin: Some(1),
        insol,
        teq,
        prad,
        h_index: None,
    }
}

fn bundle_of(rows: Vec<CatalogRow>) -> CatalogBundle {
    CatalogBundle {
        headers: csv::StringRecord::new(),
        records: Vec::new(),
        rows,
    }
}

#[test]
fn test_insolation_endpoints() {
    let p = profile();
    assert_eq!(score_insolation(0.1, &p), 0.0);
    assert_eq!(score_insolation(1.0, &p), 1.0);
    assert_eq!(score_insolation(10.0, &p), 0.0);
}

#[test]
fn test_insolation_clamps_out_of_range_flux() {
    let p = profile();
    assert_eq!(score_insolation(0.05, &p), score_insolation(0.1, &p));
    assert_eq!(score_insolation(20.0, &p), score_insolation(10.0, &p));
}

#[test]
fn test_insolation_ramps() {
    let p = profile();
    let up = score_insolation(0.55, &p);
    assert!((up - 0.5).abs() < 1e-12);
    let down = score_insolation(5.5, &p);
    assert!((down - 0.5).abs() < 1e-12);
}

#[test]
fn test_teq_plateau_and_outer_bounds() {
    let p = profile();
    assert_eq!(score_teq(150.0, &p), 0.0);
    assert_eq!(score_teq(240.0, &p), 1.0);
    assert_eq!(score_teq(320.0, &p), 1.0);
    assert_eq!(score_teq(400.0, &p), 0.0);
    assert_eq!(score_teq(100.0, &p), 0.0);
    assert_eq!(score_teq(500.0, &p), 0.0);
    assert!((score_teq(195.0, &p) - 0.5).abs() < 1e-12);
    assert!((score_teq(360.0, &p) - 0.5).abs() < 1e-12);
}

#[test]
fn test_radius_plateau_and_outer_bounds() {
    let p = profile();
    assert_eq!(score_radius(0.5, &p), 0.0);
    assert_eq!(score_radius(1.0, &p), 1.0);
    assert_eq!(score_radius(2.0, &p), 1.0);
    assert_eq!(score_radius(4.0, &p), 0.0);
    assert!((score_radius(0.75, &p) - 0.5).abs() < 1e-12);
    assert!((score_radius(3.0, &p) - 0.5).abs() < 1e-12);
}

#[test]
fn test_negative_radius_saturates_to_zero() {
    let p = profile();
    assert_eq!(score_radius(-1.0, &p), 0.0);
}

#[test]
fn test_scores_stay_in_unit_interval() {
    let p = profile();
    let mut x = -5.0;
    while x < 520.0 {
        for s in [
            score_insolation(x, &p),
            score_teq(x, &p),
            score_radius(x, &p),
        ] {
            assert!((0.0..=1.0).contains(&s), "score {} out of range at {}", s, x);
        }
        x += 0.37;
    }
}

#[test]
fn test_combined_index_endpoints() {
    assert_eq!(combined_index(Some(0.0), Some(1.0), Some(1.0)), Some(0.0));
    assert_eq!(combined_index(Some(1.0), Some(1.0), Some(1.0)), Some(1.0));
    assert_eq!(combined_index(None, Some(1.0), Some(1.0)), None);
    assert_eq!(combined_index(Some(1.0), None, Some(1.0)), None);
    assert_eq!(combined_index(Some(1.0), Some(1.0), None), None);
}

#[test]
fn test_combined_index_is_geometric_mean() {
    let combined = combined_index(Some(0.5), Some(0.8), Some(0.9)).unwrap();
    assert!((combined - (0.5f64 * 0.8 * 0.9).cbrt()).abs() < 1e-12);
}

#[test]
fn test_vis_transform_fixes_endpoints_and_is_monotonic() {
    assert_eq!(vis_transform(0.0, 0.4), 0.0);
    assert_eq!(vis_transform(1.0, 0.4), 1.0);
    let mut prev = 0.0;
    for i in 1..100 {
        let h = i as f64 / 100.0;
        let vis = vis_transform(h, 0.4);
        assert!(vis > prev, "transform not monotonic at {}", h);
        assert!((0.0..=1.0).contains(&vis));
        prev = vis;
    }
}

#[test]
fn test_vis_transform_expands_near_one() {
    // The point of alpha < 1: candidates crowded near 1 get pulled apart.
    let spread = vis_transform(0.99, 0.4) - vis_transform(0.95, 0.4);
    assert!(spread > 0.99 - 0.95);
}

#[test]
fn test_run_scoring_propagates_missing_fields() {
    let bundle = bundle_of(vec![
        row(Some(1.0), Some(280.0), Some(1.5)),
        row(None, Some(280.0), Some(1.5)),
        row(Some(1.0), None, Some(1.5)),
        row(Some(1.0), Some(280.0), None),
    ]);
    let out = run_scoring(&bundle, &[0, 1, 2, 3], &profile());

    assert_eq!(out.records[0].combined, Some(1.0));
    assert_eq!(out.records[0].vis, Some(1.0));
    assert_eq!(out.records[0].delta, Some(0.0));

    for record in &out.records[1..] {
        assert!(record.combined.is_none());
        assert!(record.vis.is_none());
        assert!(record.delta.is_none());
    }
    assert!(out.records[1].insol_score.is_none());
    assert_eq!(out.records[1].teq_score, Some(1.0));
    assert_eq!(out.records[1].prad_score, Some(1.0));
}

#[test]
fn test_run_scoring_midrange_flux() {
    let bundle = bundle_of(vec![row(Some(5.0), Some(280.0), Some(1.5))]);
    let out = run_scoring(&bundle, &[0], &profile());
    let insol = out.records[0].insol_score.unwrap();
    assert!((insol - 5.0 / 9.0).abs() < 1e-12);
    let combined = out.records[0].combined.unwrap();
    assert!((combined - (5.0f64 / 9.0).cbrt()).abs() < 1e-12);
    assert!((combined - 0.822).abs() < 1e-3);
}

#[test]
fn test_determinism_bits() {
    let bundle = bundle_of(vec![row(Some(2.3), Some(291.0), Some(1.7))]);
    let out_a = run_scoring(&bundle, &[0], &profile());
    let out_b = run_scoring(&bundle, &[0], &profile());
    assert_eq!(
        out_a.records[0].combined.unwrap().to_bits(),
        out_b.records[0].combined.unwrap().to_bits()
    );
    assert_eq!(
        out_a.records[0].vis.unwrap().to_bits(),
        out_b.records[0].vis.unwrap().to_bits()
    );
}
