
use super::*;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kepler_hzprep_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let file = File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

const CATALOG: &str = "\
kepoi_name,koi_disposition,HZ_bin,koi_insol,koi_teq,koi_prad,H_index,koi_period
K00001.01,CONFIRMED,1,1.0,280,1.5,0.91,365.2
K00002.01,CANDIDATE,1.0,5,280,1.5,0.55,100.0
K00003.01,FALSE POSITIVE,0,,190,,,10.5
K00004.01,CANDIDATE,,2.2,,3.1,0.12,42.0
";

#[test]
fn test_load_catalog_typed_fields() {
    let dir = make_temp_dir();
    let path = dir.join("catalog.csv");
    write_file(&path, CATALOG);

    let bundle = load_catalog(&path).unwrap();
    assert_eq!(bundle.n_rows(), 4);
    assert_eq!(bundle.headers.len(), 8);
    assert_eq!(bundle.records.len(), 4);

    let first = &bundle.rows[0];
    assert_eq!(first.kepoi_name, "K00001.01");
    assert_eq!(first.disposition, "CONFIRMED");
    assert_eq!(first.hz_bin, Some(1));
    assert_eq!(first.insol, Some(1.0));
    assert_eq!(first.teq, Some(280.0));
    assert_eq!(first.prad, Some(1.5));
    assert_eq!(first.h_index, Some(0.91));
}

#[test]
fn test_load_catalog_float_formatted_flag() {
    let dir = make_temp_dir();
    let path = dir.join("catalog.csv");
    write_file(&path, CATALOG);

    let bundle = load_catalog(&path).unwrap();
    assert_eq!(bundle.rows[1].hz_bin, Some(1));
    assert_eq!(bundle.hz_bin1_indices(), vec![0, 1]);
}

#[test]
fn test_load_catalog_empty_cells_become_none() {
    let dir = make_temp_dir();
    let path = dir.join("catalog.csv");
    write_file(&path, CATALOG);

    let bundle = load_catalog(&path).unwrap();
    let third = &bundle.rows[2];
    assert_eq!(third.insol, None);
    assert_eq!(third.prad, None);
    assert_eq!(third.h_index, None);
    assert_eq!(bundle.rows[3].hz_bin, None);
}

#[test]
fn test_load_catalog_gzip_matches_plain() {
    let dir = make_temp_dir();
    let plain = dir.join("catalog.csv");
    let gz = dir.join("catalog.csv.gz");
    write_file(&plain, CATALOG);
    write_gz(&gz, CATALOG);

    let a = load_catalog(&plain).unwrap();
    let b = load_catalog(&gz).unwrap();
    assert_eq!(a.n_rows(), b.n_rows());
    for (x, y) in a.rows.iter().zip(b.rows.iter()) {
        assert_eq!(x.kepoi_name, y.kepoi_name);
        assert_eq!(x.hz_bin, y.hz_bin);
        assert_eq!(x.teq, y.teq);
    }
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = make_temp_dir();
    let path = dir.join("catalog.csv");
    write_file(
        &path,
        "kepoi_name,koi_disposition,HZ_bin,koi_insol,koi_teq,koi_prad\nK1,CANDIDATE,1,1,280,1.5\n",
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn(ref col) if col == "H_index"));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = make_temp_dir();
    let err = load_catalog(&dir.join("nope.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::MissingInput(_)));
}

#[test]
fn test_unparseable_cell_is_fatal() {
    let dir = make_temp_dir();
    let path = dir.join("catalog.csv");
    write_file(
        &path,
        "kepoi_name,koi_disposition,HZ_bin,koi_insol,koi_teq,koi_prad,H_index\nK1,CANDIDATE,1,not-a-number,280,1.5,0.5\n",
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}
