//! Integration tests for loading and merging the CSV fixtures.

use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use stocklens_core::config::SourcesConfig;
use stocklens_core::{DataError, TimeSeriesPipeline};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn fixture_sources() -> SourcesConfig {
    SourcesConfig {
        training: fixture("prices_training.csv"),
        testing: fixture("prices_testing.csv"),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn fixtures_merge_into_one_sorted_series() {
    let pipeline = TimeSeriesPipeline::load(&fixture_sources()).unwrap();

    let rows: Vec<usize> = pipeline.sources().iter().map(|s| s.rows).collect();
    assert_eq!(rows, vec![30, 12]);
    assert_eq!(pipeline.len(), 42);

    for pair in pipeline.records().windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }
    assert_eq!(pipeline.span(), Some((date(2019, 12, 2), date(2020, 1, 27))));
}

#[test]
fn overlapping_date_is_kept_twice() {
    let pipeline = TimeSeriesPipeline::load(&fixture_sources()).unwrap();
    assert_eq!(pipeline.duplicate_dates(), 1);

    let overlap = pipeline.window(date(2020, 1, 10), date(2020, 1, 10));
    assert_eq!(overlap.len(), 2);
    // training row first, then testing row
    assert_eq!(overlap[0].close, 66.93);
    assert_eq!(overlap[1].close, 68.22);
}

#[test]
fn reloading_is_bit_identical() {
    let first = TimeSeriesPipeline::load(&fixture_sources()).unwrap();
    let second = TimeSeriesPipeline::load(&fixture_sources()).unwrap();
    assert_eq!(first.fingerprint(), second.fingerprint());

    let (start, end) = first.span().unwrap();
    assert_eq!(first.window(start, end), second.window(start, end));
    assert_eq!(
        first.render(&first.default_view()),
        second.render(&second.default_view())
    );
}

#[test]
fn missing_source_aborts_load() {
    let sources = SourcesConfig {
        training: fixture("prices_training.csv"),
        testing: fixture("does_not_exist.csv"),
    };
    let err = TimeSeriesPipeline::load(&sources).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn schema_mismatch_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_csv(
        dir.path(),
        "good.csv",
        "date,open,high,low,close,volume\n2021-03-01,10,11,9,10.5,100\n",
    );
    let bad = write_csv(
        dir.path(),
        "bad.csv",
        "date,open,high,low,price,volume\n2021-03-02,10,11,9,10.5,100\n",
    );

    let err = TimeSeriesPipeline::load_paths(&[good.as_path(), bad.as_path()]).unwrap_err();
    match err {
        DataError::MissingColumn { path, column } => {
            assert_eq!(path, bad);
            assert_eq!(column, "close");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn lowercase_and_vendor_headers_load_alike() {
    let dir = tempfile::tempdir().unwrap();
    let lower = write_csv(
        dir.path(),
        "lower.csv",
        "date,open,high,low,close,volume\n2021-03-02,10,11,9,10.5,100\n",
    );
    let vendor = write_csv(
        dir.path(),
        "vendor.csv",
        "Date,Open,High,Low,Close,Adj Close,Volume\n03/01/2021,9,10,8,9.5,9.5,200.0\n",
    );

    let pipeline = TimeSeriesPipeline::load_paths(&[lower.as_path(), vendor.as_path()]).unwrap();
    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.records()[0].date, date(2021, 3, 1));
    assert_eq!(pipeline.records()[0].volume, 200);
    assert_eq!(pipeline.records()[1].date, date(2021, 3, 2));
}
