//! Loading files into an index.

use std::fs;
use tempfile::TempDir;
use termrank::load::{load_path, Format};
use termrank::{Error, PrefixIndex};

const SAMPLE_TERMS: &str = "4\n     0\tbear\n     2\tbearish\n     1\tbeat\n     5\tcat\n";

#[test]
fn terms_file_round_trips_through_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, SAMPLE_TERMS).unwrap();

    let index = PrefixIndex::build(load_path(&path, None).unwrap());
    let texts: Vec<String> = index
        .matches("bea")
        .iter()
        .map(|e| e.text().to_string())
        .collect();
    assert_eq!(texts, vec!["bearish", "beat", "bear"]);
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.data");
    fs::write(&path, r#"[{"text":"cat","weight":5}]"#).unwrap();

    assert!(load_path(&path, None).is_err());
    assert_eq!(load_path(&path, Some(Format::Json)).unwrap().len(), 1);
}

#[test]
fn negative_weight_in_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "2\n1\tok\n-9\tbad\n").unwrap();

    let err = load_path(&path, None).unwrap_err();
    assert!(matches!(
        err,
        Error::NegativeWeight {
            weight: -9,
            position: Some(1)
        }
    ));
}
