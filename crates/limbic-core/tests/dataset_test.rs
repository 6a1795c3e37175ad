//! File-level tests of the lexicon loader.

use limbic_core::dataset::load_entries;
use limbic_core::DatasetError;
use test_fixtures::{lexicon_json, octant_lexicon};

#[test]
fn loads_a_lexicon_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vad_lexicon.json");
    std::fs::write(&path, lexicon_json(&octant_lexicon())).unwrap();

    let entries = load_entries(&path).unwrap();
    assert_eq!(entries, octant_lexicon());
}

#[test]
fn missing_file_reports_io_with_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_entries(&path).unwrap_err();
    match err {
        DatasetError::Io { path: reported, .. } => {
            assert!(reported.ends_with("absent.json"), "{reported}");
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn a_single_bad_record_fails_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("torn.json");
    let mut text = lexicon_json(&octant_lexicon());
    // Corrupt the first record by renaming its dominance key.
    text = text.replacen("\"dominance\"", "\"dominanze\"", 1);
    std::fs::write(&path, text).unwrap();

    let err = load_entries(&path).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingField {
            index: 0,
            field: "dominance"
        }
    ));
}
