//! Loading configuration from disk.

use std::io::Write;
use std::path::PathBuf;

use kundali_base::AyanamshaSystem;
use kundali_config::{ConfigError, KundaliConfig};

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[calculation]\nayanamsa = \"raman\"\nprecision = 4\n\n[logging]\nfilter = \"debug\""
    )
    .unwrap();
    let c = KundaliConfig::from_file(file.path()).unwrap();
    assert_eq!(c.natal_ayanamsa().unwrap(), AyanamshaSystem::Raman);
    assert_eq!(c.calculation.precision, 4);
    assert_eq!(c.logging.filter, "debug");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    match KundaliConfig::from_file(&path) {
        Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn search_takes_first_existing() {
    let dir = tempfile::tempdir().unwrap();
    let second = dir.path().join("second.toml");
    std::fs::write(&second, "[dasha]\nmax_level = 3\n").unwrap();
    let paths = vec![dir.path().join("first.toml"), second];
    let c = KundaliConfig::from_search_paths(paths).unwrap();
    assert_eq!(c.dasha.max_level, 3);
}

#[test]
fn search_without_files_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<PathBuf> = vec![dir.path().join("nope.toml")];
    assert_eq!(
        KundaliConfig::from_search_paths(paths).unwrap(),
        KundaliConfig::default()
    );
}
