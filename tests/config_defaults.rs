use assertkit::assert::Assert;
use assertkit::{Config, Recorder};
use std::io::Write;

#[test]
fn test_default_config_values() {
    let config = Config::default();

    assert!(config.output.diff);
    assert!(!config.output.color);
    assert_eq!(config.output.max_value_len, 0);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\ndiff = false\nmax_value_len = 16").unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert!(!config.output.diff);
    assert_eq!(config.output.max_value_len, 16);
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_from_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output\ndiff = ").unwrap();

    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn test_config_drives_rendering() {
    let mut t = Recorder::new();
    let config = Config::parse("[output]\ndiff = false\nmax_value_len = 5\n").unwrap();

    let mut check = Assert::with_config(&mut t, config);
    assert!(!check.equal(&vec!["abcdefgh"], &vec!["zzzzzzzz"], &[]));
    assert!(!check.config().output.diff);

    let failure = t.last_failure().unwrap();
    assert!(failure.contains("...<truncated>"));
    assert!(!failure.contains("Diff"));
}
