use std::path::Path;

use tempfile::tempdir;
use zeroscan::commands::load_scan_config;
use zeroscan::file_display_name;
use zeroscan_core::analysis::ClassifierKind;

#[test]
fn file_display_name_uses_last_path_component() {
    assert_eq!(file_display_name(Path::new("/tmp/dumps/ram_0x1000.csv")), "ram_0x1000.csv");
    assert_eq!(file_display_name(Path::new("ram_0x1000.csv")), "ram_0x1000.csv");
}

#[test]
fn file_display_name_falls_back_to_full_path() {
    assert_eq!(file_display_name(Path::new("/")), "/");
}

#[cfg(unix)]
#[test]
fn non_utf8_names_display_the_same_as_the_recorded_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path = Path::new("/dumps").join(OsStr::from_bytes(b"ram_\xff_0x10.csv"));
    let shown = file_display_name(&path);
    assert_eq!(shown, zeroscan_core::services::dump_file_name(&path));
    assert_eq!(shown, "ram_\u{fffd}_0x10.csv");
}

#[test]
fn cli_flags_override_config_file() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("scan.json");
    std::fs::write(&path, r#"{ "block_size": 1024 }"#).expect("write config");

    let config = load_scan_config(Some(&path), None, false).expect("load");
    assert_eq!(config.block_size, 1024);
    assert_eq!(config.classifier, ClassifierKind::Tolerant);

    let config = load_scan_config(Some(&path), Some(16), true).expect("load with overrides");
    assert_eq!(config.block_size, 16);
    assert_eq!(config.classifier, ClassifierKind::Strict);
}

#[test]
fn zero_block_size_override_is_rejected() {
    let err = load_scan_config(None, Some(0), false).unwrap_err();
    assert!(err.to_string().contains("Invalid scan configuration"), "unexpected error: {err}");
}

#[test]
fn oversized_block_size_override_is_rejected() {
    let err = load_scan_config(None, Some(100_000_000_000_000), false).unwrap_err();
    assert!(format!("{err:#}").contains("exceeds the maximum"), "unexpected error: {err:#}");
}

#[test]
fn missing_config_file_is_reported() {
    let tmp = tempdir().expect("tempdir");
    let err = load_scan_config(Some(&tmp.path().join("nope.yaml")), None, false).unwrap_err();
    assert!(err.to_string().contains("Failed to load scan config"), "unexpected error: {err}");
}
