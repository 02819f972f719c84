//! Loading `.devboot.toml` from disk

use devboot_meta::{BootstrapConfig, CONFIG_FILE, Error, InstallSpec};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();

    let config = BootstrapConfig::load(temp.path()).unwrap();

    assert_eq!(config, BootstrapConfig::default());
}

#[test]
fn test_load_reads_tool_list() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE),
        "[[tools]]\nname = \"pre-commit\"\nversion = \">=3\"\n",
    )
    .unwrap();

    let config = BootstrapConfig::load(temp.path()).unwrap();

    assert_eq!(
        config.tools,
        vec![InstallSpec::new("pre-commit").with_version(">=3")]
    );
}

#[test]
fn test_load_reports_malformed_toml_with_path() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE), "[[tools]\nname = ").unwrap();

    let err = BootstrapConfig::load(temp.path()).unwrap_err();

    assert!(matches!(err, Error::ConfigParse { .. }), "got {err:?}");
    assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
fn test_load_ignores_config_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(CONFIG_FILE)).unwrap();

    let config = BootstrapConfig::load(temp.path()).unwrap();

    assert_eq!(config, BootstrapConfig::default());
}
