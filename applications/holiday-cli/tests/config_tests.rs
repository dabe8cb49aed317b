/// Configuration layering tests: defaults < file < environment
use holiday_cli::{CliError, ToolConfig};
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("holidayduino.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn empty_environment_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "");

    let config = ToolConfig::load_with_env(Some(&path), env(&[])).unwrap();
    assert_eq!(config, ToolConfig::default());
}

#[test]
fn file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[device]
path = "/dev/ttyUSB0"
timeout_ms = 500

[firmware]
latest_version = "06"
uploader = "/opt/holiday/upload.sh"
"#,
    );

    let config = ToolConfig::load_with_env(Some(&path), env(&[])).unwrap();
    assert_eq!(config.device.path, "/dev/ttyUSB0");
    assert_eq!(config.device.timeout_ms, 500);
    assert_eq!(config.device.baud_rate, 115_200);
    assert_eq!(config.firmware.latest_version, "06");
    assert_eq!(config.firmware.tag, "HolidayDuino");
    assert_eq!(
        config.firmware.uploader,
        std::path::PathBuf::from("/opt/holiday/upload.sh")
    );
    assert_eq!(config.reboot, ToolConfig::default().reboot);
}

#[test]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[firmware]
latest_version = "06"
"#,
    );

    let config = ToolConfig::load_with_env(
        Some(&path),
        env(&[
            ("HOLIDAY_FIRMWARE__LATEST_VERSION", "07"),
            ("HOLIDAY_REBOOT__DELAY_MS", "0"),
        ]),
    )
    .unwrap();
    assert_eq!(config.firmware.latest_version, "07");
    assert_eq!(config.reboot.delay_ms, 0);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = ToolConfig::load_with_env(Some(&path), env(&[])).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[device]\nbaud_rate = \"fast\"\n");

    let err = ToolConfig::load_with_env(Some(&path), env(&[])).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
