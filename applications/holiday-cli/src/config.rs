/// Tool configuration
use crate::error::{CliError, Result};
use holiday_core::{ResolverConfig, DEFAULT_LATEST_VERSION, DEFAULT_TAG, OPTIBOOT_BAUD_RATE};
use holiday_serial::{LinkSettings, DEFAULT_BAUD_RATE, FALLBACK_BAUD_RATE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "holidayduino.toml";

/// Prefix of environment overrides, e.g. `HOLIDAY_DEVICE__PATH`
pub const ENV_PREFIX: &str = "HOLIDAY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolConfig {
    #[serde(default = "default_device")]
    pub device: DeviceSettings,

    #[serde(default = "default_firmware")]
    pub firmware: FirmwareSettings,

    #[serde(default = "default_reboot")]
    pub reboot: RebootSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceSettings {
    #[serde(default = "default_device_path")]
    pub path: String,

    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    #[serde(default = "default_fallback_baud_rate")]
    pub fallback_baud_rate: u32,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FirmwareSettings {
    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_latest_version")]
    pub latest_version: String,

    #[serde(default = "default_later_baud_rate")]
    pub later_baud_rate: Option<u32>,

    #[serde(default = "default_uploader")]
    pub uploader: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RebootSettings {
    #[serde(default = "default_reboot_script")]
    pub script: PathBuf,

    #[serde(default = "default_reboot_delay_ms")]
    pub delay_ms: u64,
}

impl ToolConfig {
    /// Load configuration from defaults, a TOML file and the environment.
    ///
    /// `path` wins over `holidayduino.toml` in the working directory; an
    /// explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`ToolConfig::load`] with the environment replaced by `env`
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (HOLIDAY_<SECTION>__<KEY>).
        // Values stay strings so versions like "07" keep their leading zero.
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.device.path.trim().is_empty() {
            return Err(CliError::Config("device.path must not be empty".to_string()));
        }

        if self.device.baud_rate == 0 || self.device.fallback_baud_rate == 0 {
            return Err(CliError::Config(
                "device baud rates must be positive".to_string(),
            ));
        }

        if self.device.timeout_ms == 0 {
            return Err(CliError::Config(
                "device.timeout_ms must be positive".to_string(),
            ));
        }

        if self.firmware.tag.is_empty() {
            return Err(CliError::Config("firmware.tag must not be empty".to_string()));
        }

        if self.firmware.latest_version.is_empty() {
            return Err(CliError::Config(
                "firmware.latest_version must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolver inputs from the `firmware` section
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            tag: self.firmware.tag.clone(),
            latest_version: self.firmware.latest_version.clone(),
            later_baud_rate: self.firmware.later_baud_rate,
        }
    }

    /// Port settings from the `device` section
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings::new(self.device.path.clone())
            .with_baud_rate(self.device.baud_rate)
            .with_timeout(Duration::from_millis(self.device.timeout_ms))
    }
}

// Default values
fn default_device() -> DeviceSettings {
    DeviceSettings {
        path: default_device_path(),
        baud_rate: default_baud_rate(),
        fallback_baud_rate: default_fallback_baud_rate(),
        timeout_ms: default_timeout_ms(),
    }
}

fn default_device_path() -> String {
    "/dev/ttySP1".to_string()
}

fn default_baud_rate() -> u32 {
    DEFAULT_BAUD_RATE
}

fn default_fallback_baud_rate() -> u32 {
    FALLBACK_BAUD_RATE
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_firmware() -> FirmwareSettings {
    FirmwareSettings {
        tag: default_tag(),
        latest_version: default_latest_version(),
        later_baud_rate: default_later_baud_rate(),
        uploader: default_uploader(),
    }
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_latest_version() -> String {
    DEFAULT_LATEST_VERSION.to_string()
}

fn default_later_baud_rate() -> Option<u32> {
    Some(OPTIBOOT_BAUD_RATE)
}

fn default_uploader() -> PathBuf {
    PathBuf::from("./holidayduino_upload.sh")
}

fn default_reboot() -> RebootSettings {
    RebootSettings {
        script: default_reboot_script(),
        delay_ms: default_reboot_delay_ms(),
    }
}

fn default_reboot_script() -> PathBuf {
    PathBuf::from("/home/holiday/scripts/reduino.sh")
}

fn default_reboot_delay_ms() -> u64 {
    1000
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            device: default_device(),
            firmware: default_firmware(),
            reboot: default_reboot(),
        }
    }
}
