/// The two tool workflows, independent of how the link was opened
pub mod globes;
pub mod upgrade;

use anyhow::Context;
use holiday_serial::{device_present, SerialLink};
use std::path::Path;

use crate::config::ToolConfig;
use crate::error::CliError;

/// Load configuration, apply the `--device` override and open the board.
///
/// Fails with `DeviceNotFound` before touching the port when the node is
/// missing.
pub fn connect(
    config_path: Option<&Path>,
    device: Option<String>,
) -> anyhow::Result<(ToolConfig, SerialLink)> {
    let mut config = ToolConfig::load(config_path)?;
    if let Some(device) = device {
        config.device.path = device;
    }
    config.validate()?;

    device_present(&config.device.path).map_err(CliError::from)?;

    let link = SerialLink::open(config.link_settings())
        .map_err(CliError::from)
        .context("Failed to open HolidayDuino")?;
    Ok((config, link))
}
