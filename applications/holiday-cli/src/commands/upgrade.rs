//! Firmware upgrade check
//!
//! ```text
//! ? ──► identity ──► resolve ──┬─ up to date ─────────────► exit 0
//!                              ├─ upgrade ──► uploader ───► uploader's code
//!                              └─ error ──────────────────► 2..5
//! ```

use holiday_core::{Resolution, VersionResolver};
use holiday_serial::{DeviceLink, HolidayDuino};
use std::io::Write;

use crate::args::UpgradeArgs;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::services::FirmwareUploader;

/// Entry point of `holidayduino-upgrade`
pub fn execute(args: UpgradeArgs, out: &mut impl Write) -> anyhow::Result<u8> {
    let (config, link) = super::connect(args.config.as_deref(), args.device)?;
    let uploader = FirmwareUploader::new(config.firmware.uploader.clone());

    let code = run(link, &config, &uploader, args.dry_run, out)?;
    Ok(code)
}

/// Query the board and resolve its identity.
///
/// The link is closed before returning so the uploader can take the port.
pub fn check<L: DeviceLink>(link: L, config: &ToolConfig) -> Result<(String, Resolution)> {
    let mut board =
        HolidayDuino::new(link).with_fallback_baud_rate(config.device.fallback_baud_rate);
    let identity = board.query_identity()?;
    drop(board);

    let resolver = VersionResolver::new(config.resolver_config());
    let resolution = resolver.resolve(&identity)?;
    Ok((identity, resolution))
}

/// Run the whole upgrade check and return the process exit code.
///
/// Operator messages go to `out`. With `dry_run` the uploader is not run.
pub fn run<L: DeviceLink>(
    link: L,
    config: &ToolConfig,
    uploader: &FirmwareUploader,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<u8> {
    let (identity, resolution) = check(link, config)?;

    let target = match resolution {
        Resolution::UpToDate { .. } => {
            writeln!(out, "Already at latest: {}", identity)?;
            return Ok(0);
        }
        Resolution::Upgrade(target) => target,
    };

    writeln!(out, "Upgrading from: {}", identity)?;
    writeln!(out, "Using: {}", target.image_filename)?;
    out.flush()?;

    if dry_run {
        tracing::info!(
            "Dry run, not flashing {} at {} baud",
            target.image_filename,
            target.baud_rate
        );
        return Ok(0);
    }

    uploader.upload(&target)
}
