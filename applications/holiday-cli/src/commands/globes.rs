//! Globe count update
//!
//! Sends the count, latches it and reboots the board when the echo confirms
//! the new value. Without a count the current value is latched and echoed.

use holiday_core::DeviceIdentity;
use holiday_serial::{DeviceLink, HolidayDuino};
use std::io::Write;
use std::time::Duration;

use crate::args::GlobesArgs;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::services::RebootTrigger;

/// Entry point of `holidayduino-globes`
pub fn execute(args: GlobesArgs, out: &mut impl Write) -> anyhow::Result<u8> {
    let (config, link) = super::connect(args.config.as_deref(), args.device)?;
    let reboot = RebootTrigger::new(
        config.reboot.script.clone(),
        Duration::from_millis(config.reboot.delay_ms),
    );

    let outcome = run(link, &config, args.num_globes, &reboot, out)?;
    tracing::debug!("{:?}", outcome);
    Ok(0)
}

/// What happened during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobesOutcome {
    /// Identity line the board answered with
    pub identity: String,
    /// Value echoed after the latch command
    pub echo: String,
    /// Whether the reboot trigger was run
    pub rebooted: bool,
}

/// Run the globe-count workflow.
///
/// Fails with `ProtocolMismatch` before sending anything when the board does
/// not identify itself with the configured tag.
pub fn run<L: DeviceLink>(
    link: L,
    config: &ToolConfig,
    num_globes: Option<u32>,
    reboot: &RebootTrigger,
    out: &mut impl Write,
) -> Result<GlobesOutcome> {
    let mut board = HolidayDuino::new(link);

    let identity = board.query_identity_once()?;
    DeviceIdentity::parse(&identity, &config.firmware.tag)?;
    writeln!(out, "Response: {}", identity)?;

    if let Some(count) = num_globes {
        board.set_globes(count)?;
    }
    let echo = board.latch()?;
    writeln!(out, "Response: {}", echo)?;
    drop(board);

    let confirmed = num_globes.is_some_and(|count| echo == count.to_string());
    if confirmed {
        writeln!(out, "Rebooting HolidayDuino")?;
        out.flush()?;
        match reboot.trigger() {
            Ok(0) => {}
            Ok(code) => tracing::warn!("Reboot script exited with code {}", code),
            Err(err) => tracing::error!("{}", err),
        }
    } else if num_globes.is_some() {
        tracing::warn!("Board echoed {:?}, not rebooting", echo);
    }

    Ok(GlobesOutcome {
        identity,
        echo,
        rebooted: confirmed,
    })
}
