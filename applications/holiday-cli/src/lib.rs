//! HolidayDuino operator tools
//!
//! Library half of the `holidayduino-upgrade` and `holidayduino-globes`
//! binaries: configuration, logging, exit codes, the external uploader and
//! reboot script, and the two workflows.
//!
//! This library exposes the workflows for testing against in-memory links.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;

// Re-export commonly used types for convenience
pub use crate::config::ToolConfig;
pub use crate::error::{exit_code, report, CliError, Result};
pub use crate::services::{FirmwareUploader, RebootTrigger};
