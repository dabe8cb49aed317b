/// Command-line arguments for both tools
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use crate::error::GENERAL_FAILURE;

#[derive(Debug, Parser)]
#[command(name = "holidayduino-upgrade", version)]
#[command(about = "Check HolidayDuino firmware and flash the latest image if needed", long_about = None)]
pub struct UpgradeArgs {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Serial device, overrides device.path
    #[arg(short, long)]
    pub device: Option<String>,

    /// Resolve and report, but do not run the uploader
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Parser)]
#[command(name = "holidayduino-globes", version)]
#[command(about = "Set the number of globes on a HolidayDuino", long_about = None)]
pub struct GlobesArgs {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Serial device, overrides device.path
    #[arg(short, long)]
    pub device: Option<String>,

    /// Number of globes; without it the current value is latched and echoed
    #[arg(value_name = "NUM_GLOBES")]
    pub num_globes: Option<u32>,
}

/// Parse arguments, exiting with 1 on bad usage (0 for help and version)
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = usage_exit_code(&err);
            // Printing to a closed terminal is not worth reporting
            let _ = err.print();
            std::process::exit(i32::from(code));
        }
    }
}

/// Exit code for a clap parse failure
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => GENERAL_FAILURE,
    }
}
