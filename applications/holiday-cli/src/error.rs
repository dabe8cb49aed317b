/// Tool error types and exit codes
use holiday_core::HolidayError;
use holiday_serial::SerialError;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for bad usage, a missing device and unexpected I/O failures
pub const GENERAL_FAILURE: u8 = 1;

/// Exit code when the uploader cannot be started, as a shell would report it
pub const COMMAND_NOT_FOUND: u8 = 127;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Holiday(#[from] HolidayError),

    #[error("Serial error: {0}")]
    Serial(SerialError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code reported for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Holiday(err) => err.exit_code(),
            CliError::Spawn { .. } => COMMAND_NOT_FOUND,
            CliError::Serial(_) | CliError::Config(_) | CliError::Io(_) => GENERAL_FAILURE,
        }
    }
}

impl From<SerialError> for CliError {
    fn from(err: SerialError) -> Self {
        // A missing device keeps its own exit code
        match err {
            SerialError::Device(err) => CliError::Holiday(err),
            other => CliError::Serial(other),
        }
    }
}

/// Print the failure of an entry point to `out` and pick the exit code
pub fn report(result: anyhow::Result<u8>, out: &mut impl Write) -> u8 {
    match result {
        Ok(code) => code,
        Err(err) => {
            // Nothing left to report to if the terminal is gone
            let _ = writeln!(out, "{:#}", err);
            exit_code(&err)
        }
    }
}

/// Exit code for an error coming out of an entry point
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<CliError>() {
            return err.exit_code();
        }
        if let Some(err) = cause.downcast_ref::<HolidayError>() {
            return err.exit_code();
        }
    }
    GENERAL_FAILURE
}
