/// Firmware uploader - wrapper around the flashing script
use crate::error::{CliError, Result};
use holiday_core::ResolvedFirmwareTarget;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone)]
pub struct FirmwareUploader {
    program: PathBuf,
}

impl FirmwareUploader {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Flash `target` and return the uploader's exit code.
    ///
    /// The uploader is called as `<program> <image> <baud>` and inherits the
    /// terminal so the operator sees its progress.
    pub fn upload(&self, target: &ResolvedFirmwareTarget) -> Result<u8> {
        tracing::info!(
            "Running {} {} {}",
            self.program.display(),
            target.image_filename,
            target.baud_rate
        );

        let status = Command::new(&self.program)
            .arg(&target.image_filename)
            .arg(target.baud_rate.to_string())
            .status()
            .map_err(|source| CliError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let code = status_code(status);
        if code != 0 {
            tracing::warn!("Uploader exited with code {}", code);
        }
        Ok(code)
    }
}

/// Exit code of a finished child; signals map to `128 + signal`
pub(crate) fn status_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return (code & 0xff) as u8;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (128 + signal).min(255) as u8;
        }
    }

    crate::error::GENERAL_FAILURE
}
