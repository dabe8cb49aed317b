/// Reboot trigger - runs the board reset script after a configuration change
use crate::error::{CliError, Result};
use std::path::PathBuf;
use std::process::Command;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RebootTrigger {
    script: PathBuf,
    delay: Duration,
}

impl RebootTrigger {
    pub fn new(script: PathBuf, delay: Duration) -> Self {
        Self { script, delay }
    }

    /// Wait for the board to settle, then run the reboot script.
    ///
    /// Returns the script's exit code. The tools log it but do not fail on it.
    pub fn trigger(&self) -> Result<u8> {
        thread::sleep(self.delay);

        tracing::info!("Running {}", self.script.display());
        let status = Command::new(&self.script)
            .status()
            .map_err(|source| CliError::Spawn {
                program: self.script.clone(),
                source,
            })?;

        Ok(super::uploader::status_code(status))
    }
}
