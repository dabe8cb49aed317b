/// Common test utilities and fixtures
use holiday_serial::{DeviceLink, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// In-memory board answering reads from a script and recording writes
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeBoard {
    replies: VecDeque<String>,
    pub sent: Vec<String>,
    pub baud_switches: Vec<u32>,
}

impl FakeBoard {
    #[allow(dead_code)]
    pub fn with_replies(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl DeviceLink for FakeBoard {
    fn clear_input(&mut self) -> Result<()> {
        Ok(())
    }

    fn send(&mut self, command: &str) -> Result<()> {
        self.sent.push(command.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        Ok(self.replies.pop_front().unwrap_or_default())
    }

    fn switch_baud_rate(&mut self, baud_rate: u32) -> Result<()> {
        self.baud_switches.push(baud_rate);
        Ok(())
    }
}

/// Write an executable shell script into `dir` and return its path
#[cfg(unix)]
#[allow(dead_code)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Output captured from a workflow, as the operator would see it
#[allow(dead_code)]
pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(out)
        .lines()
        .map(str::to_string)
        .collect()
}
