//! Command session with a HolidayDuino
//!
//! Wraps a [`DeviceLink`] with the three commands the firmware understands:
//!
//! - `?` replies with the identity line (`HolidayDuino05-20`)
//! - a decimal number stages a globe count
//! - `L` latches the staged value and echoes it back

use crate::error::Result;
use crate::link::DeviceLink;
use crate::serial::FALLBACK_BAUD_RATE;

/// Identity query command
pub const IDENTITY_QUERY: &str = "?";

/// Latch command
pub const LATCH: &str = "L";

/// An open conversation with one board
#[derive(Debug)]
pub struct HolidayDuino<L> {
    link: L,
    fallback_baud_rate: u32,
}

impl<L: DeviceLink> HolidayDuino<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            fallback_baud_rate: FALLBACK_BAUD_RATE,
        }
    }

    /// Baud rate used when the first identity query gets no reply
    pub fn with_fallback_baud_rate(mut self, baud_rate: u32) -> Self {
        self.fallback_baud_rate = baud_rate;
        self
    }

    /// Ask for the identity, retrying once at the fallback baud rate.
    ///
    /// Boards still running the legacy bootloader firmware only answer at
    /// 57600. The retry happens only when nothing at all came back; a reply
    /// that is just whitespace is returned as is.
    pub fn query_identity(&mut self) -> Result<String> {
        let reply = self.ask(IDENTITY_QUERY)?;
        if !reply.is_empty() {
            return Ok(reply.trim().to_string());
        }

        tracing::warn!(
            "No reply to identity query, retrying at {} baud",
            self.fallback_baud_rate
        );
        self.link.switch_baud_rate(self.fallback_baud_rate)?;
        let reply = self.ask(IDENTITY_QUERY)?;
        Ok(reply.trim().to_string())
    }

    /// Ask for the identity once at the current baud rate
    pub fn query_identity_once(&mut self) -> Result<String> {
        let reply = self.ask(IDENTITY_QUERY)?;
        Ok(reply.trim().to_string())
    }

    /// Stage a globe count; takes effect on [`HolidayDuino::latch`]
    pub fn set_globes(&mut self, count: u32) -> Result<()> {
        tracing::info!("Setting globe count to {}", count);
        self.link.send(&count.to_string())
    }

    /// Latch the staged value and return the board's echo
    pub fn latch(&mut self) -> Result<String> {
        self.link.send(LATCH)?;
        let echo = self.link.read_line()?;
        Ok(echo.trim().to_string())
    }

    /// Give back the link, e.g. to close it
    pub fn into_inner(self) -> L {
        self.link
    }

    fn ask(&mut self, command: &str) -> Result<String> {
        self.link.clear_input()?;
        self.link.send(command)?;
        self.link.read_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::MockDeviceLink;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::collections::VecDeque;

    /// Link that answers `queries` identity queries with `replies` in order
    fn scripted_link(queries: usize, replies: &[&str]) -> MockDeviceLink {
        let mut replies: VecDeque<String> = replies.iter().map(|r| r.to_string()).collect();
        let mut link = MockDeviceLink::new();
        link.expect_clear_input()
            .times(queries)
            .returning(|| Ok(()));
        link.expect_send()
            .with(eq("?"))
            .times(queries)
            .returning(|_| Ok(()));
        link.expect_read_line()
            .times(queries)
            .returning(move || Ok(replies.pop_front().unwrap_or_default()));
        link
    }

    #[test]
    fn identity_reply_is_trimmed() {
        let mut link = scripted_link(1, &["HolidayDuino05-20\r\n"]);
        link.expect_switch_baud_rate().never();

        let mut board = HolidayDuino::new(link);
        assert_eq!(board.query_identity().unwrap(), "HolidayDuino05-20");
    }

    #[test]
    fn silent_board_is_retried_at_fallback_rate() {
        let mut link = scripted_link(2, &["", "HolidayDuino01\n"]);
        link.expect_switch_baud_rate()
            .with(eq(57_600))
            .times(1)
            .returning(|_| Ok(()));

        let mut board = HolidayDuino::new(link);
        assert_eq!(board.query_identity().unwrap(), "HolidayDuino01");
    }

    #[test]
    fn fallback_happens_only_once() {
        let mut link = scripted_link(2, &["", ""]);
        link.expect_switch_baud_rate()
            .times(1)
            .returning(|_| Ok(()));

        let mut board = HolidayDuino::new(link);
        assert_eq!(board.query_identity().unwrap(), "");
    }

    #[test]
    fn whitespace_reply_does_not_trigger_fallback() {
        let mut link = scripted_link(1, &["\r\n"]);
        link.expect_switch_baud_rate().never();

        let mut board = HolidayDuino::new(link);
        assert_eq!(board.query_identity().unwrap(), "");
    }

    #[test]
    fn single_query_never_switches_rate() {
        let mut link = scripted_link(1, &[""]);
        link.expect_switch_baud_rate().never();

        let mut board = HolidayDuino::new(link);
        assert_eq!(board.query_identity_once().unwrap(), "");
    }

    #[test]
    fn custom_fallback_rate() {
        let mut link = scripted_link(2, &["", "HolidayDuino02"]);
        link.expect_switch_baud_rate()
            .with(eq(38_400))
            .times(1)
            .returning(|_| Ok(()));

        let mut board = HolidayDuino::new(link).with_fallback_baud_rate(38_400);
        assert_eq!(board.query_identity().unwrap(), "HolidayDuino02");
    }

    #[test]
    fn globes_then_latch() {
        let mut link = MockDeviceLink::new();
        let mut seq = Sequence::new();
        link.expect_send()
            .with(eq("50"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        link.expect_send()
            .with(eq("L"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        link.expect_read_line()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok("50\r\n".to_string()));

        let mut board = HolidayDuino::new(link);
        board.set_globes(50).unwrap();
        assert_eq!(board.latch().unwrap(), "50");
    }
}
