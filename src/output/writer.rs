// SPDX-License-Identifier: GPL-3.0-or-later
//! Macro writer abstraction for consistent macro-script output.
//!
//! This module provides the `MacroWriter` struct, which emits the handful of
//! commands the test-bench macro language understands:
//! - Signal assignments (`apply h <value> to <signal>`)
//! - Clock stepping (`step clk by <n>`)
//! - Delays (`delay <n> ms`)
//! - Verbatim template text

use std::fmt::{Display, LowerHex};
use std::io::{self, Write};

/// Macro writer that provides a consistent API for emitting macro commands.
pub struct MacroWriter<W: Write> {
    writer: W,
}

impl<W: Write> MacroWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emit a hex signal assignment.
    ///
    /// The value is rendered without padding, so callers wanting a fixed
    /// width pass an already formatted value.
    ///
    /// Output format: `apply h <value> to <signal>`
    pub fn apply_hex(&mut self, value: impl LowerHex, signal: &str) -> io::Result<()> {
        writeln!(self.writer, "apply h {:x} to {}", value, signal)
    }

    /// Emit a hex signal assignment from a value that renders its own digits,
    /// such as a zero-padded [`Word`](crate::word::Word).
    pub fn apply_hex_display(&mut self, value: impl Display, signal: &str) -> io::Result<()> {
        writeln!(self.writer, "apply h {} to {}", value, signal)
    }

    /// Output format: `step clk by <cycles>`
    pub fn step_clock(&mut self, cycles: u32) -> io::Result<()> {
        writeln!(self.writer, "step clk by {}", cycles)
    }

    /// Output format: `delay <millis> ms`
    pub fn delay_ms(&mut self, millis: u32) -> io::Result<()> {
        writeln!(self.writer, "delay {} ms", millis)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Emit template text exactly as given, without a trailing newline.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    #[test]
    fn test_apply_hex_unpadded() {
        let mut buf = Vec::new();
        let mut writer = MacroWriter::new(&mut buf);
        writer.apply_hex(0x1au32, "top:addr").unwrap();
        writer.apply_hex(0usize, "top:addr").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "apply h 1a to top:addr\napply h 0 to top:addr\n"
        );
    }

    #[test]
    fn test_apply_hex_display() {
        let mut buf = Vec::new();
        let mut writer = MacroWriter::new(&mut buf);
        writer
            .apply_hex_display(Word::new([0, 0, 0xbe, 0xef]), "top:dat")
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "apply h 0000beef to top:dat\n"
        );
    }

    #[test]
    fn test_step_and_delay() {
        let mut buf = Vec::new();
        let mut writer = MacroWriter::new(&mut buf);
        writer.step_clock(1).unwrap();
        writer.delay_ms(100).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "step clk by 1\ndelay 100 ms\n"
        );
    }

    #[test]
    fn test_text_is_verbatim() {
        let mut buf = Vec::new();
        let mut writer = MacroWriter::new(&mut buf);
        writer.text("set a\t\t").unwrap();
        writer.blank_line().unwrap();
        assert_eq!(buf.as_slice(), b"set a\t\t\n");
    }
}
