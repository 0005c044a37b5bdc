// SPDX-License-Identifier: GPL-3.0-or-later
//! Macro-script output for the viciLab test bench.
//!
//! The script resets the single-cycle RISC-V core, enables the host upload
//! interface, writes each instruction word into instruction memory, and then
//! lets the core run. Layout:
//!
//! ```text
//! <header template>
//!
//! apply h <index> to singleCycCompTop:hostInstrMem_Add
//! apply h <word> to singleCycCompTop:hostInstrMem_DatIn
//! step clk by 1
//! delay 100 ms
//! ...
//! <footer template>
//! ```
//!
//! The address is the unpadded hex word index, since its width follows the
//! program size. The data is always eight hex digits.

use std::io::{self, Write};

use super::Transcoder;
use super::writer::MacroWriter;
use crate::word::WordStream;

/// Reset and default signal assignments, ending with the upload interface enabled.
/// Ends without a newline; every word block starts with one.
pub const HEADER: &str = include_str!("templates/vici_header.mac");

/// Upload interface deassertion and the run command.
pub const FOOTER: &str = include_str!("templates/vici_footer.mac");

/// Instruction memory address input of the top-level component
pub const SIGNAL_ADDR: &str = "singleCycCompTop:hostInstrMem_Add";

/// Instruction memory data input of the top-level component
pub const SIGNAL_DATA: &str = "singleCycCompTop:hostInstrMem_DatIn";

pub const DEFAULT_STEP_CYCLES: u32 = 1;
pub const DEFAULT_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroScript {
    /// Clock cycles stepped after each word is applied
    pub step_cycles: u32,
    /// Delay after each word, in milliseconds
    pub delay_ms: u32,
}

impl Default for MacroScript {
    fn default() -> Self {
        Self {
            step_cycles: DEFAULT_STEP_CYCLES,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Transcoder for MacroScript {
    fn name(&self) -> &'static str {
        "macro-script"
    }

    fn write_words(&self, words: &WordStream<'_>, out: &mut dyn Write) -> io::Result<()> {
        let mut w = MacroWriter::new(out);

        w.text(HEADER)?;
        for (index, word) in words.iter().enumerate() {
            w.blank_line()?;
            w.apply_hex(index, SIGNAL_ADDR)?;
            w.apply_hex_display(word, SIGNAL_DATA)?;
            w.step_clock(self.step_cycles)?;
            w.delay_ms(self.delay_ms)?;
        }
        w.text(FOOTER)
    }
}
