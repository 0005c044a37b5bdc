// SPDX-License-Identifier: GPL-3.0-or-later
//! RISC-V Instruction Image Transcoder Library
//!
//! This library slices binary instruction images into 32-bit words and renders
//! them for the FPGA test bench: byte-reversed binaries, VHDL hex literal lists,
//! and viciLab macro scripts.

pub mod cli;
pub mod error;
pub mod output;
pub mod word;

pub use error::{Result, TranscodeError};
pub use word::{WORD_SIZE, Word, WordStream};
