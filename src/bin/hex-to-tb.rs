// SPDX-License-Identifier: GPL-3.0-or-later
//! Turn an instruction image into a list of VHDL hex literals
//! (`X"00000013", ...`) ready to paste into a test bench.
//!
//! Usage:
//!   hex-to-tb [--per-line N] <input_file> <output_file>

use clap::Parser;
use riscv_word_transcoder::cli::{self, FileArgs, HexArgs, LogArgs, Utility};
use riscv_word_transcoder::output::Strategy;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hex-to-tb")]
#[command(version)]
#[command(about = "Generate VHDL test bench hex literals from an instruction image")]
struct Args {
    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    hex: HexArgs,

    #[command(flatten)]
    log: LogArgs,
}

impl Utility for Args {
    fn strategy(&self) -> Strategy {
        self.hex.strategy()
    }

    fn files(&self) -> &FileArgs {
        &self.files
    }

    fn log(&self) -> LogArgs {
        self.log
    }
}

fn main() -> ExitCode {
    cli::run::<Args>()
}
