// SPDX-License-Identifier: GPL-3.0-or-later
//! Generate a viciLab macro script that uploads an instruction image into
//! the single-cycle core's instruction memory and then runs it.
//!
//! Usage:
//!   hex-to-vicimacro [--step N] [--delay-ms N] <input_file> <output_file>

use clap::Parser;
use riscv_word_transcoder::cli::{self, FileArgs, LogArgs, MacroArgs, Utility};
use riscv_word_transcoder::output::Strategy;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hex-to-vicimacro")]
#[command(version)]
#[command(about = "Generate a viciLab macro script from an instruction image")]
struct Args {
    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    script: MacroArgs,

    #[command(flatten)]
    log: LogArgs,
}

impl Utility for Args {
    fn strategy(&self) -> Strategy {
        self.script.strategy()
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
