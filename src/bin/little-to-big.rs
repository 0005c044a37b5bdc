// SPDX-License-Identifier: GPL-3.0-or-later
//! Convert a little-endian instruction image to big-endian by reversing the
//! bytes of every 32-bit word.
//!
//! Usage:
//!   little-to-big <input_file> <output_file>

use clap::Parser;
use riscv_word_transcoder::cli::{self, FileArgs, LogArgs, Utility};
use riscv_word_transcoder::output::{ByteReversal, Strategy};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "little-to-big")]
#[command(version)]
#[command(about = "Reverse the byte order of every 32-bit word in an image")]
struct Args {
    #[command(flatten)]
    files: FileArgs,

    #[command(flatten)]
    log: LogArgs,
}

impl Utility for Args {
    fn strategy(&self) -> Strategy {
        Strategy::ByteReversal(ByteReversal)
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
