// SPDX-License-Identifier: GPL-3.0-or-later
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use riscv_word_transcoder::cli::{self, FileArgs, HexArgs, LogArgs, MacroArgs, Utility};
use riscv_word_transcoder::output::{ByteReversal, Strategy};

#[derive(Parser, Debug)]
#[command(name = "riscv-word-transcoder")]
#[command(version)]
#[command(about = "Transcode 32-bit instruction images for the FPGA test bench")]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reverse the byte order of every word (little-endian to big-endian)
    Reverse {
        #[command(flatten)]
        files: FileArgs,
    },

    /// Emit VHDL hex literals for a test bench
    Hex {
        #[command(flatten)]
        files: FileArgs,

        #[command(flatten)]
        hex: HexArgs,
    },

    /// Emit a viciLab macro script that uploads the image
    Macro {
        #[command(flatten)]
        files: FileArgs,

        #[command(flatten)]
        script: MacroArgs,
    },
}

impl Utility for Args {
    fn strategy(&self) -> Strategy {
        match &self.command {
            Command::Reverse { .. } => Strategy::ByteReversal(ByteReversal),
            Command::Hex { hex, .. } => hex.strategy(),
            Command::Macro { script, .. } => script.strategy(),
        }
    }

    fn files(&self) -> &FileArgs {
        match &self.command {
            Command::Reverse { files } | Command::Hex { files, .. } | Command::Macro { files, .. } => {
                files
            }
        }
    }

    fn log(&self) -> LogArgs {
        self.log
    }
}

fn main() -> ExitCode {
    cli::run::<Args>()
}
