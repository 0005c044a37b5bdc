// SPDX-License-Identifier: GPL-3.0-or-later
//! Command-line plumbing shared by all transcoder binaries.
//!
//! Every utility takes `<input_file> <output_file>`. Any failure prints a
//! diagnostic on standard output and exits with status 1; log output goes to
//! standard error.

use clap::error::{ContextKind, ErrorKind};
use clap::{Args, CommandFactory, Parser};
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::error::TranscodeError;
use crate::output::hex_literal::DEFAULT_PER_LINE;
use crate::output::macro_script::{DEFAULT_DELAY_MS, DEFAULT_STEP_CYCLES};
use crate::output::{HexLiteral, MacroScript, Strategy, transcode_file};

/// Positional input and output paths
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Instruction image to read (length must be a multiple of 4 bytes)
    pub input_file: PathBuf,

    /// File to write
    pub output_file: PathBuf,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct LogArgs {
    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct HexArgs {
    /// Number of literals per line
    #[arg(long, default_value_t = DEFAULT_PER_LINE)]
    pub per_line: NonZeroUsize,
}

impl HexArgs {
    pub fn strategy(&self) -> Strategy {
        Strategy::HexLiteral(HexLiteral::new(self.per_line))
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct MacroArgs {
    /// Clock cycles to step after each word
    #[arg(long, default_value_t = DEFAULT_STEP_CYCLES)]
    pub step: u32,

    /// Delay after each word, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u32,
}

impl MacroArgs {
    pub fn strategy(&self) -> Strategy {
        Strategy::MacroScript(MacroScript {
            step_cycles: self.step,
            delay_ms: self.delay_ms,
        })
    }
}

/// A transcoder binary: its parsed arguments name one strategy and one file pair.
pub trait Utility: Parser {
    fn strategy(&self) -> Strategy;
    fn files(&self) -> &FileArgs;
    fn log(&self) -> LogArgs;
}

/// Install the stderr log subscriber.
pub fn init_logging(log: LogArgs) {
    let level = if log.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Classify a clap failure that means the required paths were not supplied.
///
/// The usage shown is the one clap attached to the error, which names the
/// subcommand that was missing its paths; the top-level usage is the fallback.
pub fn argument_error<P: CommandFactory>(err: &clap::Error) -> Option<TranscodeError> {
    match err.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let usage = match err.get(ContextKind::Usage) {
                Some(usage) => usage.to_string(),
                None => P::command().render_usage().to_string(),
            };
            Some(TranscodeError::Argument { usage })
        }
        _ => None,
    }
}

/// Parse arguments, printing the diagnostic and choosing the exit code on failure.
pub fn parse_args_from<P, I, T>(args: I) -> Result<P, ExitCode>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => Ok(parsed),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            Err(ExitCode::SUCCESS)
        }
        Err(err) => {
            match argument_error::<P>(&err) {
                Some(arg_err) => println!("{}", arg_err),
                None => println!("{}", err.render()),
            }
            Err(ExitCode::FAILURE)
        }
    }
}

/// Entry point shared by the binaries.
pub fn run<U: Utility>() -> ExitCode {
    let args = match parse_args_from::<U, _, _>(std::env::args_os()) {
        Ok(args) => args,
        Err(code) => return code,
    };
    init_logging(args.log());

    let files = args.files();
    match transcode_file(&args.strategy(), &files.input_file, &files.output_file) {
        Ok(summary) => {
            println!("Wrote {} words to {:?}", summary.words, files.output_file);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{:#}", anyhow::Error::new(err));
            ExitCode::FAILURE
        }
    }
}
