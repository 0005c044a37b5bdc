// SPDX-License-Identifier: GPL-3.0-or-later
//! Error taxonomy for the transcoder.
//!
//! Every variant is fatal for the invoking process: the binaries print the
//! message and exit with status 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The command line did not supply the required positional arguments.
    #[error("Error : not enough argument\n{usage}")]
    Argument { usage: String },

    /// The input image is not a whole number of words.
    #[error(
        "Error : file is corrupted, it should be a multiple of {word_size} bytes long (got {len} bytes)"
    )]
    Format { len: usize, word_size: usize },

    /// Reading the input or writing the output failed.
    #[error("Error : failed to {action} {path:?}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TranscodeError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        TranscodeError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TranscodeError>;
