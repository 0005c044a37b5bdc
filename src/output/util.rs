// SPDX-License-Identifier: GPL-3.0-or-later
//! Shared helpers for writing output files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TranscodeError};

/// Create an output file, classifying failures as I/O errors on `path`.
pub fn create_output_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| TranscodeError::io("create", path, e))
}

/// Write a fully rendered buffer to `path`, replacing any existing file.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let mut out = BufWriter::new(create_output_file(path)?);
    out.write_all(data)
        .and_then(|()| out.flush())
        .map_err(|e| TranscodeError::io("write", path, e))
}
