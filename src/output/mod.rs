// SPDX-License-Identifier: GPL-3.0-or-later
//! Output strategies and the file-to-file transcoding pipeline.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, TranscodeError};
use crate::word::{WordStream, load_image};

pub mod hex_literal;
pub mod macro_script;
pub mod reverse;
pub mod util;
pub mod writer;

pub use hex_literal::HexLiteral;
pub use macro_script::MacroScript;
pub use reverse::{ByteReversal, reverse_words};
pub use util::{create_output_file, write_output};

/// A per-word output format.
///
/// Implementations consume the stream once, in order, and write the complete
/// output (including any fixed surrounding text) to `out`.
pub trait Transcoder {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    fn write_words(&self, words: &WordStream<'_>, out: &mut dyn Write) -> io::Result<()>;
}

/// The output format selected by the invoked utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ByteReversal(ByteReversal),
    HexLiteral(HexLiteral),
    MacroScript(MacroScript),
}

impl Strategy {
    fn transcoder(&self) -> &dyn Transcoder {
        match self {
            Strategy::ByteReversal(t) => t,
            Strategy::HexLiteral(t) => t,
            Strategy::MacroScript(t) => t,
        }
    }
}

impl Transcoder for Strategy {
    fn name(&self) -> &'static str {
        self.transcoder().name()
    }

    fn write_words(&self, words: &WordStream<'_>, out: &mut dyn Write) -> io::Result<()> {
        self.transcoder().write_words(words, out)
    }
}

/// Result of a successful file transcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub words: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// Validate `data`, split it into words, and render it in memory.
pub fn transcode(transcoder: &dyn Transcoder, data: &[u8]) -> Result<Vec<u8>> {
    let words = WordStream::new(data)?;
    tracing::debug!(
        format = transcoder.name(),
        words = words.len(),
        "rendering word stream"
    );

    let mut rendered = Vec::with_capacity(data.len());
    transcoder
        .write_words(&words, &mut rendered)
        .map_err(|e| TranscodeError::io("render", "<memory>", e))?;
    Ok(rendered)
}

/// Transcode the image at `input` into `output`.
///
/// The output is rendered completely before the output file is created, so a
/// rejected input never leaves a partial file behind.
pub fn transcode_file(transcoder: &dyn Transcoder, input: &Path, output: &Path) -> Result<Summary> {
    let data = load_image(input)?;
    let rendered = transcode(transcoder, &data)?;
    write_output(output, &rendered)?;

    let summary = Summary {
        words: data.len() / crate::word::WORD_SIZE,
        input_bytes: data.len(),
        output_bytes: rendered.len(),
    };
    tracing::info!(
        format = transcoder.name(),
        input = ?input,
        output = ?output,
        words = summary.words,
        bytes = summary.output_bytes,
        "transcoded image"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::ByteReversal(ByteReversal).name(), "byte-reversal");
        assert_eq!(
            Strategy::HexLiteral(HexLiteral::default()).name(),
            "hex-literal"
        );
        assert_eq!(
            Strategy::MacroScript(MacroScript::default()).name(),
            "macro-script"
        );
    }

    #[test]
    fn test_transcode_rejects_partial_word() {
        for strategy in [
            Strategy::ByteReversal(ByteReversal),
            Strategy::HexLiteral(HexLiteral::default()),
            Strategy::MacroScript(MacroScript::default()),
        ] {
            assert!(matches!(
                transcode(&strategy, &[0; 6]),
                Err(TranscodeError::Format { len: 6, .. })
            ));
        }
    }

    #[test]
    fn test_transcode_dispatches() {
        let data = [1, 2, 3, 4];
        assert_eq!(
            transcode(&Strategy::ByteReversal(ByteReversal), &data).unwrap(),
            vec![4, 3, 2, 1]
        );
        assert_eq!(
            transcode(&Strategy::HexLiteral(HexLiteral::default()), &data).unwrap(),
            b"\nX\"01020304\", ".to_vec()
        );
    }
}
