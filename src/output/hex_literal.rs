// SPDX-License-Identifier: GPL-3.0-or-later
//! Hex-literal output for pasting into a VHDL test bench.
//!
//! Each word becomes `X"<8 hex digits>", ` and a newline is written before
//! every `per_line`-th literal, starting with the first one.

use std::io::{self, Write};
use std::num::NonZeroUsize;

use super::Transcoder;
use crate::word::WordStream;

/// Default number of literals per output line
pub const DEFAULT_PER_LINE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLiteral {
    pub per_line: NonZeroUsize,
}

impl HexLiteral {
    pub fn new(per_line: NonZeroUsize) -> Self {
        Self { per_line }
    }
}

impl Default for HexLiteral {
    fn default() -> Self {
        Self::new(DEFAULT_PER_LINE)
    }
}

impl Transcoder for HexLiteral {
    fn name(&self) -> &'static str {
        "hex-literal"
    }

    fn write_words(&self, words: &WordStream<'_>, out: &mut dyn Write) -> io::Result<()> {
        for (index, word) in words.iter().enumerate() {
            if index % self.per_line.get() == 0 {
                writeln!(out)?;
            }
            write!(out, "X\"{}\", ", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(hex: HexLiteral, data: &[u8]) -> String {
        let words = WordStream::new(data).unwrap();
        let mut buf = Vec::new();
        hex.write_words(&words, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_four_words_one_line() {
        let data: Vec<u8> = (0u8..16).collect();
        assert_eq!(
            render(HexLiteral::default(), &data),
            "\nX\"00010203\", X\"04050607\", X\"08090a0b\", X\"0c0d0e0f\", "
        );
    }

    #[test]
    fn test_ninth_word_wraps() {
        let data = [0u8; 36];
        let out = render(HexLiteral::default(), &data);
        let literal = "X\"00000000\", ";
        assert_eq!(out, format!("\n{}\n{}", literal.repeat(8), literal));
    }

    #[test]
    fn test_custom_per_line() {
        let data = [0xffu8; 12];
        let out = render(HexLiteral::new(NonZeroUsize::new(2).unwrap()), &data);
        assert_eq!(out, "\nX\"ffffffff\", X\"ffffffff\", \nX\"ffffffff\", ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(HexLiteral::default(), &[]), "");
    }
}
