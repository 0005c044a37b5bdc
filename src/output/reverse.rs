// SPDX-License-Identifier: GPL-3.0-or-later
//! Byte-reversal output: swaps the byte order of every word.
//!
//! Used to turn a little-endian instruction image into the big-endian layout
//! the instruction memory loader expects. The reversal is generic, so applying
//! it twice gives back the original image.

use std::io::{self, Write};

use super::Transcoder;
use crate::error::Result;
use crate::word::WordStream;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteReversal;

impl Transcoder for ByteReversal {
    fn name(&self) -> &'static str {
        "byte-reversal"
    }

    fn write_words(&self, words: &WordStream<'_>, out: &mut dyn Write) -> io::Result<()> {
        for word in words.iter() {
            out.write_all(&word.reversed().bytes())?;
        }
        Ok(())
    }
}

/// Reverse the bytes of every word in `data`.
pub fn reverse_words(data: &[u8]) -> Result<Vec<u8>> {
    let words = WordStream::new(data)?;
    Ok(words.iter().flat_map(|word| word.reversed().bytes()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(reverse_words(&[1, 2, 3, 4]).unwrap(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_words_keep_their_order() {
        let data = [0x13, 0x05, 0x10, 0x00, 0x93, 0x05, 0x20, 0x00];
        assert_eq!(
            reverse_words(&data).unwrap(),
            vec![0x00, 0x10, 0x05, 0x13, 0x00, 0x20, 0x05, 0x93]
        );
    }

    #[test]
    fn test_render_matches_reverse_words() {
        let data = [0xaa, 0xbb, 0xcc, 0xdd, 0x11, 0x22, 0x33, 0x44];
        let words = WordStream::new(&data).unwrap();
        let mut buf = Vec::new();
        ByteReversal.write_words(&words, &mut buf).unwrap();
        assert_eq!(buf, reverse_words(&data).unwrap());
    }

    #[test]
    fn test_empty() {
        assert!(reverse_words(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_partial_word() {
        assert!(reverse_words(&[1, 2, 3]).is_err());
    }
}
