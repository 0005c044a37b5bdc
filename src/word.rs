// SPDX-License-Identifier: GPL-3.0-or-later
//! Instruction words and the word stream sliced out of an image file.

use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TranscodeError};

/// Size of one instruction word in bytes
pub const WORD_SIZE: usize = 4;

/// One 4-byte instruction word, in the byte order it was read from the image.
///
/// The transcoder does not assume any endianness; the raw bytes are kept as-is
/// and each output strategy decides how to interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_SIZE]);

impl Word {
    pub const fn new(bytes: [u8; WORD_SIZE]) -> Self {
        Word(bytes)
    }

    pub fn bytes(&self) -> [u8; WORD_SIZE] {
        self.0
    }

    /// The word with its byte order reversed (byte 0 <-> 3, byte 1 <-> 2).
    pub fn reversed(&self) -> Word {
        let mut bytes = self.0;
        bytes.reverse();
        Word(bytes)
    }

    /// Read the raw bytes as a big-endian value, i.e. byte 0 is the most
    /// significant. This matches the textual rendering of the bytes in order.
    pub fn as_u32_be(&self) -> u32 {
        BigEndian::read_u32(&self.0)
    }
}

/// Lowercase hex rendering, two zero-padded digits per byte.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.as_u32_be())
    }
}

/// Check that an image of `len` bytes holds a whole number of words.
pub fn validate_length(len: usize) -> Result<()> {
    if len % WORD_SIZE != 0 {
        return Err(TranscodeError::Format {
            len,
            word_size: WORD_SIZE,
        });
    }
    Ok(())
}

/// Ordered view of an image as contiguous, non-overlapping words.
///
/// Word `i` covers bytes `i * WORD_SIZE .. (i + 1) * WORD_SIZE`. Construction
/// fails before any word is produced if the buffer has a partial trailing word.
#[derive(Debug, Clone, Copy)]
pub struct WordStream<'a> {
    data: &'a [u8],
}

impl<'a> WordStream<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        validate_length(data.len())?;
        Ok(WordStream { data })
    }

    /// Number of words in the stream
    pub fn len(&self) -> usize {
        self.data.len() / WORD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Word> + use<'a> {
        self.data.chunks_exact(WORD_SIZE).map(|chunk| {
            let mut bytes = [0u8; WORD_SIZE];
            bytes.copy_from_slice(chunk);
            Word(bytes)
        })
    }
}

/// Load an image file into memory.
/// The whole file is read before any validation takes place.
pub fn load_image(path: &Path) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    File::open(path)
        .map_err(|e| TranscodeError::io("open", path, e))?
        .read_to_end(&mut data)
        .map_err(|e| TranscodeError::io("read", path, e))?;
    tracing::debug!(path = ?path, bytes = data.len(), "loaded image");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        let word = Word::new([0x01, 0x02, 0x03, 0x04]);
        assert_eq!(word.reversed().bytes(), [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_display_keeps_byte_order() {
        assert_eq!(Word::new([0x08, 0x09, 0x0a, 0x0b]).to_string(), "08090a0b");
        assert_eq!(Word::new([0, 0, 0, 0]).to_string(), "00000000");
        assert_eq!(Word::new([0xde, 0xad, 0xbe, 0xef]).to_string(), "deadbeef");
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length(0).is_ok());
        assert!(validate_length(8).is_ok());
        match validate_length(7) {
            Err(TranscodeError::Format { len, word_size }) => {
                assert_eq!(len, 7);
                assert_eq!(word_size, WORD_SIZE);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_stream_order() {
        let data = [0, 1, 2, 3, 4, 5, 6, 7];
        let stream = WordStream::new(&data).unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(
            stream.iter().collect::<Vec<_>>(),
            vec![Word::new([0, 1, 2, 3]), Word::new([4, 5, 6, 7])]
        );
    }

    #[test]
    fn test_stream_empty() {
        let stream = WordStream::new(&[]).unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.iter().count(), 0);
    }

    #[test]
    fn test_stream_rejects_partial_word() {
        assert!(WordStream::new(&[1, 2, 3, 4, 5]).is_err());
    }
}
