//! Byte-level input for the tokenizer.
//!
//! Invariants:
//! - `position` counts bytes delivered by `read` since construction, after
//!   normalization; a CRLF pair is a single read.
//! - Bytes sitting in `buffer` have already been counted; `unread`
//!   decrements `position` and pushes to the buffer tail, and `read` pops
//!   the tail before touching the source (last unread, first out).
//! - `read` never returns `\r` and reports end of input as the byte `0`.

use crate::error::TokenizerError;

#[derive(Debug, Clone)]
pub(super) struct ByteReader {
    source: Vec<u8>,
    index: usize,
    buffer: Vec<u8>,
    position: usize,
}

impl ByteReader {
    pub(super) fn new(source: Vec<u8>) -> Self {
        Self {
            source,
            index: 0,
            buffer: Vec::new(),
            position: 0,
        }
    }

    pub(super) fn position(&self) -> usize {
        self.position
    }

    /// True once every raw source byte has been consumed.
    pub(super) fn is_drained(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Pop the next byte, consulting the peek buffer first. End of input is
    /// the sentinel `0`; a CR as the very last source byte cannot be
    /// normalized and is an error.
    pub(super) fn read(&mut self) -> Result<u8, TokenizerError> {
        let byte = if let Some(byte) = self.buffer.pop() {
            byte
        } else if self.index >= self.source.len() {
            0
        } else {
            let mut byte = self.source[self.index];
            self.index += 1;
            if byte == b'\r' {
                if self.index >= self.source.len() {
                    return Err(TokenizerError::EarlyEof {
                        position: self.position,
                    });
                }
                // CRLF and lone CR both collapse to a single LF.
                if self.source[self.index] == b'\n' {
                    self.index += 1;
                }
                byte = b'\n';
            }
            byte
        };
        self.position += 1;
        Ok(byte)
    }

    /// Push `byte` back so it is the next byte `read` returns. Unreading
    /// the `0` sentinel is legal; it is how look-aheads hand EOF back.
    pub(super) fn unread(&mut self, byte: u8) -> Result<(), TokenizerError> {
        if self.position == 0 {
            return Err(TokenizerError::UnreadAtStart);
        }
        self.position -= 1;
        self.buffer.push(byte);
        Ok(())
    }

    pub(super) fn peek_one(&mut self) -> Result<u8, TokenizerError> {
        if let Some(&byte) = self.buffer.last() {
            return Ok(byte);
        }
        if self.index >= self.source.len() {
            return Err(TokenizerError::EarlyEof {
                position: self.position,
            });
        }
        let byte = self.read()?;
        self.unread(byte)?;
        Ok(byte)
    }

    /// Read up to `n` bytes, stopping early at end of input, then push
    /// everything back so the stream is unchanged. Returned in read order.
    pub(super) fn peek_max(&mut self, n: usize) -> Result<Vec<u8>, TokenizerError> {
        let mut bytes = Vec::with_capacity(n);
        let mut saw_eof = false;
        while bytes.len() < n {
            let byte = self.read()?;
            if byte == 0 {
                saw_eof = true;
                break;
            }
            bytes.push(byte);
        }
        if saw_eof {
            self.unread(0)?;
        }
        for &byte in bytes.iter().rev() {
            self.unread(byte)?;
        }
        Ok(bytes)
    }

    /// As `peek_max`, but end of input before `n` bytes is an error. The
    /// stream is unchanged either way.
    pub(super) fn peek_exactly(&mut self, n: usize) -> Result<Vec<u8>, TokenizerError> {
        let bytes = self.peek_max(n)?;
        if bytes.len() < n {
            return Err(TokenizerError::EarlyEof {
                position: self.position,
            });
        }
        Ok(bytes)
    }

    /// Discard one byte. False means end of input, not an error.
    pub(super) fn skip_one(&mut self) -> Result<bool, TokenizerError> {
        Ok(self.read()? != 0)
    }

    pub(super) fn skip_exactly(&mut self, n: usize) -> Result<bool, TokenizerError> {
        for _ in 0..n {
            if !self.skip_one()? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteReader;
    use crate::error::TokenizerError;

    #[test]
    fn read_drains_left_to_right() {
        let mut reader = ByteReader::new(b"abc".to_vec());
        assert_eq!(reader.read().unwrap(), b'a');
        assert_eq!(reader.read().unwrap(), b'b');
        assert_eq!(reader.read().unwrap(), b'c');
        assert_eq!(reader.read().unwrap(), 0);
        assert!(reader.is_drained());
    }

    #[test]
    fn unread_is_lifo() {
        let mut reader = ByteReader::new(b"xy".to_vec());
        let x = reader.read().unwrap();
        let y = reader.read().unwrap();
        reader.unread(y).unwrap();
        reader.unread(x).unwrap();
        assert_eq!(reader.read().unwrap(), b'x');
        assert_eq!(reader.read().unwrap(), b'y');
    }

    #[test]
    fn unread_before_any_read_fails() {
        let mut reader = ByteReader::new(b"a".to_vec());
        assert_eq!(reader.unread(b'q'), Err(TokenizerError::UnreadAtStart));
    }

    #[test]
    fn crlf_collapses_to_one_newline() {
        let mut reader = ByteReader::new(b"a\r\nb".to_vec());
        assert_eq!(reader.read().unwrap(), b'a');
        assert_eq!(reader.read().unwrap(), b'\n');
        assert_eq!(reader.read().unwrap(), b'b');
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn lone_cr_mid_stream_becomes_newline() {
        let mut reader = ByteReader::new(b"a\rb".to_vec());
        assert_eq!(reader.read().unwrap(), b'a');
        assert_eq!(reader.read().unwrap(), b'\n');
        assert_eq!(reader.read().unwrap(), b'b');
    }

    #[test]
    fn trailing_cr_is_an_error() {
        let mut reader = ByteReader::new(b"\r".to_vec());
        assert!(matches!(
            reader.read(),
            Err(TokenizerError::EarlyEof { .. })
        ));
    }

    #[test]
    fn peek_max_leaves_stream_unchanged() {
        let mut reader = ByteReader::new(b"hello".to_vec());
        assert_eq!(reader.peek_max(3).unwrap(), b"hel");
        assert_eq!(reader.peek_max(3).unwrap(), b"hel");
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read().unwrap(), b'h');
    }

    #[test]
    fn peek_max_stops_early_at_eof() {
        let mut reader = ByteReader::new(b"ab".to_vec());
        assert_eq!(reader.peek_max(5).unwrap(), b"ab");
        assert_eq!(reader.read().unwrap(), b'a');
        assert_eq!(reader.read().unwrap(), b'b');
        assert_eq!(reader.read().unwrap(), 0);
    }

    #[test]
    fn peek_exactly_fails_without_consuming() {
        let mut reader = ByteReader::new(b"ab".to_vec());
        assert!(matches!(
            reader.peek_exactly(5),
            Err(TokenizerError::EarlyEof { .. })
        ));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read().unwrap(), b'a');
    }

    #[test]
    fn skip_reports_eof_as_false() {
        let mut reader = ByteReader::new(b"ab".to_vec());
        assert!(reader.skip_one().unwrap());
        assert!(!reader.skip_exactly(5).unwrap());
    }
}
