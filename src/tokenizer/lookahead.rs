//! Bounded look-aheads that disambiguate overlapping token prefixes.

use crate::chars;
use crate::error::TokenizerError;
use crate::token_type::TokenType;

use super::Tokenizer;

impl Tokenizer {
    /// True when `c` terminates an adjacent unquoted token. A `/` only
    /// stops a token when it opens a comment, so the slash case peeks one
    /// byte.
    pub fn is_stop_char(&mut self, c: u8) -> Result<bool, TokenizerError> {
        if chars::is_stop_char(c) {
            return Ok(true);
        }
        if c == b'/' {
            let next = self.peek_max(1)?;
            return Ok(matches!(next.first().copied(), Some(b'/') | Some(b'*')));
        }
        Ok(false)
    }

    /// Decide `inf` after a leading `+` or `-` has been read.
    ///
    /// Peeks at most 5 bytes: `inf` must be followed by end of input, a
    /// stop character, or the start of a comment. On a match the three
    /// bytes are consumed.
    pub(super) fn is_infinity(&mut self) -> Result<bool, TokenizerError> {
        let cs = self.peek_max(5)?;
        if cs.len() < 3 || &cs[..3] != b"inf" {
            return Ok(false);
        }
        let stopped = match cs.get(3).copied() {
            // End of input counts as a stop.
            None => true,
            Some(b'/') => matches!(cs.get(4).copied(), Some(b'/') | Some(b'*')),
            Some(c4) => chars::is_stop_char(c4),
        };
        if stopped {
            self.skip_exactly(3)?;
        }
        Ok(stopped)
    }

    /// Decide `'''` after a `'` has been read. Running out of input inside
    /// the peek just means "not a triple quote". On a match the two
    /// remaining quotes are consumed.
    pub(super) fn is_triple_quote(&mut self) -> Result<bool, TokenizerError> {
        match self.peek_exactly(2) {
            Ok(cs) if cs == b"''" => {
                self.skip_exactly(2)?;
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(TokenizerError::EarlyEof { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Classify the shape of a numeric token from its just-read leading
    /// digit `c`, peeking at most 4 bytes past it.
    pub(super) fn scan_for_numeric_type(&mut self, c: u8) -> Result<TokenType, TokenizerError> {
        debug_assert!(c.is_ascii_digit());
        let cs = self.peek_max(4)?;
        if c == b'0' {
            match cs.first().copied() {
                Some(b'b' | b'B') => return Ok(TokenType::Binary),
                Some(b'x' | b'X') => return Ok(TokenType::Hex),
                _ => {}
            }
        }
        // Four leading digits followed by `-` or `T` can only open a
        // timestamp.
        if cs.len() == 4 && cs[..3].iter().all(u8::is_ascii_digit) && matches!(cs[3], b'-' | b'T')
        {
            return Ok(TokenType::Timestamp);
        }
        Ok(TokenType::Number)
    }
}
