//! Inter-token whitespace and comment handling.

use crate::chars;
use crate::error::TokenizerError;

use super::Tokenizer;

impl Tokenizer {
    /// Skip whitespace and comments, returning the first significant byte.
    pub fn skip_whitespace(&mut self) -> Result<u8, TokenizerError> {
        self.skip_whitespace_with::<true, false>()
    }

    /// Whitespace skipping inside `{{ ... }}`, where a comment is an error.
    pub fn skip_lob_whitespace(&mut self) -> Result<u8, TokenizerError> {
        self.skip_whitespace_with::<false, true>()
    }

    /// Core loop behind the three whitespace modes: skip comments, reject
    /// them, or (with both parameters false) hand a `/` back untouched.
    /// Rejection is checked first, so the lob mode fails on any slash.
    fn skip_whitespace_with<const SKIP_COMMENTS: bool, const FAIL_ON_COMMENT: bool>(
        &mut self,
    ) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_input()?;
            match c {
                c if chars::is_whitespace(c) => {}
                b'/' => {
                    if FAIL_ON_COMMENT {
                        return Err(TokenizerError::CommentInLob);
                    }
                    if !SKIP_COMMENTS {
                        return Ok(c);
                    }
                    match self.peek_max(1)?.first().copied() {
                        Some(b'/') => {
                            self.skip_one()?;
                            self.skip_line_comment()?;
                        }
                        Some(b'*') => {
                            self.skip_one()?;
                            self.skip_block_comment()?;
                        }
                        // A slash that opens no comment is the caller's
                        // problem.
                        _ => return Ok(c),
                    }
                }
                _ => return Ok(c),
            }
        }
    }

    /// A line comment ends at the next (normalized) newline or end of
    /// input.
    fn skip_line_comment(&mut self) -> Result<(), TokenizerError> {
        loop {
            match self.read_input()? {
                0 | b'\n' => return Ok(()),
                _ => {}
            }
        }
    }

    /// Block comments do not nest.
    fn skip_block_comment(&mut self) -> Result<(), TokenizerError> {
        let mut star = false;
        loop {
            let c = self.read_input()?;
            match c {
                0 => return Err(TokenizerError::UnterminatedComment),
                b'*' => star = true,
                b'/' if star => return Ok(()),
                _ => star = false,
            }
        }
    }
}
