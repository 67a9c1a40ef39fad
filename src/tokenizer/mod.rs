//! The Ion text tokenizer - classifies the next lexical token in a byte
//! stream, leaving the token's payload in place for a value reader.

// Module declarations
mod lookahead;
mod reader;
mod skip;
mod whitespace;

use crate::chars;
use crate::error::TokenizerError;
use crate::token_type::TokenType;

use reader::ByteReader;

/// Pull-driven scanner over an Ion text document.
///
/// `next_token` records the kind of the next token and whether its payload
/// has already been consumed. While `finished` is false the payload bytes
/// are still in the input: a reader drains them through
/// `read_input`/`peek_one`/`unread`, or `finish` discards them.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    input: ByteReader,
    current_token: TokenType,
    finished: bool,
}

impl Tokenizer {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self {
            input: ByteReader::new(source.into()),
            current_token: TokenType::Invalid,
            finished: true,
        }
    }

    /// The kind recorded by the most recent `next_token`.
    pub fn current_token(&self) -> TokenType {
        self.current_token
    }

    /// False while the current token's payload is still in the input.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Bytes delivered so far, counted after CRLF normalization.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    /// True once the source is drained and the current token is `Eof`.
    pub fn is_eof(&self) -> bool {
        self.input.is_drained() && self.current_token == TokenType::Eof
    }

    /// Advance to the next token, first discarding the current token's
    /// payload if the caller left it unconsumed.
    ///
    /// Returns `Ok(true)` on every successful classification, `Eof`
    /// included; once `Eof` has been reported it keeps being reported.
    ///
    /// # Errors
    ///
    /// `TokenizerError::UnexpectedChar` for a byte that cannot start a
    /// token, `TokenizerError::NegativeTimestamp` for `-` directly before a
    /// timestamp literal, plus anything the input layer raises.
    pub fn next_token(&mut self) -> Result<bool, TokenizerError> {
        let c = if self.finished {
            self.skip_whitespace()?
        } else {
            self.skip_value()?
        };

        match c {
            0 => self.ok(TokenType::Eof, true),
            b':' => {
                if self.peek_one()? == b':' {
                    self.skip_one()?;
                    self.ok(TokenType::DoubleColon, true)
                } else {
                    self.ok(TokenType::Colon, true)
                }
            }
            b'{' => {
                if self.peek_one()? == b'{' {
                    self.skip_one()?;
                    self.ok(TokenType::OpenDoubleBrace, false)
                } else {
                    self.ok(TokenType::OpenBrace, true)
                }
            }
            b'}' => self.ok(TokenType::CloseBrace, false),
            b'[' => self.ok(TokenType::OpenBracket, false),
            b']' => self.ok(TokenType::CloseBracket, false),
            b'(' => self.ok(TokenType::OpenParen, false),
            b')' => self.ok(TokenType::CloseParen, false),
            b',' => self.ok(TokenType::Comma, true),
            b'.' => {
                let c2 = self.peek_one()?;
                if chars::is_operator_char(c2) {
                    // The dot opens an operator run; hand it back so the
                    // reader sees the whole run.
                    self.unread(b'.')?;
                    self.ok(TokenType::SymbolOperator, false)
                } else {
                    self.ok(TokenType::Dot, true)
                }
            }
            b'\'' => {
                if self.is_triple_quote()? {
                    self.ok(TokenType::LongString, false)
                } else {
                    self.ok(TokenType::SymbolQuoted, false)
                }
            }
            b'+' => {
                if self.is_infinity()? {
                    self.ok(TokenType::FloatInf, true)
                } else {
                    self.unread(b'+')?;
                    self.ok(TokenType::SymbolOperator, false)
                }
            }
            b'-' => self.next_after_minus(),
            b'"' => self.ok(TokenType::String, false),
            c if chars::is_operator_char(c) => {
                self.unread(c)?;
                self.ok(TokenType::SymbolOperator, false)
            }
            c if chars::is_identifier_start(c) => {
                self.unread(c)?;
                self.ok(TokenType::Symbol, false)
            }
            c if c.is_ascii_digit() => {
                let kind = self.scan_for_numeric_type(c)?;
                self.unread(c)?;
                self.ok(kind, false)
            }
            c => Err(self.invalid_char(c)),
        }
    }

    /// A leading `-` is a numeric sign, the start of `-inf`, or an operator
    /// run, in that order of preference.
    fn next_after_minus(&mut self) -> Result<bool, TokenizerError> {
        let c2 = self.peek_one()?;
        if c2.is_ascii_digit() {
            self.skip_one()?;
            let kind = self.scan_for_numeric_type(c2)?;
            if kind == TokenType::Timestamp {
                return Err(TokenizerError::NegativeTimestamp);
            }
            // The value reader starts at the sign.
            self.unread(c2)?;
            self.unread(b'-')?;
            return self.ok(kind, false);
        }
        if self.is_infinity()? {
            return self.ok(TokenType::FloatMinusInf, true);
        }
        self.unread(b'-')?;
        self.ok(TokenType::SymbolOperator, false)
    }

    /// Discard the current token's payload without reading it.
    ///
    /// Skips to the byte that terminates the payload, pushes that byte back
    /// so `next_token` re-reads it through the whitespace path, and marks
    /// the token finished. Returns `Ok(false)` when there was nothing to do.
    pub fn finish(&mut self) -> Result<bool, TokenizerError> {
        if self.finished {
            return Ok(false);
        }
        let c = self.skip_value()?;
        self.unread(c)?;
        self.finished = true;
        Ok(true)
    }

    fn ok(&mut self, token: TokenType, finished: bool) -> Result<bool, TokenizerError> {
        self.current_token = token;
        self.finished = finished;
        Ok(true)
    }

    fn invalid_char(&self, byte: u8) -> TokenizerError {
        TokenizerError::UnexpectedChar {
            byte,
            position: self.position(),
        }
    }

    fn unexpected_eof(&self) -> TokenizerError {
        TokenizerError::EarlyEof {
            position: self.position(),
        }
    }

    // Byte-level operations, consumed by the payload readers layered above.

    /// Pop the next byte, consulting the peek buffer first. Returns the
    /// sentinel `0` at end of input; never returns `\r`.
    pub fn read_input(&mut self) -> Result<u8, TokenizerError> {
        self.input.read()
    }

    /// Push `byte` back so it is the next byte `read_input` returns.
    /// Multiple unreads stack last-in, first-out.
    pub fn unread(&mut self, byte: u8) -> Result<(), TokenizerError> {
        self.input.unread(byte)
    }

    pub fn peek_one(&mut self) -> Result<u8, TokenizerError> {
        self.input.peek_one()
    }

    pub fn peek_max(&mut self, n: usize) -> Result<Vec<u8>, TokenizerError> {
        self.input.peek_max(n)
    }

    pub fn peek_exactly(&mut self, n: usize) -> Result<Vec<u8>, TokenizerError> {
        self.input.peek_exactly(n)
    }

    pub fn skip_one(&mut self) -> Result<bool, TokenizerError> {
        self.input.skip_one()
    }

    pub fn skip_exactly(&mut self, n: usize) -> Result<bool, TokenizerError> {
        self.input.skip_exactly(n)
    }
}
