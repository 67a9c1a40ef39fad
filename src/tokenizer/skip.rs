//! Payload skipping: discards the bytes of the current token so the scan
//! can move on without a value reader.

use crate::chars;
use crate::error::TokenizerError;
use crate::token_type::TokenType;

use super::Tokenizer;

impl Tokenizer {
    /// Discard the current token's payload and return the byte that
    /// terminated it, continuing through trailing whitespace and comments
    /// so the caller sees the first significant byte.
    pub(super) fn skip_value(&mut self) -> Result<u8, TokenizerError> {
        debug_assert!(!self.finished, "skip_value needs an unconsumed payload");

        let mut c = match self.current_token() {
            TokenType::Number => self.skip_number()?,
            TokenType::Binary => self.skip_binary()?,
            TokenType::Hex => self.skip_hex()?,
            TokenType::Timestamp => self.skip_timestamp()?,
            TokenType::Symbol => self.skip_symbol()?,
            TokenType::SymbolQuoted => self.skip_single_quoted(b'\'')?,
            TokenType::SymbolOperator => self.skip_symbol_operator()?,
            TokenType::String => self.skip_single_quoted(b'"')?,
            TokenType::LongString => self.skip_long_string()?,
            TokenType::OpenBracket => self.skip_container(b']')?,
            TokenType::OpenParen => self.skip_container(b')')?,
            TokenType::OpenDoubleBrace => self.skip_lob()?,
            // Close punctuation carries no payload; its skip is the
            // identity.
            TokenType::CloseBrace | TokenType::CloseBracket | TokenType::CloseParen => {
                self.read_input()?
            }
            token => unreachable!("no payload to skip for {token}"),
        };

        // Land every caller on the same significant byte: a terminator that
        // is whitespace or opens a comment goes back through the whitespace
        // path, whether the caller is `finish` or `next_token` itself.
        if chars::is_whitespace(c) || (c == b'/' && self.is_stop_char(c)?) {
            self.unread(c)?;
            c = self.skip_whitespace()?;
        }
        self.finished = true;
        Ok(c)
    }

    /// Check `c` against `pred`, failing with the unexpected-character
    /// error at the current position.
    fn expect(&self, pred: impl Fn(u8) -> bool, c: u8) -> Result<u8, TokenizerError> {
        if pred(c) { Ok(c) } else { Err(self.invalid_char(c)) }
    }

    /// Numbers, radix literals, and timestamps must end on a stop
    /// character.
    fn expect_stop(&mut self, c: u8) -> Result<u8, TokenizerError> {
        if self.is_stop_char(c)? {
            Ok(c)
        } else {
            Err(self.invalid_char(c))
        }
    }

    fn skip_digits(&mut self, c: u8) -> Result<u8, TokenizerError> {
        let mut c = c;
        while c.is_ascii_digit() {
            c = self.read_input()?;
        }
        Ok(c)
    }

    fn skip_number(&mut self) -> Result<u8, TokenizerError> {
        let mut c = self.read_input()?;
        if c == b'-' {
            c = self.read_input()?;
        }
        c = self.skip_digits(c)?;
        if c == b'.' {
            c = self.read_input()?;
            c = self.skip_digits(c)?;
        }
        if matches!(c, b'd' | b'D' | b'e' | b'E') {
            c = self.read_input()?;
            if matches!(c, b'+' | b'-') {
                c = self.read_input()?;
            }
            c = self.skip_digits(c)?;
        }
        self.expect_stop(c)
    }

    fn skip_binary(&mut self) -> Result<u8, TokenizerError> {
        self.skip_radix(|c| matches!(c, b'b' | b'B'), |c| matches!(c, b'0' | b'1'))
    }

    fn skip_hex(&mut self) -> Result<u8, TokenizerError> {
        self.skip_radix(|c| matches!(c, b'x' | b'X'), |c| c.is_ascii_hexdigit())
    }

    fn skip_radix(
        &mut self,
        marker: impl Fn(u8) -> bool,
        digit: impl Fn(u8) -> bool,
    ) -> Result<u8, TokenizerError> {
        let mut c = self.read_input()?;
        if c == b'-' {
            c = self.read_input()?;
        }
        self.expect(|c| c == b'0', c)?;
        c = self.read_input()?;
        self.expect(marker, c)?;
        loop {
            c = self.read_input()?;
            if !digit(c) {
                break;
            }
        }
        self.expect_stop(c)
    }

    fn skip_timestamp(&mut self) -> Result<u8, TokenizerError> {
        // yyyy, then either year precision (2007T) or a month.
        let mut c = self.skip_timestamp_digits(4)?;
        if c == b'T' {
            c = self.read_input()?;
            return self.expect_stop(c);
        }
        self.expect(|c| c == b'-', c)?;
        c = self.skip_timestamp_digits(2)?;
        if c == b'T' {
            c = self.read_input()?;
            return self.expect_stop(c);
        }
        self.expect(|c| c == b'-', c)?;
        c = self.skip_timestamp_digits(2)?;
        if c != b'T' {
            // Date precision: yyyy-mm-dd.
            return self.expect_stop(c);
        }
        c = self.read_input()?;
        if !c.is_ascii_digit() {
            // yyyy-mm-ddT, no time component.
            return self.expect_stop(c);
        }
        c = self.skip_timestamp_digits(1)?; // second hour digit
        self.expect(|c| c == b':', c)?;
        c = self.skip_timestamp_digits(2)?;
        if c == b':' {
            c = self.skip_timestamp_digits(2)?;
            if c == b'.' {
                c = self.read_input()?;
                c = self.skip_digits(c)?;
            }
        }
        self.skip_timestamp_offset(c)
    }

    fn skip_timestamp_offset(&mut self, c: u8) -> Result<u8, TokenizerError> {
        let mut c = c;
        match c {
            b'+' | b'-' => {
                c = self.skip_timestamp_digits(2)?;
                self.expect(|c| c == b':', c)?;
                c = self.skip_timestamp_digits(2)?;
            }
            b'z' | b'Z' => c = self.read_input()?,
            _ => {}
        }
        self.expect_stop(c)
    }

    /// Read exactly `n` digits, then return the byte after them.
    fn skip_timestamp_digits(&mut self, n: usize) -> Result<u8, TokenizerError> {
        for _ in 0..n {
            let c = self.read_input()?;
            self.expect(|c| c.is_ascii_digit(), c)?;
        }
        self.read_input()
    }

    fn skip_symbol(&mut self) -> Result<u8, TokenizerError> {
        let mut c = self.read_input()?;
        while chars::is_identifier_char(c) {
            c = self.read_input()?;
        }
        Ok(c)
    }

    fn skip_symbol_operator(&mut self) -> Result<u8, TokenizerError> {
        let mut c = self.read_input()?;
        while chars::is_operator_char(c) {
            c = self.read_input()?;
        }
        Ok(c)
    }

    /// Skip a single-line quoted payload (`"…"` or `'…'`). A backslash
    /// skips the byte after it; an unescaped newline or end of input is an
    /// error. Returns the byte after the closing quote.
    fn skip_single_quoted(&mut self, quote: u8) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_input()?;
            match c {
                0 => return Err(self.unexpected_eof()),
                b'\n' => return Err(self.invalid_char(c)),
                b'\\' => {
                    self.read_input()?;
                }
                c if c == quote => return self.read_input(),
                _ => {}
            }
        }
    }

    /// Skip one `'''…'''` segment. Adjacent segments are separate tokens at
    /// this layer, so no attempt is made to chain them here.
    fn skip_long_string(&mut self) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_input()?;
            match c {
                0 => return Err(self.unexpected_eof()),
                b'\\' => {
                    self.read_input()?;
                }
                b'\'' => {
                    if self.is_triple_quote()? {
                        return self.read_input();
                    }
                }
                _ => {}
            }
        }
    }

    fn skip_container(&mut self, terminator: u8) -> Result<u8, TokenizerError> {
        self.skip_container_contents(terminator)?;
        self.read_input()
    }

    /// Consume everything up to and including `terminator`, descending into
    /// nested containers, strings, and lobs so a closer inside a payload is
    /// not mistaken for ours.
    fn skip_container_contents(&mut self, terminator: u8) -> Result<(), TokenizerError> {
        debug_assert!(matches!(terminator, b'}' | b']' | b')'));
        loop {
            let c = self.skip_whitespace()?;
            if c == terminator {
                return Ok(());
            }
            match c {
                0 => return Err(self.unexpected_eof()),
                b'"' => {
                    let c = self.skip_single_quoted(b'"')?;
                    self.unread(c)?;
                }
                b'\'' => {
                    let c = if self.is_triple_quote()? {
                        self.skip_long_string()?
                    } else {
                        self.skip_single_quoted(b'\'')?
                    };
                    self.unread(c)?;
                }
                b'(' => self.skip_container_contents(b')')?,
                b'[' => self.skip_container_contents(b']')?,
                b'{' => {
                    if self.peek_one()? == b'{' {
                        self.skip_one()?;
                        let c = self.skip_lob()?;
                        self.unread(c)?;
                    } else {
                        self.skip_container_contents(b'}')?;
                    }
                }
                _ => {}
            }
        }
    }

    /// Skip a blob or clob payload plus its closing `}}`, returning the
    /// byte that follows. Entered with the opening `{{` already consumed.
    fn skip_lob(&mut self) -> Result<u8, TokenizerError> {
        let mut c = self.skip_lob_whitespace()?;
        if c == b'"' {
            // Clob, short string payload.
            c = self.skip_single_quoted(b'"')?;
            if chars::is_whitespace(c) {
                c = self.skip_lob_whitespace()?;
            }
        } else if c == b'\'' && self.is_triple_quote()? {
            c = self.skip_long_clob()?;
        } else {
            // Blob: content is read raw up to the first closing brace, so
            // the base64 bytes `/` and `+` are never mistaken for comment
            // openers.
            loop {
                match c {
                    0 => return Err(self.unexpected_eof()),
                    b'}' => break,
                    _ => c = self.read_input()?,
                }
            }
        }
        self.expect(|c| c == b'}', c)?;
        let c = self.read_input()?;
        self.expect(|c| c == b'}', c)?;
        self.read_input()
    }

    /// Skip every segment of a long-form clob. Unlike top-level long
    /// strings, the segments here belong to one payload that only ends at
    /// the closing braces, so inter-segment whitespace is consumed (and
    /// comments rejected) while looking for the next segment.
    fn skip_long_clob(&mut self) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_input()?;
            match c {
                0 => return Err(self.unexpected_eof()),
                b'\\' => {
                    self.read_input()?;
                }
                b'\'' => {
                    if self.is_triple_quote()? {
                        let mut c = self.read_input()?;
                        if chars::is_whitespace(c) {
                            c = self.skip_lob_whitespace()?;
                        }
                        if c == b'\'' && self.is_triple_quote()? {
                            continue;
                        }
                        return Ok(c);
                    }
                }
                _ => {}
            }
        }
    }
}
