//! Byte classification tables for Ion text.

/// Ion whitespace. CR never shows up here: the input layer rewrites CRLF
/// pairs and lone CRs to LF before anything classifies the byte.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c)
}

/// First byte of an unquoted symbol.
pub fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

/// Continuation byte of an unquoted symbol.
pub fn is_identifier_char(b: u8) -> bool {
    is_identifier_start(b) || b.is_ascii_digit()
}

/// Bytes that may form an operator symbol.
pub fn is_operator_char(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#'
            | b'%'
            | b'&'
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'/'
            | b';'
            | b'<'
            | b'='
            | b'>'
            | b'?'
            | b'@'
            | b'^'
            | b'`'
            | b'|'
            | b'~'
    )
}

/// Bytes that unconditionally terminate an adjacent unquoted token.
///
/// `/` is deliberately absent: a slash only stops a token when it opens a
/// comment, which takes a byte of look-ahead (`Tokenizer::is_stop_char`).
pub fn is_stop_char(b: u8) -> bool {
    matches!(
        b,
        0 | b'{' | b'}' | b'[' | b']' | b'(' | b')' | b',' | b'"' | b'\''
    ) || is_whitespace(b)
}
