use thiserror::Error;

/// Failures surfaced while scanning Ion text.
///
/// Every failure is fatal to the `next_token`/`finish` call that produced
/// it; the tokenizer performs no local recovery, and callers must not resume
/// scanning on the same instance after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A byte that cannot begin or continue any token at this point.
    #[error("unexpected byte 0x{byte:02x} at position {position}")]
    UnexpectedChar { byte: u8, position: usize },

    /// Input ran out in the middle of a construct.
    #[error("unexpected end of input at position {position}")]
    EarlyEof { position: usize },

    /// `unread` was called before anything had been read.
    #[error("cannot unread before any input has been read")]
    UnreadAtStart,

    /// A comment opened inside `{{ ... }}`, where comments are prohibited.
    #[error("comments are not allowed inside blob/clob values")]
    CommentInLob,

    /// A block comment reached end of input without its closing `*/`.
    #[error("block comment is missing its closing `*/`")]
    UnterminatedComment,

    /// A `-` sign immediately preceding a timestamp literal.
    #[error("timestamps cannot be negative")]
    NegativeTimestamp,
}
