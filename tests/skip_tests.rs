use iontok::error::TokenizerError;
use iontok::token_type::TokenType;
use iontok::tokenizer::Tokenizer;
use rstest::rstest;

/// Classify the first token, discard its payload with `finish`, and return
/// it together with the token that follows.
fn first_two(input: &str) -> (TokenType, TokenType) {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.next_token().unwrap();
    let first = tokenizer.current_token();
    tokenizer.finish().unwrap();
    tokenizer.next_token().unwrap();
    (first, tokenizer.current_token())
}

fn finish_error(input: &str) -> TokenizerError {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.next_token().unwrap();
    tokenizer.finish().unwrap_err()
}

#[rstest]
#[case("123 a", TokenType::Number)]
#[case("-123 a", TokenType::Number)]
#[case("1.25 a", TokenType::Number)]
#[case("1.25e-3 a", TokenType::Number)]
#[case("4d2 a", TokenType::Number)]
#[case("0b1010 a", TokenType::Binary)]
#[case("-0B11 a", TokenType::Binary)]
#[case("0xdeadBEEF a", TokenType::Hex)]
#[case("0X1f a", TokenType::Hex)]
fn numeric_payloads_resume_cleanly(#[case] input: &str, #[case] first: TokenType) {
    assert_eq!(first_two(input), (first, TokenType::Symbol));
}

#[rstest]
#[case("2007T a")]
#[case("2007-08T a")]
#[case("2007-08-20 a")]
#[case("2007-08-20T a")]
#[case("2007-08-20T10:30 a")]
#[case("2007-08-20T10:30Z a")]
#[case("2007-08-20T10:30:59 a")]
#[case("2007-08-20T10:30:59.100-05:00 a")]
fn timestamp_payloads_resume_cleanly(#[case] input: &str) {
    assert_eq!(first_two(input), (TokenType::Timestamp, TokenType::Symbol));
}

#[rstest]
#[case("plain a", TokenType::Symbol)]
#[case("'quoted' a", TokenType::SymbolQuoted)]
#[case("'with \\' escape' a", TokenType::SymbolQuoted)]
#[case("\"string\" a", TokenType::String)]
#[case("\"with \\\" escape\" a", TokenType::String)]
#[case("'''long''' a", TokenType::LongString)]
#[case("'''has ''quotes'' inside''' a", TokenType::LongString)]
#[case("== a", TokenType::SymbolOperator)]
fn text_payloads_resume_cleanly(#[case] input: &str, #[case] first: TokenType) {
    assert_eq!(first_two(input), (first, TokenType::Symbol));
}

#[rstest]
#[case("[ [1, 2], \"]\" ] a", TokenType::OpenBracket)]
#[case("(1 /* ) */ 2) a", TokenType::OpenParen)]
#[case("[{nested:{x:1}}, 2] a", TokenType::OpenBracket)]
#[case("('''s1''' '''s2''') a", TokenType::OpenParen)]
#[case("[{{dGVzdA==}}] a", TokenType::OpenBracket)]
fn container_payloads_resume_cleanly(#[case] input: &str, #[case] first: TokenType) {
    assert_eq!(first_two(input), (first, TokenType::Symbol));
}

#[rstest]
#[case("{{ }} a")]
#[case("{{dGVzdA==}} a")]
#[case("{{ dGVz dA== }} a")]
#[case("{{ ab/d }} a")]
#[case("{{ab+cd/ef==}} a")]
#[case("{{\"short clob\"}} a")]
#[case("{{'''seg one''' '''seg two'''}} a")]
fn lob_payloads_resume_cleanly(#[case] input: &str) {
    assert_eq!(
        first_two(input),
        (TokenType::OpenDoubleBrace, TokenType::Symbol)
    );
}

#[test]
fn close_punctuation_has_an_empty_payload() {
    assert_eq!(first_two("} a"), (TokenType::CloseBrace, TokenType::Symbol));
    assert_eq!(first_two(") a"), (TokenType::CloseParen, TokenType::Symbol));
    assert_eq!(first_two("] a"), (TokenType::CloseBracket, TokenType::Symbol));
}

#[test]
fn finish_is_a_no_op_on_finished_tokens() {
    let mut tokenizer = Tokenizer::new("1 2");
    tokenizer.next_token().unwrap();
    assert!(tokenizer.finish().unwrap());
    assert!(!tokenizer.finish().unwrap());
}

#[rstest]
#[case("123abc")]
#[case("0b102")]
#[case("1.5ex")]
fn numeric_payload_with_bad_terminator_fails(#[case] input: &str) {
    assert!(matches!(
        finish_error(input),
        TokenizerError::UnexpectedChar { .. }
    ));
}

#[test]
fn malformed_timestamp_digit_fails() {
    assert!(matches!(
        finish_error("2020-1x"),
        TokenizerError::UnexpectedChar { .. }
    ));
}

#[rstest]
#[case("\"never closed")]
#[case("'never closed")]
#[case("'''never closed''")]
#[case("{{ dGVzdA==")]
fn unterminated_payload_fails_with_early_eof(#[case] input: &str) {
    assert!(matches!(
        finish_error(input),
        TokenizerError::EarlyEof { .. }
    ));
}

#[test]
fn raw_newline_in_short_string_fails() {
    assert!(matches!(
        finish_error("\"a\nb\""),
        TokenizerError::UnexpectedChar { .. }
    ));
}

#[test]
fn lob_missing_second_close_brace_fails() {
    assert!(matches!(
        finish_error("{{ dGVzdA== }"),
        TokenizerError::UnexpectedChar { .. }
    ));
}

#[test]
fn line_comment_inside_lob_fails() {
    assert_eq!(finish_error("{{//x\n}}"), TokenizerError::CommentInLob);
}

#[test]
fn comment_between_clob_segments_fails() {
    assert_eq!(
        finish_error("{{'''a''' /*x*/ '''b'''}}"),
        TokenizerError::CommentInLob
    );
}

#[test]
fn finish_unreads_the_stop_character() {
    let mut tokenizer = Tokenizer::new("abc,def");
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.current_token(), TokenType::Symbol);
    tokenizer.finish().unwrap();
    // The comma that stopped the symbol is still the next byte.
    assert_eq!(tokenizer.peek_one().unwrap(), b',');
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.current_token(), TokenType::Comma);
}
