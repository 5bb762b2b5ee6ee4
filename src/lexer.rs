use crate::token::{Token, TokenKind, SUPPORTED_FORMAT_CODES};
use regex::Regex;

lazy_static! {
    // one alternative per token kind, tried in priority order thanks to the
    // engine's leftmost-first semantics; (?s) keeps the catch-all total
    static ref LEXER: Regex = Regex::new(&format!(
        r"(?s)(?P<FORMAT_CODE>%(?:{}))|(?P<PERCENT_LITERAL>\\%)|(?P<OTHER>.)",
        SUPPORTED_FORMAT_CODES.join("|")
    ))
    .unwrap();
}

/// Scans a dfregex into its ordered token sequence.
///
/// Tokenization is total: anything that is not a supported format code or the
/// `\%` escape passes through as ordinary regex text, one character at a
/// time, so groups, alternations, quantifiers, and character classes survive
/// untouched. Maximal runs of ordinary characters come back merged into a
/// single token, so the output never contains two adjacent `OtherChar`s.
///
/// ```rust
/// # use dfregex::{tokenize, TokenKind};
/// let tokens = tokenize(r"%Y-%m");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].kind, TokenKind::FormatCode);
/// assert_eq!(tokens[1].value, "-");
/// ```
pub fn tokenize(dfregex: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut run = String::new();
    for caps in LEXER.captures_iter(dfregex) {
        if let Some(m) = caps.name("FORMAT_CODE") {
            flush_run(&mut tokens, &mut run);
            tokens.push(Token::new(TokenKind::FormatCode, m.as_str()));
        } else if let Some(m) = caps.name("PERCENT_LITERAL") {
            flush_run(&mut tokens, &mut run);
            tokens.push(Token::new(TokenKind::PercentLiteral, m.as_str()));
        } else {
            run.push_str(&caps[0]);
        }
    }
    flush_run(&mut tokens, &mut run);
    tokens
}

fn flush_run(tokens: &mut Vec<Token>, run: &mut String) {
    if !run.is_empty() {
        tokens.push(Token::new(TokenKind::OtherChar, run.split_off(0)));
    }
}
