use serde::{Deserialize, Serialize};

/// The three lexical categories a dfregex decomposes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A `%`-prefixed strftime code from the supported set, e.g. `%Y` or `%-d`.
    FormatCode,
    /// The `\%` escape standing for a literal percent sign.
    PercentLiteral,
    /// A run of ordinary regex text passed through untouched.
    OtherChar,
}

/// One lexed piece of a dfregex. `value` is always the exact source slice
/// that produced the token: `"%Y"`, `"\%"`, or a run of ordinary characters.
/// Tokens are created once by the lexer and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub(crate) fn new<S: Into<String>>(kind: TokenKind, value: S) -> Token {
        Token {
            kind,
            value: value.into(),
        }
    }
    /// The catalog identifier of a format-code token: its value minus the
    /// leading `%`.
    pub(crate) fn identifier(&self) -> &str {
        &self.value[1..]
    }
}

/// Every format-code identifier the lexer recognizes, in the order the
/// strftime documentation lists the underlying codes. A `-` prefix marks the
/// unpadded rendering of the field. Codes outside this set are not format
/// codes at all as far as the lexer is concerned; they fall through as
/// ordinary regex text.
pub const SUPPORTED_FORMAT_CODES: [&str; 26] = [
    "a", "A", "w", "d", "-d", "b", "B", "m", "-m", "y", "Y", "H", "-H", "I", "-I", "p", "M", "-M",
    "S", "-S", "f", "z", "j", "-j", "U", "W",
];
