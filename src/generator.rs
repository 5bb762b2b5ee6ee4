use crate::catalog::Catalog;
use crate::token::{Token, TokenKind};

/// Prefix of the synthetic capture-group names that tie each format-code
/// token to its ordinal position. The Nth format-code token of a pattern, in
/// source order and 0-indexed, owns the group `DF___N`; the extractor relies
/// on exactly this correspondence to pair captured text with format codes.
pub(crate) const GROUP_PREFIX: &str = "DF___";

/// Translates token sequences into conventional regexes against a frozen
/// format-code catalog.
#[derive(Clone, Debug)]
pub struct RegexGenerator {
    catalog: Catalog,
}

impl RegexGenerator {
    pub fn new(catalog: Catalog) -> RegexGenerator {
        RegexGenerator { catalog }
    }
    /// Concatenates the translation of each token into one regex string for
    /// the host engine. Ordinary text and percent escapes reproduce their
    /// source characters; each format code becomes its catalog fragment,
    /// wrapped non-capturing, or — with `capture` set — wrapped in the named
    /// group encoding the token's ordinal.
    ///
    /// Generation is total: a format-code token missing from the catalog
    /// emits nothing rather than failing.
    pub fn generate(&self, tokens: &[Token], capture: bool) -> String {
        let mut out = String::new();
        let mut ordinal = 0;
        for token in tokens {
            match token.kind {
                TokenKind::OtherChar => out.push_str(&token.value),
                TokenKind::PercentLiteral => out.push('%'),
                TokenKind::FormatCode => {
                    if let Some(fragment) = self.catalog.fragment(token.identifier()) {
                        if capture {
                            out.push_str(&format!("(?P<{}{}>{})", GROUP_PREFIX, ordinal, fragment));
                        } else {
                            out.push_str(&format!("(?:{})", fragment));
                        }
                    }
                    // a miss still burns the ordinal, so both modes number
                    // identical tokens identically
                    ordinal += 1;
                }
            }
        }
        out
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::RegexGenerator;
    use crate::catalog::{Catalog, LocaleNames};
    use crate::lexer::tokenize;
    use crate::token::{Token, TokenKind};

    fn generator() -> RegexGenerator {
        RegexGenerator::new(Catalog::new(&LocaleNames::default()))
    }

    #[test]
    fn iso_date_both_modes() {
        let g = generator();
        let tokens = tokenize("%Y-%m-%d");
        assert_eq!(
            g.generate(&tokens, false),
            r"(?:[0-9]{4})-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])"
        );
        assert_eq!(
            g.generate(&tokens, true),
            r"(?P<DF___0>[0-9]{4})-(?P<DF___1>0[1-9]|1[0-2])-(?P<DF___2>0[1-9]|[12][0-9]|3[01])"
        );
    }

    #[test]
    fn percent_escape_reduces_to_a_literal_percent() {
        let g = generator();
        let tokens = tokenize(r"100\% sure");
        assert_eq!(g.generate(&tokens, false), "100% sure");
        assert_eq!(g.generate(&tokens, true), "100% sure");
    }

    #[test]
    fn catalog_miss_emits_nothing_but_advances_the_ordinal() {
        let g = generator();
        // the lexer cannot produce this token, but the generator must not
        // assume that
        let tokens = vec![
            Token::new(TokenKind::FormatCode, "%Q"),
            Token::new(TokenKind::OtherChar, "-"),
            Token::new(TokenKind::FormatCode, "%Y"),
        ];
        assert_eq!(g.generate(&tokens, false), r"-(?:[0-9]{4})");
        assert_eq!(g.generate(&tokens, true), r"-(?P<DF___1>[0-9]{4})");
    }

    #[test]
    fn ordinals_count_format_codes_only() {
        let g = generator();
        let rx = g.generate(&tokenize(r"(\d+) %H:%M x %S"), true);
        assert!(rx.contains("DF___0"));
        assert!(rx.contains("DF___1"));
        assert!(rx.contains("DF___2"));
        assert!(!rx.contains("DF___3"));
    }
}
