//! CRC32 tags such as `[ABCD1234]`, common on fansub releases.

use super::claims::{ClaimKind, Claims};
use super::Input;
use crate::lexer::Span;

/// The last bracketed 8-digit hex tag, upper-cased.
pub(crate) fn extract(input: &Input<'_>, claims: Claims) -> (Option<String>, Claims) {
    let found = input
        .rules
        .hash_tag()
        .captures_iter(input.text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let hash = caps.get(1)?;
            Some((Span::new(whole.start(), whole.end()), hash.as_str()))
        })
        .filter(|(span, _)| !claims.overlaps(*span))
        .last();

    match found {
        Some((span, hash)) => (
            Some(hash.to_ascii_uppercase()),
            claims.with(span, ClaimKind::Hash),
        ),
        None => (None, claims),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::rules::RuleTable;

    fn hash_of(text: &str) -> Option<String> {
        let rules = RuleTable::builtin();
        let lexer = Lexer::new(text);
        let input = Input {
            text,
            tokens: lexer.tokens(),
            rules: &rules,
        };
        extract(&input, Claims::new()).0
    }

    #[test]
    fn test_hash_tag() {
        assert_eq!(
            hash_of("[SubsPlease] Show - 01 (1080p) [1a2b3c4d]").as_deref(),
            Some("1A2B3C4D")
        );
        assert_eq!(hash_of("[Group] Show - 01 (ABCDEF01)").as_deref(), Some("ABCDEF01"));
    }

    #[test]
    fn test_non_hash_brackets() {
        assert_eq!(hash_of("[Group] Show - 01 [1080p]"), None);
        assert_eq!(hash_of("Show [ABCDEFG1]"), None);
    }
}
