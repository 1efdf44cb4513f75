//! Title extraction from the unclaimed leading region.

use super::claims::Claims;
use super::Input;

/// Text between the leading claims (a `[Group]` prefix) and the first
/// claim after them, with dots read as spaces.
pub(crate) fn extract(input: &Input<'_>, claims: &Claims) -> Option<String> {
    let text = input.text;
    let start = title_start(text, claims);

    let end = claims
        .iter()
        .map(|c| c.span.start)
        .filter(|&s| s >= start)
        .min()
        .unwrap_or(text.len());
    if end <= start {
        return None;
    }

    let title = text[start..end]
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let title = title.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '_' | '[' | ']' | '(' | ')' | '{' | '}')
    });

    (!title.is_empty()).then(|| title.to_string())
}

fn title_start(text: &str, claims: &Claims) -> usize {
    let mut cursor = 0;
    loop {
        let next = text[cursor..]
            .find(|c: char| !matches!(c, ' ' | '.' | '-' | '_' | '[' | ']' | '(' | ')'))
            .map_or(text.len(), |i| cursor + i);
        let covering = claims
            .iter()
            .filter(|c| c.span.contains(next))
            .map(|c| c.span.end)
            .max();
        match covering {
            Some(end) if end > cursor => cursor = end,
            _ => return cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, Span};
    use crate::parser::claims::ClaimKind;
    use crate::rules::RuleTable;

    fn title_of(text: &str, claims: Claims) -> Option<String> {
        let rules = RuleTable::builtin();
        let lexer = Lexer::new(text);
        let input = Input {
            text,
            tokens: lexer.tokens(),
            rules: &rules,
        };
        extract(&input, &claims)
    }

    #[test]
    fn test_title_before_first_claim() {
        let claims = Claims::new().with(Span::new(11, 15), ClaimKind::Year);
        assert_eq!(
            title_of("The.Matrix.1999.1080p", claims).as_deref(),
            Some("The Matrix")
        );
    }

    #[test]
    fn test_title_after_group_prefix() {
        let text = "[FFF] Invaders of the Rokujouma!! - S01E11";
        let claims = Claims::new()
            .with(Span::new(0, 5), ClaimKind::Group)
            .with(Span::new(36, 42), ClaimKind::Marker);
        assert_eq!(
            title_of(text, claims).as_deref(),
            Some("Invaders of the Rokujouma!!")
        );
    }

    #[test]
    fn test_unclaimed_text_is_title() {
        assert_eq!(
            title_of("Some Random Name", Claims::new()).as_deref(),
            Some("Some Random Name")
        );
    }

    #[test]
    fn test_leading_claim_only_yields_none() {
        let claims = Claims::new().with(Span::new(0, 5), ClaimKind::Quality);
        assert_eq!(title_of("1080p", claims), None);
    }
}
