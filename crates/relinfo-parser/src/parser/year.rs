//! Release year extraction.

use super::claims::{ClaimKind, Claims};
use super::Input;
use crate::lexer::{Span, Token};

const MIN_YEAR: i32 = 1900;

/// Years up to this far past the current year are still plausible.
const YEAR_LOOKAHEAD: i32 = 5;

pub(crate) fn extract(
    input: &Input<'_>,
    current_year: i32,
    claims: Claims,
) -> (Option<u16>, Claims) {
    let tokens = input.tokens;
    let max_year = current_year.saturating_add(YEAR_LOOKAHEAD);

    // A year in first position is part of the title ("2012.2009.720p").
    let first_content = tokens
        .iter()
        .position(|(tok, range)| !tok.is_separator() && !claims.covers(range.start));

    let candidates: Vec<(usize, u16, Span)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(idx, (tok, range))| {
            let Token::Year(text) = tok else {
                return None;
            };
            let year: i32 = text.parse().ok()?;
            let span = Span::from(range.clone());
            let plausible = (MIN_YEAR..=max_year).contains(&year);
            if !plausible
                || Some(idx) == first_content
                || claims.overlaps(span)
                || is_date_part(tokens, idx)
            {
                return None;
            }
            Some((idx, u16::try_from(year).ok()?, span))
        })
        .collect();

    let Some(&first) = candidates.first() else {
        return (None, claims);
    };

    // "Wonder Woman 1984 (2020)": when candidates follow each other with
    // nothing but separators between them, the last one is the release year.
    let mut chosen = first;
    for &next in &candidates[1..] {
        let between = &tokens[chosen.0 + 1..next.0];
        if between.iter().all(|(tok, _)| tok.is_separator()) {
            chosen = next;
        } else {
            break;
        }
    }

    let (_, year, span) = chosen;
    (Some(year), claims.with(span, ClaimKind::Year))
}

/// A year directly joined to another number by `.` or `-` is part of a
/// date or dimension (`2014-06-02`, `2011.12.02`).
fn is_date_part(tokens: &[(Token<'_>, std::ops::Range<usize>)], idx: usize) -> bool {
    let joined = |delim: Option<&Token<'_>>, number: Option<&Token<'_>>| {
        matches!(delim, Some(Token::Dot | Token::Hyphen))
            && matches!(number, Some(Token::Number(_)))
    };
    let tok = |i: Option<usize>| i.and_then(|i| tokens.get(i)).map(|(t, _)| t);

    joined(tok(Some(idx + 1)), tok(Some(idx + 2)))
        || joined(tok(idx.checked_sub(1)), tok(idx.checked_sub(2)))
}
