//! Audio language extraction.

use super::claims::{ClaimKind, Claims};
use super::Input;
use crate::lexer::{Span, Token};
use crate::model::Language;

/// Dual-audio markers that travel with scene language tags (GERMAN.DL).
const DUAL_AUDIO_TAGS: &[&str] = &["DL", "DUAL"];

/// Collect declared languages.
///
/// Words before the first year, quality or episode marker belong to the
/// title ("The.German", "French.Kiss"), except for a run of upper-case
/// scene tags sitting right before that boundary (`Le.Film.FRENCH.1080p`).
/// Without a boundary nothing is detected.
pub(crate) fn extract(input: &Input<'_>, mut claims: Claims) -> (Vec<Language>, Claims) {
    let mut languages = Vec::new();
    let Some(boundary) = claims.boundary() else {
        return (languages, claims);
    };

    for (lang, span) in scene_tags_before(input, &claims, boundary) {
        if let Some(lang) = lang {
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }
        claims = claims.with(span, ClaimKind::Language);
    }

    for (token, range) in input.tokens {
        if range.start < boundary {
            continue;
        }
        let Token::Word(word) = token else {
            continue;
        };
        let span = Span::from(range.clone());
        if claims.overlaps(span) {
            continue;
        }
        if let Some(lang) = input.rules.language(word) {
            if !languages.contains(&lang) {
                languages.push(lang);
            }
            claims = claims.with(span, ClaimKind::Language);
        }
    }

    (languages, claims)
}

/// The upper-case language run ending at `boundary`, in input order.
///
/// The first word of the name is never taken, and a run holding only
/// dual-audio markers is not a language declaration.
fn scene_tags_before(
    input: &Input<'_>,
    claims: &Claims,
    boundary: usize,
) -> Vec<(Option<Language>, Span)> {
    let first_content = input
        .tokens
        .iter()
        .find(|(tok, range)| !tok.is_separator() && !claims.covers(range.start))
        .map(|(_, range)| range.start);

    let mut run = Vec::new();
    for (token, range) in input.tokens.iter().rev() {
        if range.start >= boundary || token.is_separator() {
            continue;
        }
        let Token::Word(word) = token else {
            break;
        };
        let span = Span::from(range.clone());
        if Some(range.start) == first_content || claims.overlaps(span) || !is_shouted(word) {
            break;
        }
        match input.rules.language(word) {
            Some(lang) => run.push((Some(lang), span)),
            None if DUAL_AUDIO_TAGS.contains(word) => run.push((None, span)),
            None => break,
        }
    }

    if run.iter().all(|(lang, _)| lang.is_none()) {
        return Vec::new();
    }
    run.reverse();
    run
}

/// Scene tags are written in capitals; `MULTi` keeps its trailing `i`.
fn is_shouted(word: &str) -> bool {
    word.len() >= 2
        && !word
            .trim_end_matches('i')
            .bytes()
            .any(|b| b.is_ascii_lowercase())
}
