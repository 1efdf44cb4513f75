//! Release group extraction.
//!
//! Strategies are tried in order and the first hit wins:
//!
//! 1. a leading `[Group]` tag (fansub convention),
//! 2. the known-group table (names that break the usual conventions),
//! 3. a trailing `[tag]`,
//! 4. the last hyphen-separated word (scene/P2P convention).
//!
//! Every strategy works on the normalized text and the claims made by the
//! year, quality and language extractors, so a group can never overlap a
//! quality token or a language.

use super::claims::{ClaimKind, Claims};
use super::normalize::is_repost_segment;
use super::Input;
use crate::lexer::{find_bracket_groups, Lexer, Span, Token};
use regex::Regex;
use std::sync::LazyLock;

static EPISODE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:s[0-9]+(?:e[0-9]+)*|e[0-9]+|[0-9]+x[0-9]+|ep?[0-9]+)$")
        .expect("invalid episode-like regex")
});

/// Leading `[Group]` tag.
///
/// Resolved before languages so a group named like a language (`[ITA]`)
/// still wins. Returns the name and the span of the whole bracket.
pub(crate) fn bracket_prefix(input: &Input<'_>) -> Option<(String, Span)> {
    let group = find_bracket_groups(input.text)
        .into_iter()
        .find(|g| g.bracket_char == '[' && g.outer_span.start == 0)?;
    let name = group.inner_span.slice(input.text);

    if name.is_empty() || name.trim() != name || is_hex_hash(name) {
        return None;
    }
    if name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // [1080p], [BD 1080p x264] and [2019] describe the release, not a group.
    let lexer = Lexer::new(name);
    let mut content = lexer.tokens().iter().filter(|(t, _)| !t.is_separator());
    let only_quality = content
        .clone()
        .all(|(t, _)| t.is_quality() || matches!(t, Token::Year(_) | Token::Number(_)));
    if content.next().is_none() || only_quality {
        return None;
    }

    Some((name.to_string(), group.outer_span))
}

/// Run the remaining strategies. `prefix` is the result of
/// [`bracket_prefix`], whose span the caller has already claimed.
pub(crate) fn extract(
    input: &Input<'_>,
    prefix: Option<String>,
    claims: Claims,
) -> (Option<String>, Claims) {
    if prefix.is_some() {
        return (prefix, claims);
    }

    let found = known_group(input, &claims)
        .or_else(|| trailing_bracket_tag(input, &claims))
        .or_else(|| trailing_hyphen(input, &claims));

    match found {
        Some(span) => {
            let name = span.slice(input.text).to_string();
            (Some(name), claims.with(span, ClaimKind::Group))
        }
        None => (None, claims),
    }
}

fn known_group(input: &Input<'_>, claims: &Claims) -> Option<Span> {
    let text = input.text;
    let occurrences = |names: &[String]| -> Vec<Span> {
        names
            .iter()
            .flat_map(|name| {
                text.match_indices(name.as_str())
                    .map(|(i, m)| Span::new(i, i + m.len()))
            })
            .filter(|span| {
                span.start > 0 && starts_word(text, span.start) && !claims.overlaps(*span)
            })
            .collect()
    };

    let exact = occurrences(input.rules.known_groups())
        .into_iter()
        .filter(|span| ends_word(text, span.end))
        .max_by_key(|span| span.start);
    if exact.is_some() {
        return exact;
    }

    occurrences(input.rules.bracket_tail_groups())
        .into_iter()
        .filter(|span| matches!(text[span.end..].chars().next(), Some(')' | ']' | '}')))
        .max_by_key(|span| span.start)
}

fn trailing_bracket_tag(input: &Input<'_>, claims: &Claims) -> Option<Span> {
    let boundary = claims.boundary()?;
    let text = input.text;
    let group = find_bracket_groups(text)
        .into_iter()
        .find(|g| g.bracket_char == '[' && g.outer_span.end == text.len())?;

    if group.outer_span.start <= boundary {
        return None;
    }
    let before = text[..group.outer_span.start].chars().next_back()?;
    if !is_delimiter(before) {
        return None;
    }

    let span = group.inner_span;
    let tag = span.slice(text);
    let shaped = tag.bytes().all(|b| b.is_ascii_alphanumeric()) || is_dotted_acronym(tag);
    let acceptable = shaped
        && tag.bytes().any(|b| b.is_ascii_alphabetic())
        && !is_hex_hash(tag)
        && !claims.overlaps(span)
        && !input.rules.is_non_group_term(tag);
    acceptable.then_some(span)
}

fn trailing_hyphen(input: &Input<'_>, claims: &Claims) -> Option<Span> {
    let boundary = claims.boundary()?;
    let text = input.text;
    let bytes = text.as_bytes();

    // Hyphens inside claimed tokens (WEB-DL, DTS-X) are not separators.
    let mut separators: Vec<usize> = text
        .match_indices('-')
        .map(|(i, _)| i)
        .filter(|&i| {
            !claims.covers(i) && bytes.get(i + 1).is_some_and(u8::is_ascii_alphanumeric)
        })
        .collect();

    // Repost tags left over once normalization gave up are never part of
    // the name.
    let mut limit = text.len();
    while let Some(&last) = separators.last() {
        if !is_repost_segment(&text[..last], &text[last + 1..limit], input.rules) {
            break;
        }
        limit = last;
        separators.pop();
    }

    let (&last, rest) = separators.split_last()?;
    let previous = rest.last().copied();

    let accept = |span: Span| {
        span.start > boundary
            && span.end <= limit
            && is_group_candidate(input, claims, span, limit)
    };

    // Hyphenated names: -D-Z0N3, -Blu-bits, -DX-TV
    if let Some(prev) = previous {
        let piece = &text[prev + 1..last];
        if !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_alphanumeric()) {
            let chained = Span::new(prev + 1, candidate_end(text, last + 1));
            if accept(chained) {
                return Some(chained);
            }
        }
    }

    let tail = Span::new(last + 1, candidate_end(text, last + 1));
    if accept(tail) {
        return Some(tail);
    }

    let prev = previous?;
    let fallback = Span::new(prev + 1, candidate_end(text, prev + 1));
    accept(fallback).then_some(fallback)
}

/// End of the group-shaped run starting at `start`: ASCII alphanumerics,
/// extended across dots only for acronyms such as `E.N.D`.
fn candidate_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let word_end = |from: usize| {
        from + bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count()
    };

    let first = word_end(start);
    let mut end = first;
    while bytes.get(end) == Some(&b'.')
        && bytes.get(end + 1).is_some_and(u8::is_ascii_alphanumeric)
    {
        end = word_end(end + 1);
    }
    if end > first && is_dotted_acronym(&text[start..end]) {
        end
    } else {
        first
    }
}

fn is_group_candidate(input: &Input<'_>, claims: &Claims, span: Span, limit: usize) -> bool {
    let candidate = span.slice(input.text);
    !candidate.is_empty()
        && candidate.bytes().any(|b| b.is_ascii_alphabetic())
        && !claims.overlaps(span)
        && !EPISODE_LIKE.is_match(candidate)
        && !is_hex_hash(candidate)
        && !input.rules.is_non_group_term(candidate)
        && followed_by_noise_only(&input.text[..limit], claims, span.end)
}

/// A group ends the name: only separators and claimed tokens may follow it.
fn followed_by_noise_only(text: &str, claims: &Claims, from: usize) -> bool {
    text[from..].char_indices().all(|(i, c)| {
        is_delimiter(c)
            || matches!(c, '[' | ']' | '(' | ')' | '{' | '}' | ',')
            || claims.covers(from + i)
    })
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '.' | '-' | '_')
}

fn starts_word(text: &str, start: usize) -> bool {
    !text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric())
}

fn ends_word(text: &str, end: usize) -> bool {
    !text[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
}

fn is_hex_hash(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `E.N.D`, `YTS.MX`: at least two dot-separated pieces of one to three
/// upper-case letters or digits.
fn is_dotted_acronym(s: &str) -> bool {
    let pieces: Vec<&str> = s.split('.').collect();
    pieces.len() >= 2
        && pieces.iter().all(|p| {
            (1..=3).contains(&p.len())
                && p.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        })
}
