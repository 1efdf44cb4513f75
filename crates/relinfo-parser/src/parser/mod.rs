//! Extraction pipeline.
//!
//! The normalized input is lexed once and handed to each extractor in a
//! fixed order. Extractors record the spans they consume as [`Claims`] so
//! that later extractors, and finally the title, never reuse them.

pub(crate) mod checksum;
pub(crate) mod claims;
pub(crate) mod edition;
pub(crate) mod group;
pub(crate) mod language;
pub(crate) mod normalize;
pub(crate) mod quality;
pub(crate) mod title;
pub(crate) mod year;

use crate::config::ParserConfig;
use crate::lexer::{Lexer, Span, Token};
use crate::model::ParsedRelease;
use crate::rules::RuleTable;
use claims::{ClaimKind, Claims};
use std::ops::Range;
use tracing::trace;

/// What every extractor sees: the normalized text, its tokens and the
/// vocabulary.
pub(crate) struct Input<'a> {
    pub text: &'a str,
    pub tokens: &'a [(Token<'a>, Range<usize>)],
    pub rules: &'a RuleTable,
}

/// Parse a release name. Never fails: unrecognised parts stay unset.
pub(crate) fn parse(raw: &str, config: &ParserConfig, rules: &RuleTable) -> ParsedRelease {
    let bounded = truncate(raw, config.max_input_length);
    if bounded.trim().is_empty() {
        return ParsedRelease::unknown(raw);
    }

    let normalized = normalize::normalize(bounded, rules);
    let mut release = ParsedRelease::unknown(raw);
    release.container = normalized.container;
    if normalized.text.is_empty() {
        return release;
    }

    let text = normalized.text.as_str();
    let lexer = Lexer::new(text);
    let input = Input {
        text,
        tokens: lexer.tokens(),
        rules,
    };

    let (prefix, claims) = match group::bracket_prefix(&input) {
        Some((name, span)) => (Some(name), Claims::new().with(span, ClaimKind::Group)),
        None => (None, Claims::new()),
    };

    let (file_hash, claims) = checksum::extract(&input, claims);
    let (year, claims) = year::extract(&input, config.effective_year(), claims);
    let (quality, claims) = quality::extract(&input, claims);
    let claims = claim_markers(&input, claims);
    let (languages, claims) = language::extract(&input, claims);
    let (release_group, claims) = group::extract(&input, prefix, claims);
    let (edition, claims) = edition::extract(&input, claims);

    release.title = title::extract(&input, &claims);
    release.year = year;
    release.quality = quality;
    release.languages = languages;
    release.release_group = release_group;
    release.edition = edition;
    release.file_hash = file_hash;

    trace!(input = raw, normalized = text, ?release, "parsed release");
    release
}

/// Episode markers end the title but carry no field of their own.
fn claim_markers(input: &Input<'_>, mut claims: Claims) -> Claims {
    for (token, range) in input.tokens {
        let span = Span::from(range.clone());
        if token.is_marker() && !claims.overlaps(span) {
            claims = claims.with(span, ClaimKind::Marker);
        }
    }
    claims
}

/// Cut `raw` to at most `max` bytes on a char boundary.
fn truncate(raw: &str, max: usize) -> &str {
    if raw.len() <= max {
        return raw;
    }
    let mut end = max;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, Resolution, Source};

    fn run(raw: &str) -> ParsedRelease {
        let config = ParserConfig::builder().current_year(2024).build();
        parse(raw, &config, &RuleTable::builtin())
    }

    #[test]
    fn test_full_pipeline() {
        let r = run("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
        assert_eq!(r.title.as_deref(), Some("The Matrix"));
        assert_eq!(r.year, Some(1999));
        assert_eq!(r.quality.resolution, Resolution::R1080p);
        assert_eq!(r.quality.source, Source::BluRay);
        assert_eq!(r.release_group.as_deref(), Some("GROUP"));
        assert_eq!(r.container.as_deref(), Some("mkv"));
    }

    #[test]
    fn test_empty_input() {
        let r = run("   ");
        assert!(r.is_empty());
        assert_eq!(r.raw_input, "   ");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("h\u{e9}llo", 2), "h");
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_markers_end_title() {
        let r = run("Series Title S01E01 Episode Title");
        assert_eq!(r.title.as_deref(), Some("Series Title"));
        assert!(r.quality.is_unknown());
        assert_eq!(r.release_group, None);
    }

    #[test]
    fn test_scene_language_tags_end_title() {
        let r = run("Le.Film.FRENCH.1080p.BluRay.x264-GRP");
        assert_eq!(r.title.as_deref(), Some("Le Film"));
        assert_eq!(r.languages, vec![Language::French]);
        assert_eq!(r.release_group.as_deref(), Some("GRP"));

        let r = run("Movie.GERMAN.DL.720p.BluRay.x264-GRP");
        assert_eq!(r.title.as_deref(), Some("Movie"));
        assert_eq!(r.languages, vec![Language::German]);
    }
}
