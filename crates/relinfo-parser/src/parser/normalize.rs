//! Input cleanup ahead of lexing.
//!
//! Strips the noise that sits outside the release name proper: file
//! extensions, website watermarks, indexer tags and repost suffixes.

use crate::rules::RuleTable;
use tracing::debug;

/// Upper bound on cascaded repost-suffix removal (`-EVO-RP-RP`).
pub(crate) const MAX_SUFFIX_PASSES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub text: String,
    pub container: Option<String>,
}

pub(crate) fn normalize(raw: &str, rules: &RuleTable) -> Normalized {
    let mut text = collapse_whitespace(&raw.replace('_', " "));

    let mut container = None;
    if let Some(caps) = rules.container_suffix().captures(&text) {
        let start = caps.get(0).map_or(text.len(), |m| m.start());
        if start > 0 {
            container = caps.get(1).map(|m| m.as_str().to_lowercase());
            text.truncate(start);
        }
    }

    if let Some(m) = rules.website_prefix().find(&text) {
        if m.end() < text.len() {
            debug!(prefix = m.as_str(), "stripped website prefix");
            text = text[m.end()..].to_string();
        }
    }

    let text = strip_watermark_tags(text, rules);
    let text = strip_repost_suffixes(text, rules);

    Normalized {
        text: collapse_whitespace(&text),
        container,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_watermark_tags(mut text: String, rules: &RuleTable) -> String {
    loop {
        let Some(caps) = rules.trailing_tag().captures(&text) else {
            break;
        };
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        if whole.start() == 0 || !rules.is_watermark(tag.as_str()) {
            break;
        }
        debug!(tag = tag.as_str(), "stripped watermark tag");
        let start = whole.start();
        text.truncate(start);
    }
    text
}

fn strip_repost_suffixes(mut text: String, rules: &RuleTable) -> String {
    for _ in 0..MAX_SUFFIX_PASSES {
        let Some(idx) = text.rfind('-') else {
            break;
        };
        let (head, suffix) = (&text[..idx], &text[idx + 1..]);
        if !is_repost_segment(head, suffix, rules) {
            break;
        }
        debug!(suffix, "stripped repost suffix");
        text.truncate(idx);
    }
    text
}

/// Whether `suffix`, the piece after the last hyphen of `head-suffix`, is a
/// repost tag rather than part of the name.
pub(crate) fn is_repost_segment(head: &str, suffix: &str, rules: &RuleTable) -> bool {
    if head.trim().is_empty()
        || suffix.is_empty()
        || !suffix.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return false;
    }
    // A bare number only counts as a repost tag directly after a word,
    // never as the tail of a date.
    if suffix.bytes().all(|b| b.is_ascii_digit())
        && !head.ends_with(|c: char| c.is_ascii_alphabetic())
    {
        return false;
    }
    rules.is_repost_suffix(suffix)
}
