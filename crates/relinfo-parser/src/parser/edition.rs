//! Edition detection (Director's Cut, Extended, IMAX, ...).

use super::claims::{ClaimKind, Claims};
use super::Input;
use crate::lexer::Span;

/// Leftmost edition phrase outside the title's first word. When two rules
/// match at the same offset the earlier rule wins.
pub(crate) fn extract(input: &Input<'_>, claims: Claims) -> (Option<String>, Claims) {
    let best = input
        .rules
        .editions()
        .iter()
        .enumerate()
        .filter_map(|(order, (pattern, label))| {
            pattern
                .find_iter(input.text)
                .map(|m| Span::new(m.start(), m.end()))
                .find(|span| span.start > 0 && !claims.overlaps(*span))
                .map(|span| (span, order, label))
        })
        .min_by_key(|(span, order, _)| (span.start, *order));

    match best {
        Some((span, _, label)) => (Some(label.clone()), claims.with(span, ClaimKind::Edition)),
        None => (None, claims),
    }
}
