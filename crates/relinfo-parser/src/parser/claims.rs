//! Spans of the normalized input already consumed by an extractor.
//!
//! Claims are threaded by value through the extractors: each one receives
//! the claims made so far and returns them with its own added.

use crate::lexer::Span;

/// Which extractor consumed a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClaimKind {
    Group,
    Hash,
    Year,
    Quality,
    Marker,
    Language,
    Edition,
}

impl ClaimKind {
    /// Kinds whose first occurrence ends the title.
    fn bounds_title(self) -> bool {
        matches!(self, ClaimKind::Year | ClaimKind::Quality | ClaimKind::Marker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Claim {
    pub span: Span,
    pub kind: ClaimKind,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Claims {
    claims: Vec<Claim>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, span: Span, kind: ClaimKind) -> Self {
        self.claims.push(Claim { span, kind });
        self
    }

    pub fn overlaps(&self, span: Span) -> bool {
        self.claims.iter().any(|c| c.span.overlaps(&span))
    }

    pub fn covers(&self, offset: usize) -> bool {
        self.claims.iter().any(|c| c.span.contains(offset))
    }

    /// Start of the first year, quality or marker claim.
    pub fn boundary(&self) -> Option<usize> {
        self.claims
            .iter()
            .filter(|c| c.kind.bounds_title())
            .map(|c| c.span.start)
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_ignores_group_and_language() {
        let claims = Claims::new()
            .with(Span::new(0, 5), ClaimKind::Group)
            .with(Span::new(30, 37), ClaimKind::Language)
            .with(Span::new(20, 25), ClaimKind::Quality)
            .with(Span::new(12, 16), ClaimKind::Year);
        assert_eq!(claims.boundary(), Some(12));
    }

    #[test]
    fn test_no_boundary_without_anchors() {
        let claims = Claims::new().with(Span::new(0, 5), ClaimKind::Group);
        assert_eq!(claims.boundary(), None);
    }

    #[test]
    fn test_overlap_and_cover() {
        let claims = Claims::new().with(Span::new(4, 8), ClaimKind::Quality);
        assert!(claims.overlaps(Span::new(7, 10)));
        assert!(!claims.overlaps(Span::new(8, 10)));
        assert!(claims.covers(4));
        assert!(!claims.covers(8));
        assert_eq!(claims.iter().count(), 1);
    }
}
