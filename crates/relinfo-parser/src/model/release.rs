//! Main parsed release structure.

use super::{Language, Quality};

/// All metadata extracted from a single release name.
///
/// Every field defaults independently: an unparseable input still produces
/// a complete record with `None`, empty and `Unknown` values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRelease {
    /// Best-guess clean title.
    pub title: Option<String>,
    /// Release year.
    pub year: Option<u16>,
    /// Quality tier (always populated).
    pub quality: Quality,
    /// Declared audio languages in first-seen order, without duplicates.
    pub languages: Vec<Language>,
    /// Release group name.
    pub release_group: Option<String>,
    /// Canonical edition label ("Extended", "Director's Cut", ...).
    pub edition: Option<String>,
    /// Lower-cased file extension stripped from the input.
    pub container: Option<String>,
    /// Upper-cased CRC32 tag such as `[28D54E2C]`.
    pub file_hash: Option<String>,
    /// The caller's input, untouched.
    pub raw_input: String,
}

impl ParsedRelease {
    /// A record with every field unknown.
    pub fn unknown(raw_input: impl Into<String>) -> Self {
        Self {
            title: None,
            year: None,
            quality: Quality::default(),
            languages: Vec::new(),
            release_group: None,
            edition: None,
            container: None,
            file_hash: None,
            raw_input: raw_input.into(),
        }
    }

    /// True when nothing beyond the raw input was recovered.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.quality.is_unknown()
            && self.languages.is_empty()
            && self.release_group.is_none()
            && self.edition.is_none()
            && self.container.is_none()
            && self.file_hash.is_none()
    }
}

impl Default for ParsedRelease {
    fn default() -> Self {
        Self::unknown(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Resolution, Source, VideoCodec};

    #[test]
    fn unknown_has_all_defaults() {
        let release = ParsedRelease::unknown("garbage");
        assert_eq!(release.raw_input, "garbage");
        assert!(release.is_empty());
        assert_eq!(release.quality.source, Source::Unknown);
        assert_eq!(release.quality.resolution, Resolution::Unknown);
        assert_eq!(release.quality.codec, VideoCodec::Unknown);
        assert_eq!(release.quality.revision.version, 1);
    }

    #[test]
    fn any_field_makes_it_non_empty() {
        let mut release = ParsedRelease::default();
        release.year = Some(1999);
        assert!(!release.is_empty());
    }

    #[test]
    fn container_and_hash_make_it_non_empty() {
        let mut release = ParsedRelease::default();
        release.container = Some("mkv".into());
        assert!(!release.is_empty());

        let mut release = ParsedRelease::default();
        release.file_hash = Some("ABCD1234".into());
        assert!(!release.is_empty());
    }
}
