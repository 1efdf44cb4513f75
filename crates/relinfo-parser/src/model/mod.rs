//! Data model types for parsed release information.
//!
//! Everything the parser returns lives here: the [`ParsedRelease`] record,
//! its [`Quality`] tier and the [`Language`] set.

mod language;
mod quality;
mod release;

pub use language::Language;
pub use quality::{Quality, Resolution, Revision, Source, VideoCodec};
pub use release::ParsedRelease;

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
