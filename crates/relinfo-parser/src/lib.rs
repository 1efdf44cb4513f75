//! # relinfo-parser
//!
//! A parser for media release names.
//!
//! Turns free-form release and file names (scene, P2P, anime fansub and
//! usenet reposts) into a [`ParsedRelease`]: title, year, quality tier,
//! languages, release group and edition. Parsing never fails; anything
//! that cannot be recognised is left unset.
//!
//! ## Quick Start
//!
//! ```
//! use relinfo_parser::{parse, Resolution, Source};
//!
//! let release = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP");
//!
//! assert_eq!(release.title.as_deref(), Some("The Matrix"));
//! assert_eq!(release.year, Some(1999));
//! assert_eq!(release.quality.resolution, Resolution::R1080p);
//! assert_eq!(release.quality.source, Source::BluRay);
//! assert_eq!(release.release_group.as_deref(), Some("GROUP"));
//! ```
//!
//! ## Custom Vocabulary
//!
//! ```
//! use relinfo_parser::config::ParserConfig;
//! use relinfo_parser::rules::{RuleSet, RuleTable};
//! use relinfo_parser::Parser;
//!
//! let extra = RuleSet {
//!     known_groups: vec!["My-Crew".to_string()],
//!     ..RuleSet::default()
//! };
//! let rules = RuleTable::with_extra(&extra).unwrap();
//! let parser = Parser::with_rules(ParserConfig::builder().current_year(2024).build(), rules);
//!
//! let release = parser.parse("Some.Movie.2020.1080p.WEB-DL.x264-My-Crew");
//! assert_eq!(release.release_group.as_deref(), Some("My-Crew"));
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod model;
pub mod rules;

mod parser;

pub use config::ParserConfig;
pub use error::RuleError;
pub use model::{
    Language, ParseError, ParsedRelease, Quality, Resolution, Revision, Source, VideoCodec,
};
pub use rules::{RuleSet, RuleTable};

use std::sync::Arc;

/// Parse a release name with the default configuration and the built-in
/// vocabulary.
///
/// # Examples
///
/// ```
/// use relinfo_parser::parse;
///
/// let release = parse("Castle.2009.S01E14.English.HDTV.XviD-LOL");
/// assert_eq!(release.year, Some(2009));
/// assert_eq!(release.release_group.as_deref(), Some("LOL"));
/// ```
pub fn parse(input: &str) -> ParsedRelease {
    Parser::default().parse(input)
}

/// A configurable release name parser.
///
/// Cheap to clone and safe to share between threads: the compiled
/// vocabulary sits behind an [`Arc`] and parsing takes `&self`.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    rules: Arc<RuleTable>,
}

impl Parser {
    /// Create a parser using the built-in vocabulary.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            rules: RuleTable::builtin(),
        }
    }

    /// Create a parser with a custom compiled vocabulary.
    pub fn with_rules(config: ParserConfig, rules: RuleTable) -> Self {
        Self {
            config,
            rules: Arc::new(rules),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The active vocabulary.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Parse a release name into structured metadata.
    ///
    /// ```
    /// use relinfo_parser::{Parser, ParserConfig};
    ///
    /// let parser = Parser::new(ParserConfig::builder().current_year(2024).build());
    /// let release = parser.parse("Movie.2020.1080p.BluRay.x264-GROUP");
    /// assert_eq!(release.year, Some(2020));
    /// ```
    pub fn parse(&self, input: &str) -> ParsedRelease {
        parser::parse(input, &self.config, &self.rules)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
