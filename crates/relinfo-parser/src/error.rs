//! Errors raised while compiling a rule table.
//!
//! Parsing itself never fails; only user-supplied vocabulary can be invalid.

/// Failure to compile a [`RuleSet`](crate::rules::RuleSet) into a
/// [`RuleTable`](crate::rules::RuleTable).
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A pattern entry is not a valid regular expression.
    #[error("invalid pattern in {rule}: {source}")]
    InvalidPattern {
        /// Name of the rule list the pattern belongs to.
        rule: String,
        /// The underlying regex error.
        source: regex::Error,
    },

    /// A language alias points at a language that does not exist.
    #[error("unknown language '{language}' for alias '{alias}'")]
    UnknownLanguage {
        /// The alias being defined.
        alias: String,
        /// The language name that failed to resolve.
        language: String,
    },

    /// A vocabulary list contains an empty entry.
    #[error("empty entry in {0}")]
    EmptyEntry(String),
}

impl RuleError {
    /// Create an invalid-pattern error.
    pub fn invalid_pattern(rule: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            rule: rule.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RuleError::invalid_pattern("repost_patterns", source);
        assert!(err.to_string().starts_with("invalid pattern in repost_patterns:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unknown_language_display() {
        let err = RuleError::UnknownLanguage {
            alias: "vlaams".into(),
            language: "Klingon".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown language 'Klingon' for alias 'vlaams'"
        );
    }
}
