//! Parser configuration.

/// Default cap on accepted input, in bytes.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1024;

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use relinfo_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .current_year(2024)
///     .build();
/// assert_eq!(config.current_year, Some(2024));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Year used as "now" when judging year plausibility.
    /// Default: None (read the wall clock at parse time)
    pub current_year: Option<i32>,

    /// Longer inputs are truncated on a character boundary before parsing.
    /// Default: 1024
    pub max_input_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            current_year: None,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// The injected current year, or the wall-clock year when none is set.
    pub fn effective_year(&self) -> i32 {
        use chrono::Datelike;
        self.current_year.unwrap_or_else(|| chrono::Utc::now().year())
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    current_year: Option<i32>,
    max_input_length: Option<usize>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the current year.
    ///
    /// Years later than `current_year + 5` are treated as implausible.
    /// Pinning makes results reproducible across calendar years.
    pub fn current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Set the maximum accepted input length in bytes.
    ///
    /// Default: 1024
    pub fn max_input_length(mut self, len: usize) -> Self {
        self.max_input_length = Some(len);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            current_year: self.current_year,
            max_input_length: self.max_input_length.unwrap_or(DEFAULT_MAX_INPUT_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(config.current_year.is_none());
        assert_eq!(config.max_input_length, 1024);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ParserConfig::builder()
            .current_year(2020)
            .max_input_length(64)
            .build();

        assert_eq!(config.current_year, Some(2020));
        assert_eq!(config.max_input_length, 64);
        assert_eq!(config.effective_year(), 2020);
    }

    #[test]
    fn test_builder_partial() {
        let config = ParserConfig::builder().current_year(1999).build();
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH); // default
    }

    #[test]
    fn test_effective_year_falls_back_to_clock() {
        assert!(ParserConfig::new().effective_year() >= 2024);
    }
}
