use relinfo_parser::config::ParserConfig;
use relinfo_parser::rules::{RuleSet, RuleTable};
use relinfo_parser::{Parser, RuleError};
use serde::{Deserialize, Serialize};

/// Top-level `relinfo.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Parser limits and the injected current year.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Entries added on top of the built-in vocabulary.
    #[serde(default)]
    pub vocabulary: RuleSet,
}

impl Config {
    /// Compile the built-in vocabulary extended with this config's entries.
    pub fn rule_table(&self) -> Result<RuleTable, RuleError> {
        if self.vocabulary.is_empty() {
            return RuleTable::compile(&RuleSet::builtin());
        }
        RuleTable::with_extra(&self.vocabulary)
    }

    /// Build a parser from this config.
    pub fn build_parser(&self) -> Result<Parser, RuleError> {
        if self.vocabulary.is_empty() {
            return Ok(Parser::new(self.parser.clone()));
        }
        Ok(Parser::with_rules(self.parser.clone(), self.rule_table()?))
    }
}
