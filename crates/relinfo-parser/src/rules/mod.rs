//! Rule table: the vocabularies and patterns every extractor consults.
//!
//! A [`RuleSet`] is plain, serializable data. [`RuleTable::compile`] turns it
//! into the immutable lookup structure the parser shares across threads.
//! The built-in table is compiled once per process.

mod vocab;

use crate::error::RuleError;
use crate::model::Language;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, LazyLock};

static BUILTIN: LazyLock<Arc<RuleTable>> = LazyLock::new(|| {
    Arc::new(RuleTable::compile(&RuleSet::builtin()).expect("built-in rule table must compile"))
});

/// An edition pattern and the label it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditionRule {
    /// Regular expression matched against the normalized title.
    pub pattern: String,
    /// Canonical edition label.
    pub label: String,
}

/// Editable vocabulary.
///
/// Field order matters for TOML output: plain lists come before the alias
/// table and the edition array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleSet {
    /// Literal repost suffixes (case-insensitive, whole segment).
    pub repost_suffixes: Vec<String>,
    /// Repost suffix patterns (case-insensitive, whole segment).
    pub repost_patterns: Vec<String>,
    /// Trailing bracketed site tags to strip.
    pub watermark_tags: Vec<String>,
    /// Words that never name a release group.
    pub non_group_terms: Vec<String>,
    /// Groups matched as whole words anywhere.
    pub known_groups: Vec<String>,
    /// Groups that sign the end of a bracketed quality block.
    pub bracket_tail_groups: Vec<String>,
    /// Extra language spellings, mapped to a language name or ISO code.
    pub language_aliases: BTreeMap<String, String>,
    /// Edition patterns in precedence order.
    pub editions: Vec<EditionRule>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn append_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for item in extra {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

impl RuleSet {
    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self {
            repost_suffixes: owned(vocab::REPOST_SUFFIXES),
            repost_patterns: owned(vocab::REPOST_PATTERNS),
            watermark_tags: owned(vocab::WATERMARK_TAGS),
            non_group_terms: owned(vocab::NON_GROUP_TERMS),
            known_groups: owned(vocab::KNOWN_GROUPS),
            bracket_tail_groups: owned(vocab::BRACKET_TAIL_GROUPS),
            language_aliases: BTreeMap::new(),
            editions: vocab::EDITIONS
                .iter()
                .map(|(pattern, label)| EditionRule {
                    pattern: pattern.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// Append `extra` to this set. Entries already present are skipped;
    /// extra editions are tried after the existing ones.
    pub fn extend(&mut self, extra: RuleSet) {
        append_unique(&mut self.repost_suffixes, extra.repost_suffixes);
        append_unique(&mut self.repost_patterns, extra.repost_patterns);
        append_unique(&mut self.watermark_tags, extra.watermark_tags);
        append_unique(&mut self.non_group_terms, extra.non_group_terms);
        append_unique(&mut self.known_groups, extra.known_groups);
        append_unique(&mut self.bracket_tail_groups, extra.bracket_tail_groups);
        self.language_aliases.extend(extra.language_aliases);
        for edition in extra.editions {
            if !self.editions.contains(&edition) {
                self.editions.push(edition);
            }
        }
    }

    /// Total number of entries across all lists.
    pub fn len(&self) -> usize {
        self.repost_suffixes.len()
            + self.repost_patterns.len()
            + self.watermark_tags.len()
            + self.non_group_terms.len()
            + self.known_groups.len()
            + self.bracket_tail_groups.len()
            + self.language_aliases.len()
            + self.editions.len()
    }

    /// True when every list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compiled, immutable rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    source: RuleSet,
    repost_suffixes: HashSet<String>,
    repost_patterns: Vec<Regex>,
    watermark_tags: HashSet<String>,
    non_group_terms: HashSet<String>,
    language_aliases: HashMap<String, Language>,
    editions: Vec<(Regex, String)>,
    website_prefix: Regex,
    container_suffix: Regex,
    trailing_tag: Regex,
    hash_tag: Regex,
}

fn compile_pattern(rule: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|e| RuleError::invalid_pattern(rule, e))
}

fn lowercase_set(rule: &str, list: &[String]) -> Result<HashSet<String>, RuleError> {
    list.iter()
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                Err(RuleError::EmptyEntry(rule.to_string()))
            } else {
                Ok(item.to_lowercase())
            }
        })
        .collect()
}

impl RuleTable {
    /// Compile a rule set.
    pub fn compile(rules: &RuleSet) -> Result<Self, RuleError> {
        let repost_patterns = rules
            .repost_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(&format!("^(?:{})$", pattern))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| RuleError::invalid_pattern("repost_patterns", e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let editions = rules
            .editions
            .iter()
            .map(|rule| Ok((compile_pattern("editions", &rule.pattern)?, rule.label.clone())))
            .collect::<Result<Vec<_>, RuleError>>()?;

        let language_aliases = rules
            .language_aliases
            .iter()
            .map(|(alias, language)| {
                let lang = language
                    .parse::<Language>()
                    .map_err(|_| RuleError::UnknownLanguage {
                        alias: alias.clone(),
                        language: language.clone(),
                    })?;
                Ok((alias.to_lowercase(), lang))
            })
            .collect::<Result<HashMap<_, _>, RuleError>>()?;

        for (rule, list) in [
            ("known_groups", &rules.known_groups),
            ("bracket_tail_groups", &rules.bracket_tail_groups),
        ] {
            if list.iter().any(|g| g.trim().is_empty()) {
                return Err(RuleError::EmptyEntry(rule.to_string()));
            }
        }

        Ok(Self {
            source: rules.clone(),
            repost_suffixes: lowercase_set("repost_suffixes", &rules.repost_suffixes)?,
            repost_patterns,
            watermark_tags: lowercase_set("watermark_tags", &rules.watermark_tags)?,
            non_group_terms: lowercase_set("non_group_terms", &rules.non_group_terms)?,
            language_aliases,
            editions,
            website_prefix: compile_pattern("website_prefix", vocab::WEBSITE_PREFIX)?,
            container_suffix: compile_pattern("container_suffix", vocab::CONTAINER_SUFFIX)?,
            trailing_tag: compile_pattern("trailing_tag", vocab::TRAILING_TAG)?,
            hash_tag: compile_pattern("hash_tag", vocab::HASH_TAG)?,
        })
    }

    /// The process-wide built-in table.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// The built-in vocabulary extended with `extra`, compiled.
    pub fn with_extra(extra: &RuleSet) -> Result<Self, RuleError> {
        let mut rules = RuleSet::builtin();
        rules.extend(extra.clone());
        Self::compile(&rules)
    }

    /// The rule set this table was compiled from.
    pub fn rule_set(&self) -> &RuleSet {
        &self.source
    }

    /// Whether a trailing `-segment` is a repost tag.
    pub fn is_repost_suffix(&self, segment: &str) -> bool {
        self.repost_suffixes.contains(&segment.to_lowercase())
            || self.repost_patterns.iter().any(|re| re.is_match(segment))
    }

    /// Whether a bracketed tag is a site watermark.
    pub fn is_watermark(&self, tag: &str) -> bool {
        self.watermark_tags.contains(&tag.trim().to_lowercase())
    }

    /// Whether a word can never be a release group.
    pub fn is_non_group_term(&self, word: &str) -> bool {
        self.non_group_terms.contains(&word.to_lowercase()) || self.language(word).is_some()
    }

    /// Resolve a word to a language.
    ///
    /// Upper-case scene codes match exactly; names and configured aliases
    /// match case-insensitively.
    pub fn language(&self, word: &str) -> Option<Language> {
        if let Some(lang) = vocab::LANGUAGE_CODES.get(word) {
            return Some(*lang);
        }
        let lower = word.to_lowercase();
        vocab::LANGUAGE_NAMES
            .get(lower.as_str())
            .copied()
            .or_else(|| self.language_aliases.get(&lower).copied())
    }

    /// Groups matched as whole words anywhere.
    pub fn known_groups(&self) -> &[String] {
        &self.source.known_groups
    }

    /// Groups that sign the end of a bracketed quality block.
    pub fn bracket_tail_groups(&self) -> &[String] {
        &self.source.bracket_tail_groups
    }

    /// Compiled edition rules with their labels.
    pub(crate) fn editions(&self) -> &[(Regex, String)] {
        &self.editions
    }

    pub(crate) fn website_prefix(&self) -> &Regex {
        &self.website_prefix
    }

    pub(crate) fn container_suffix(&self) -> &Regex {
        &self.container_suffix
    }

    pub(crate) fn trailing_tag(&self) -> &Regex {
        &self.trailing_tag
    }

    pub(crate) fn hash_tag(&self) -> &Regex {
        &self.hash_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles() {
        let table = RuleTable::builtin();
        assert!(!table.rule_set().is_empty());
        assert!(table.is_repost_suffix("xpost"));
        assert!(table.is_repost_suffix("RakuvUS"));
        assert!(table.is_repost_suffix("NZBgeek"));
        assert!(table.is_repost_suffix("1"));
        assert!(!table.is_repost_suffix("NTb"));
        assert!(!table.is_repost_suffix("123"));
    }

    #[test]
    fn language_lookup_respects_case_rules() {
        let table = RuleTable::builtin();
        assert_eq!(table.language("English"), Some(Language::English));
        assert_eq!(table.language("ENGLISH"), Some(Language::English));
        assert_eq!(table.language("ITA"), Some(Language::Italian));
        assert_eq!(table.language("Ita"), None);
        assert_eq!(table.language("MULTi"), Some(Language::Multi));
    }

    #[test]
    fn non_group_terms_include_languages() {
        let table = RuleTable::builtin();
        assert!(table.is_non_group_term("English"));
        assert!(table.is_non_group_term("ita"));
        assert!(table.is_non_group_term("EXTENDED"));
        assert!(!table.is_non_group_term("SKGTV"));
    }

    #[test]
    fn watermarks() {
        let table = RuleTable::builtin();
        assert!(table.is_watermark("rarbg.com"));
        assert!(table.is_watermark(" EZTV "));
        assert!(!table.is_watermark("YTS.MX"));
    }

    #[test]
    fn extra_vocabulary_extends_builtin() {
        let mut extra = RuleSet::default();
        extra.repost_suffixes.push("MyBot".into());
        extra.language_aliases.insert("vlaams".into(), "Flemish".into());
        extra.editions.push(EditionRule {
            pattern: r"(?i)\bsuper[ .]cut\b".into(),
            label: "Super Cut".into(),
        });

        let table = RuleTable::with_extra(&extra).expect("extra rules compile");
        assert!(table.is_repost_suffix("mybot"));
        assert!(table.is_repost_suffix("xpost"));
        assert_eq!(table.language("Vlaams"), Some(Language::Flemish));
        assert_eq!(
            table.editions().last().map(|(_, label)| label.as_str()),
            Some("Super Cut")
        );
    }

    #[test]
    fn extend_skips_duplicates() {
        let mut rules = RuleSet::builtin();
        let before = rules.len();
        rules.extend(RuleSet::builtin());
        assert_eq!(rules.len(), before);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let mut extra = RuleSet::default();
        extra.repost_patterns.push("(unclosed".into());
        let err = RuleTable::with_extra(&extra).unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidPattern { ref rule, .. } if rule == "repost_patterns"
        ));
    }

    #[test]
    fn unknown_language_alias_is_reported() {
        let mut extra = RuleSet::default();
        extra.language_aliases.insert("tlh".into(), "Klingon".into());
        let err = RuleTable::with_extra(&extra).unwrap_err();
        assert!(matches!(err, RuleError::UnknownLanguage { .. }));
    }

    #[test]
    fn empty_entries_are_rejected() {
        let mut extra = RuleSet::default();
        extra.watermark_tags.push("  ".into());
        assert!(matches!(
            RuleTable::with_extra(&extra),
            Err(RuleError::EmptyEntry(_))
        ));
    }
}
