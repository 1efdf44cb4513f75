//! relinfo - release name parsing from the command line
//!
//! This library crate exposes the CLI's configuration and output layers
//! for integration testing.

pub mod config;
pub mod report;

use rayon::prelude::*;
use relinfo_parser::{ParsedRelease, Parser};

/// Parse many titles in parallel. Results keep the input order.
pub fn parse_batch<S: AsRef<str> + Sync>(parser: &Parser, titles: &[S]) -> Vec<ParsedRelease> {
    titles
        .par_iter()
        .map(|title| parser.parse(title.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relinfo_parser::ParserConfig;

    #[test]
    fn test_parse_batch_keeps_order() {
        let parser = Parser::new(ParserConfig::builder().current_year(2024).build());
        let titles: Vec<String> = (0..64)
            .map(|i| format!("Movie.{}.720p.HDTV.x264-GRP{}", 1950 + i, i))
            .collect();

        let results = parse_batch(&parser, &titles);
        assert_eq!(results.len(), titles.len());
        for (i, release) in results.iter().enumerate() {
            assert_eq!(release.raw_input, titles[i]);
            assert_eq!(release.year, Some(1950 + i as u16));
            assert_eq!(release.release_group, Some(format!("GRP{i}")));
        }
    }
}
