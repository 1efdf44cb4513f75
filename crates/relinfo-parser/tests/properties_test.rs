//! Properties that hold for every input, not just the fixture corpus.

use relinfo_parser::config::ParserConfig;
use relinfo_parser::rules::RuleSet;
use relinfo_parser::{parse, Parser, Resolution, Source, VideoCodec};

fn parser() -> Parser {
    Parser::new(ParserConfig::builder().current_year(2024).build())
}

const SAMPLES: &[&str] = &[
    "The.Matrix.1999.1080p.BluRay.x264-GROUP",
    "[SubsPlease] Jujutsu Kaisen - 24 (1080p) [ABCD1234].mkv",
    "Wonder Woman 1984 (2020) (1080p AMZN WEB-DL x265 HEVC 10bit EAC3 5.1 Silence)",
    "Reizen Waes - S01E08 - Transistri\u{eb}, Zuid-Osseti\u{eb} en Abchazi\u{eb} SDTV.avi",
    "Some random words",
    "",
    "-",
    "[]",
    "....",
];

#[test]
fn test_parse_is_deterministic() {
    let parser = parser();
    for input in SAMPLES {
        assert_eq!(parser.parse(input), parser.parse(input), "input: {input:?}");
    }
}

#[test]
fn test_repost_suffix_invariance() {
    let parser = parser();
    let base = "Rambo.Last.Blood.2019.1080p.BDRip.X264.AC3";
    let suffixes = RuleSet::builtin().repost_suffixes;

    for group in ["EVO", "NTb", "SiNNERS", "DON"] {
        let clean = parser.parse(&format!("{base}-{group}")).release_group;
        assert_eq!(clean.as_deref(), Some(group));
        for suffix in &suffixes {
            let reposted = parser.parse(&format!("{base}-{group}-{suffix}"));
            assert_eq!(reposted.release_group, clean, "suffix: {suffix}");
        }
    }
}

#[test]
fn test_bracket_prefix_precedence() {
    let parser = parser();
    for group in ["FFF", "HorribleSubs", "Anime-Koi", "ITA"] {
        let input = format!("[{group}] Some Show - S01E02 - Title [720p]-NOTGROUP");
        assert_eq!(parser.parse(&input).release_group.as_deref(), Some(group));
    }
}

#[test]
fn test_quality_brackets_are_not_groups() {
    let parser = parser();
    let result = parser.parse("[1080p] Some Show - 05");
    assert_eq!(result.release_group, None);
    assert_eq!(result.quality.resolution, Resolution::R1080p);
}

#[test]
fn test_unknown_defaults() {
    let parser = parser();
    for input in ["Some random words", "The German Doctor", "Series Title S01E01 Episode Title"] {
        let result = parser.parse(input);
        assert_eq!(result.quality.source, Source::Unknown);
        assert_eq!(result.quality.resolution, Resolution::Unknown);
        assert_eq!(result.quality.codec, VideoCodec::Unknown);
        assert_eq!(result.quality.revision.version, 1);
        assert!(result.languages.is_empty());
    }
}

#[test]
fn test_degenerate_inputs() {
    for input in ["", "   ", "-", "[]", "....", "()"] {
        let result = parse(input);
        assert_eq!(result.raw_input, input);
        assert!(result.quality.is_unknown());
        assert_eq!(result.release_group, None);
    }
}

#[test]
fn test_oversized_input_is_truncated() {
    let parser = Parser::new(
        ParserConfig::builder()
            .current_year(2024)
            .max_input_length(32)
            .build(),
    );
    let mut input = String::from("The.Matrix.1999.1080p.BluRay");
    input.push_str(&".x264".repeat(10_000));
    input.push_str("-GROUP");

    let result = parser.parse(&input);
    assert_eq!(result.raw_input, input);
    assert_eq!(result.year, Some(1999));
    assert_eq!(result.release_group, None);
}

#[test]
fn test_truncation_respects_char_boundaries() {
    let parser = Parser::new(ParserConfig::builder().max_input_length(5).build());
    let result = parser.parse("\u{e9}\u{e9}\u{e9}\u{e9}");
    assert_eq!(result.title.as_deref(), Some("\u{e9}\u{e9}"));
}

#[test]
fn test_year_window_follows_current_year() {
    let early = Parser::new(ParserConfig::builder().current_year(2010).build());
    let late = Parser::new(ParserConfig::builder().current_year(2024).build());
    let input = "Movie.2020.720p.HDTV.x264-GRP";
    assert_eq!(early.parse(input).year, None);
    assert_eq!(late.parse(input).year, Some(2020));
}

#[test]
fn test_extreme_current_year_never_panics() {
    let input = "Movie.2019.1080p.BluRay.x264-GRP";
    for year in [i32::MAX, i32::MIN, 0] {
        let parser = Parser::new(ParserConfig::builder().current_year(year).build());
        let result = parser.parse(input);
        assert_eq!(result.release_group.as_deref(), Some("GRP"));
    }
    let far_future = Parser::new(ParserConfig::builder().current_year(i32::MAX).build());
    assert_eq!(far_future.parse(input).year, Some(2019));
}

#[test]
fn test_concurrent_parsing() {
    let parser = parser();
    let expected: Vec<_> = SAMPLES.iter().map(|s| parser.parse(s)).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for (input, want) in SAMPLES.iter().zip(&expected) {
                    assert_eq!(&parser.parse(input), want);
                }
            });
        }
    });
}
