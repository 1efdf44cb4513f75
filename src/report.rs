//! Human-readable rendering of parse results.

use relinfo_parser::ParsedRelease;
use std::fmt::Write;

const UNSET: &str = "-";

/// Render one release as an aligned `Field: value` block.
pub fn render(release: &ParsedRelease) -> String {
    let languages = release
        .languages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let rows: [(&str, String); 9] = [
        ("Input", release.raw_input.clone()),
        ("Title", or_unset(release.title.as_deref())),
        ("Year", or_unset(release.year.map(|y| y.to_string()).as_deref())),
        ("Quality", release.quality.to_string()),
        ("Languages", or_unset(Some(languages.as_str()).filter(|s| !s.is_empty()))),
        ("Group", or_unset(release.release_group.as_deref())),
        ("Edition", or_unset(release.edition.as_deref())),
        ("Container", or_unset(release.container.as_deref())),
        ("Hash", or_unset(release.file_hash.as_deref())),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<10} {}", format!("{label}:"), value);
    }
    out
}

fn or_unset(value: Option<&str>) -> String {
    value.unwrap_or(UNSET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relinfo_parser::{Parser, ParserConfig};

    #[test]
    fn test_render_scene_release() {
        let parser = Parser::new(ParserConfig::builder().current_year(2024).build());
        let text = render(&parser.parse("Castle.2009.S01E14.English.HDTV.XviD-LOL"));
        assert!(text.contains("Title:     Castle"));
        assert!(text.contains("Year:      2009"));
        assert!(text.contains("Languages: English"));
        assert!(text.contains("Group:     LOL"));
        assert!(text.contains("Edition:   -"));
    }

    #[test]
    fn test_render_unknown() {
        let text = render(&ParsedRelease::unknown(""));
        assert!(text.contains("Title:     -"));
        assert!(text.contains("Group:     -"));
    }
}
