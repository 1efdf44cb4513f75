//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Single-run keywords only win when they cover a whole alphanumeric run:
/// the generic [`Token::Word`] pattern is greedy, so `HDTVRip` or
/// `BluDragon` lex as words rather than as a source keyword followed by
/// noise. Hyphenated keywords can still outrun a word (`DTS-HDChina`);
/// [`Lexer::new`](super::Lexer::new) splits those back apart.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Season and episode identifier (S01E05, S01E01E02, S01E01-E03, S01E12v2)
    #[regex(
        r"(?i)S[0-9]{1,4}E[0-9]{1,4}(-?E[0-9]{1,4})*(v[0-9]{1,2})?",
        priority = 12
    )]
    SeasonEpisode(&'src str),

    /// Season x episode format (1x05, 10x11)
    #[regex(r"[0-9]{1,2}x[0-9]{2,3}", priority = 9)]
    SeasonEpisodeX(&'src str),

    /// Season-only identifier for full season releases (S01, S5)
    #[regex(r"(?i)S[0-9]{1,2}", priority = 8)]
    SeasonOnly(&'src str),

    /// Video resolution (2160p, 1080i, 1920x1080, 4K, UHD)
    #[regex(r"(?i)(2160|1080|720|576|480|360)[pi]", priority = 10)]
    #[regex(r"(?i)(3840x2160|1920x1080|1280x720|4K|UHD)", priority = 10)]
    Resolution(&'src str),

    /// Lossless disc remux
    #[regex(r"(?i)REMUX", priority = 7)]
    Remux(&'src str),

    /// Blu-ray sources
    #[regex(r"(?i)(Blu-?Ray|BDRip|BRRip|BD25|BD50)", priority = 7)]
    #[regex(r"(?i)BD", priority = 5)]
    BluRay(&'src str),

    /// Web download, including bare WEB
    #[regex(r"(?i)WEB-?DL", priority = 7)]
    #[regex(r"(?i)WEB", priority = 5)]
    WebDl(&'src str),

    /// Web rip
    #[regex(r"(?i)WEB-?Rip", priority = 7)]
    WebRip(&'src str),

    /// Television capture
    #[regex(r"(?i)(HDTV|PDTV|SDTV|DSR|DSRip|TVRip|SATRip)", priority = 7)]
    Tv(&'src str),

    /// DVD sources
    #[regex(r"(?i)(DVDRip|DVD-?R|DVD5|DVD9|DVD)", priority = 7)]
    Dvd(&'src str),

    /// Theater camera recording; bare CAM is only trusted in upper case
    #[token("CAM", priority = 7)]
    #[regex(r"(?i)(CAMRip|HDCAM)", priority = 7)]
    Cam(&'src str),

    /// Telesync; bare TS is only trusted in upper case
    #[token("TS", priority = 7)]
    #[regex(r"(?i)(HDTS|TSRip|TELESYNC)", priority = 7)]
    Telesync(&'src str),

    /// Telecine; bare TC is only trusted in upper case
    #[token("TC", priority = 7)]
    #[regex(r"(?i)(HDTC|TELECINE)", priority = 7)]
    Telecine(&'src str),

    /// Screener copies
    #[regex(r"(?i)(DVDSCR|BDSCR|SCREENER|SCR)", priority = 7)]
    #[token("R5", priority = 7)]
    Screener(&'src str),

    /// H.264/AVC codec variants
    #[regex(r"(?i)(x264|H\.?264|AVC)", priority = 8)]
    CodecH264(&'src str),

    /// H.265/HEVC codec variants
    #[regex(r"(?i)(x265|H\.?265|HEVC)", priority = 8)]
    CodecH265(&'src str),

    /// XviD
    #[regex(r"(?i)XviD", priority = 8)]
    CodecXvid(&'src str),

    /// DivX
    #[regex(r"(?i)DivX", priority = 8)]
    CodecDivx(&'src str),

    /// AV1
    #[regex(r"(?i)AV1", priority = 8)]
    CodecAv1(&'src str),

    /// VP9
    #[regex(r"(?i)VP9", priority = 8)]
    CodecVp9(&'src str),

    /// MPEG-2
    #[regex(r"(?i)MPEG-?2", priority = 8)]
    CodecMpeg2(&'src str),

    /// Audio formats. Compound spellings (DTS-X.MA, DDP5.1, E-AC-3) lex as
    /// one token so their internal hyphens and dots never look like
    /// separators.
    #[regex(r"(?i)DTS(-?(HD|X|MA|ES))?(\.?MA)?", priority = 6)]
    #[regex(r"(?i)(TrueHD|Atmos)", priority = 6)]
    #[regex(r"(?i)(DDP|DD\+|E-?AC-?3)([0-9]\.[0-9])?", priority = 6)]
    #[regex(r"(?i)(DD|AC-?3)([0-9]\.[0-9])?", priority = 6)]
    #[regex(r"(?i)(AAC|FLAC|MP3|LPCM|PCM|OPUS)([0-9]\.[0-9])?", priority = 6)]
    Audio(&'src str),

    /// Audio channel layout (5.1, 2.0, 6CH)
    #[regex(r"[1-9]\.[0-2]", priority = 8)]
    #[regex(r"(?i)[0-9]{1,2}CH", priority = 8)]
    Channels(&'src str),

    /// Colour bit depth (8bit, 10-bit)
    #[regex(r"(?i)(8|10|12)-?bits?", priority = 7)]
    BitDepth(&'src str),

    /// HDR formats; bare DV is only trusted in upper case
    #[regex(r"(?i)(HDR10\+?|HDR10Plus|HDR|DoVi|HLG)", priority = 7)]
    #[token("DV", priority = 7)]
    Hdr(&'src str),

    /// PROPER re-release
    #[regex(r"(?i)PROPER", priority = 6)]
    Proper(&'src str),

    /// REPACK / RERIP, optionally numbered (REPACK2)
    #[regex(r"(?i)(REPACK|RERIP)[0-9]?", priority = 6)]
    Repack(&'src str),

    /// REAL re-release; only the upper-case spelling is a marker
    #[token("REAL", priority = 6)]
    Real,

    /// Explicit release version (v2)
    #[regex(r"(?i)v[0-9]{1,2}", priority = 4)]
    Version(&'src str),

    /// Year (1900-2099)
    #[regex(r"(19|20)[0-9]{2}", priority = 5)]
    Year(&'src str),

    /// Dot delimiter
    #[token(".")]
    Dot,

    /// Hyphen delimiter
    #[token("-")]
    Hyphen,

    /// Opening square bracket
    #[token("[")]
    BracketOpen,

    /// Closing square bracket
    #[token("]")]
    BracketClose,

    /// Opening parenthesis
    #[token("(")]
    ParenOpen,

    /// Closing parenthesis
    #[token(")")]
    ParenClose,

    /// Generic word token (lower priority than specific patterns)
    #[regex(r"[0-9]*[a-zA-Z][a-zA-Z0-9']*", priority = 1)]
    Word(&'src str),

    /// Numeric token
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),
}

impl Token<'_> {
    /// Tokens that describe the quality tier, including audio, HDR and
    /// re-release noise that is claimed but not modelled.
    pub fn is_quality(&self) -> bool {
        matches!(
            self,
            Token::Resolution(_)
                | Token::Remux(_)
                | Token::BluRay(_)
                | Token::WebDl(_)
                | Token::WebRip(_)
                | Token::Tv(_)
                | Token::Dvd(_)
                | Token::Cam(_)
                | Token::Telesync(_)
                | Token::Telecine(_)
                | Token::Screener(_)
                | Token::CodecH264(_)
                | Token::CodecH265(_)
                | Token::CodecXvid(_)
                | Token::CodecDivx(_)
                | Token::CodecAv1(_)
                | Token::CodecVp9(_)
                | Token::CodecMpeg2(_)
                | Token::Audio(_)
                | Token::Channels(_)
                | Token::BitDepth(_)
                | Token::Hdr(_)
                | Token::Proper(_)
                | Token::Repack(_)
                | Token::Real
                | Token::Version(_)
        )
    }

    /// Season/episode markers.
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            Token::SeasonEpisode(_) | Token::SeasonEpisodeX(_) | Token::SeasonOnly(_)
        )
    }

    /// Delimiters and brackets.
    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            Token::Dot
                | Token::Hyphen
                | Token::BracketOpen
                | Token::BracketClose
                | Token::ParenOpen
                | Token::ParenClose
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Token::lexer(input).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_compound_audio_is_one_token() {
        assert_eq!(
            lex("DTS-X.MA.5.1"),
            vec![Token::Audio("DTS-X.MA"), Token::Dot, Token::Channels("5.1")]
        );
        assert_eq!(lex("DDP5.1"), vec![Token::Audio("DDP5.1")]);
        assert_eq!(lex("AAC2.0"), vec![Token::Audio("AAC2.0")]);
    }

    #[test]
    fn test_keyword_needs_whole_word() {
        assert_eq!(lex("HDTVRip"), vec![Token::Word("HDTVRip")]);
        assert_eq!(lex("Blu-bits"), vec![Token::Word("Blu"), Token::Hyphen, Token::Word("bits")]);
    }

    #[test]
    fn test_case_sensitive_short_markers() {
        assert_eq!(lex("REAL"), vec![Token::Real]);
        assert_eq!(lex("Real"), vec![Token::Word("Real")]);
        assert_eq!(lex("CAM"), vec![Token::Cam("CAM")]);
        assert_eq!(lex("Cam"), vec![Token::Word("Cam")]);
    }

    #[test]
    fn test_season_episode_vs_word() {
        assert_eq!(lex("S01E14"), vec![Token::SeasonEpisode("S01E14")]);
        assert_eq!(lex("10x11"), vec![Token::SeasonEpisodeX("10x11")]);
        assert_eq!(lex("2HD"), vec![Token::Word("2HD")]);
    }

    #[test]
    fn test_year_and_numbers() {
        assert_eq!(lex("2019"), vec![Token::Year("2019")]);
        assert_eq!(lex("264"), vec![Token::Number("264")]);
        assert_eq!(lex("1080p"), vec![Token::Resolution("1080p")]);
    }

    #[test]
    fn test_classification_helpers() {
        assert!(Token::Audio("AAC").is_quality());
        assert!(Token::Real.is_quality());
        assert!(Token::SeasonOnly("S01").is_marker());
        assert!(Token::ParenClose.is_separator());
        assert!(!Token::Word("Group").is_quality());
    }
}
