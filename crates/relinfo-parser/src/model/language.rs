//! Language enum for audio tracks declared in a release name.

use super::ParseError;

/// Audio language of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English (en)
    English,
    /// French (fr)
    French,
    /// German (de)
    German,
    /// Spanish (es)
    Spanish,
    /// Catalan (ca)
    Catalan,
    /// Italian (it)
    Italian,
    /// Portuguese (pt)
    Portuguese,
    /// Russian (ru)
    Russian,
    /// Japanese (ja)
    Japanese,
    /// Korean (ko)
    Korean,
    /// Chinese (zh) - generic
    Chinese,
    /// Mandarin Chinese (cmn)
    Mandarin,
    /// Cantonese Chinese (yue)
    Cantonese,
    /// Arabic (ar)
    Arabic,
    /// Hindi (hi)
    Hindi,
    /// Turkish (tr)
    Turkish,
    /// Polish (pl)
    Polish,
    /// Dutch (nl)
    Dutch,
    /// Flemish (nl-BE)
    Flemish,
    /// Swedish (sv)
    Swedish,
    /// Norwegian (no)
    Norwegian,
    /// Danish (da)
    Danish,
    /// Finnish (fi)
    Finnish,
    /// Icelandic (is)
    Icelandic,
    /// Czech (cs)
    Czech,
    /// Hungarian (hu)
    Hungarian,
    /// Romanian (ro)
    Romanian,
    /// Bulgarian (bg)
    Bulgarian,
    /// Greek (el)
    Greek,
    /// Hebrew (he)
    Hebrew,
    /// Thai (th)
    Thai,
    /// Vietnamese (vi)
    Vietnamese,
    /// Indonesian (id)
    Indonesian,
    /// Ukrainian (uk)
    Ukrainian,
    /// Croatian (hr)
    Croatian,
    /// Serbian (sr)
    Serbian,
    /// Slovak (sk)
    Slovak,
    /// Lithuanian (lt)
    Lithuanian,
    /// Latvian (lv)
    Latvian,
    /// Estonian (et)
    Estonian,
    /// Persian (fa)
    Persian,
    /// Tamil (ta)
    Tamil,
    /// Telugu (te)
    Telugu,
    /// Several audio languages (MULTi releases)
    Multi,
}

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 44] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Catalan,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
        Language::Mandarin,
        Language::Cantonese,
        Language::Arabic,
        Language::Hindi,
        Language::Turkish,
        Language::Polish,
        Language::Dutch,
        Language::Flemish,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Icelandic,
        Language::Czech,
        Language::Hungarian,
        Language::Romanian,
        Language::Bulgarian,
        Language::Greek,
        Language::Hebrew,
        Language::Thai,
        Language::Vietnamese,
        Language::Indonesian,
        Language::Ukrainian,
        Language::Croatian,
        Language::Serbian,
        Language::Slovak,
        Language::Lithuanian,
        Language::Latvian,
        Language::Estonian,
        Language::Persian,
        Language::Tamil,
        Language::Telugu,
        Language::Multi,
    ];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Catalan => "Catalan",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
            Language::Mandarin => "Mandarin",
            Language::Cantonese => "Cantonese",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
            Language::Turkish => "Turkish",
            Language::Polish => "Polish",
            Language::Dutch => "Dutch",
            Language::Flemish => "Flemish",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Danish => "Danish",
            Language::Finnish => "Finnish",
            Language::Icelandic => "Icelandic",
            Language::Czech => "Czech",
            Language::Hungarian => "Hungarian",
            Language::Romanian => "Romanian",
            Language::Bulgarian => "Bulgarian",
            Language::Greek => "Greek",
            Language::Hebrew => "Hebrew",
            Language::Thai => "Thai",
            Language::Vietnamese => "Vietnamese",
            Language::Indonesian => "Indonesian",
            Language::Ukrainian => "Ukrainian",
            Language::Croatian => "Croatian",
            Language::Serbian => "Serbian",
            Language::Slovak => "Slovak",
            Language::Lithuanian => "Lithuanian",
            Language::Latvian => "Latvian",
            Language::Estonian => "Estonian",
            Language::Persian => "Persian",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Multi => "Multi",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;

    /// Accepts the English name or the ISO 639-1 code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if let Some(lang) = Language::ALL
            .iter()
            .find(|l| l.to_string().to_lowercase() == lower)
        {
            return Ok(*lang);
        }
        match lower.as_str() {
            "en" => Ok(Language::English),
            "fr" => Ok(Language::French),
            "de" => Ok(Language::German),
            "es" => Ok(Language::Spanish),
            "ca" => Ok(Language::Catalan),
            "it" => Ok(Language::Italian),
            "pt" => Ok(Language::Portuguese),
            "ru" => Ok(Language::Russian),
            "ja" => Ok(Language::Japanese),
            "ko" => Ok(Language::Korean),
            "zh" => Ok(Language::Chinese),
            "ar" => Ok(Language::Arabic),
            "hi" => Ok(Language::Hindi),
            "tr" => Ok(Language::Turkish),
            "pl" => Ok(Language::Polish),
            "nl" => Ok(Language::Dutch),
            "sv" => Ok(Language::Swedish),
            "no" => Ok(Language::Norwegian),
            "da" => Ok(Language::Danish),
            "fi" => Ok(Language::Finnish),
            "is" => Ok(Language::Icelandic),
            "cs" => Ok(Language::Czech),
            "hu" => Ok(Language::Hungarian),
            "ro" => Ok(Language::Romanian),
            "bg" => Ok(Language::Bulgarian),
            "el" => Ok(Language::Greek),
            "he" => Ok(Language::Hebrew),
            "th" => Ok(Language::Thai),
            "vi" => Ok(Language::Vietnamese),
            "id" => Ok(Language::Indonesian),
            "uk" => Ok(Language::Ukrainian),
            "hr" => Ok(Language::Croatian),
            "sr" => Ok(Language::Serbian),
            "sk" => Ok(Language::Slovak),
            "lt" => Ok(Language::Lithuanian),
            "lv" => Ok(Language::Latvian),
            "et" => Ok(Language::Estonian),
            "fa" => Ok(Language::Persian),
            "ta" => Ok(Language::Tamil),
            "te" => Ok(Language::Telugu),
            _ => Err(ParseError(format!("invalid language: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_display_fromstr_roundtrip() {
        for variant in Language::ALL {
            let s = variant.to_string();
            let parsed: Language = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn language_iso_codes() {
        assert_eq!("en".parse::<Language>().ok(), Some(Language::English));
        assert_eq!("FR".parse::<Language>().ok(), Some(Language::French));
        assert_eq!("de".parse::<Language>().ok(), Some(Language::German));
        assert_eq!("ja".parse::<Language>().ok(), Some(Language::Japanese));
        assert!("klingon".parse::<Language>().is_err());
    }
}
