//! Built-in vocabulary.
//!
//! Plain data only; [`RuleSet::builtin`](super::RuleSet::builtin) turns the
//! lists into an editable rule set and the language maps are consulted
//! directly by [`RuleTable::language`](super::RuleTable::language).

use crate::model::Language;
use phf::phf_map;

/// Trailing `-segment` tags added by reposters and indexers.
pub(crate) const REPOST_SUFFIXES: &[&str] = &[
    "RP",
    "NZBGeek",
    "Obfuscated",
    "Obfuscation",
    "Scrambled",
    "sample",
    "Pre",
    "postbot",
    "xpost",
    "WhiteRev",
    "BUYMORE",
    "AsRequested",
    "AlternativeToRequested",
    "GEROV",
    "Z0iDS3N",
    "Chamele0n",
    "4P",
    "4Planet",
    "AlteZachen",
    "RePACKPOST",
];

/// Repost suffix patterns, matched against the whole segment, case-insensitively.
pub(crate) const REPOST_PATTERNS: &[&str] = &[r"Rakuv[a-z0-9]*", r"[0-9]{1,2}"];

/// Bracketed site tags appended to release names.
pub(crate) const WATERMARK_TAGS: &[&str] = &[
    "eztv",
    "ettv",
    "rartv",
    "rarbg",
    "rarbg.com",
    "cttv",
    "publichd",
    "eztv.re",
    "eztv.io",
    "torrentgalaxy",
    "tgx",
];

/// Words that sit where a group would but never name one.
pub(crate) const NON_GROUP_TERMS: &[&str] = &[
    "es",
    "en",
    "cat",
    "eng",
    "jap",
    "ger",
    "fra",
    "fre",
    "ita",
    "extended",
    "proper",
    "repack",
    "internal",
    "multi",
    "dual",
    "dubbed",
    "subbed",
    "subs",
    "sample",
    "complete",
    "limited",
    "unrated",
    "uncut",
    "remastered",
    "retail",
    "readnfo",
    "nfofix",
    "dirfix",
    "hc",
    "hardcoded",
    "audio",
    "web",
    "dl",
    "rip",
    "sdr",
];

/// Groups whose names break the hyphen or bracket conventions, matched
/// case-sensitively as whole words anywhere in the title.
pub(crate) const KNOWN_GROUPS: &[&str] = &[
    "D-Z0N3",
    "Fight-BB",
    "VARYG",
    "E.N.D",
    "KRaLiMaRKo",
    "BluDragon",
    "DarQ",
    "KCRT",
    "BEN THE MEN",
    "TAoE",
    "126811",
];

/// Groups that sign as the last word of a trailing bracketed quality block,
/// as in `(1080p BluRay x265 HEVC 10bit AAC 5.1 Tigole)`.
pub(crate) const BRACKET_TAIL_GROUPS: &[&str] = &[
    "Silence",
    "afm72",
    "Panda",
    "Ghost",
    "MONOLITH",
    "Tigole",
    "Joy",
    "ImE",
    "UTR",
    "t3nzin",
    "Anime Time",
    "Project Angel",
    "Hakata Ghost",
    "HONE",
    "Vyndros",
    "SEV",
    "Garshasp",
    "Kappa",
    "Natty",
    "RCVR",
    "SAMPA",
    "YOGI",
    "r00t",
    "EDITH",
    "BiTOR",
    "Q22",
    "Bandi",
    "RZeroX",
    "FreetheFish",
    "Anna",
    "Qman",
    "theincognito",
    "HDO",
    "DusIctv",
    "DHD",
    "CtrlHD",
    "ADC",
    "XZVN",
    "RH",
    "Kametsu",
];

/// Edition patterns and their canonical labels, in precedence order.
pub(crate) const EDITIONS: &[(&str, &str)] = &[
    (r"(?i)\bdirector'?s[ .]?cut\b", "Director's Cut"),
    (r"(?i)\bextended(?:[ .](?:cut|edition|version))?\b", "Extended"),
    (r"(?i)\bcollector'?s(?:[ .]edition)?\b", "Collector's Edition"),
    (r"(?i)\btheatrical(?:[ .](?:cut|edition|version))?\b", "Theatrical"),
    (r"(?i)\bultimate[ .](?:cut|edition)\b", "Ultimate Edition"),
    (r"(?i)\bspecial[ .]edition\b", "Special Edition"),
    (r"(?i)\bfinal[ .]cut\b", "Final Cut"),
    (
        r"(?i)\b(?:[0-9]{1,3}(?:st|nd|rd|th)[ .])?anniversary(?:[ .]edition)?\b",
        "Anniversary Edition",
    ),
    (r"(?i)\bcriterion(?:[ .]collection)?\b", "Criterion"),
    (r"(?i)\bunrated\b", "Unrated"),
    (r"(?i)\buncut\b", "Uncut"),
    (r"(?i)\buncensored\b", "Uncensored"),
    (r"(?i)\bremastered\b", "Remastered"),
    (r"(?i)\brestored\b", "Restored"),
    (r"(?i)\bimax\b", "IMAX"),
    (r"(?i)\bopen[ .]matte\b", "Open Matte"),
    (r"(?i)\bfan[ .]edit\b", "Fan Edit"),
];

/// Leading website watermark such as `[ www.example.com ] - ` or `www.site.org - `.
pub(crate) const WEBSITE_PREFIX: &str = r"(?i)^(?:\[\s*(?:www\.)?[-a-z0-9]{1,256}(?:\.[-a-z0-9]{1,256})*\.[a-z]{2,6}\s*\]|www\.[-a-z0-9]{1,256}(?:\.[-a-z0-9]{1,256})*\.[a-z]{2,6}\b)[\s.-]*";

/// Trailing file extension.
pub(crate) const CONTAINER_SUFFIX: &str = r"(?i)\.(mkv|mp4|m4v|avi|wmv|mov|mpg|mpeg|webm|flv|divx|ogm|m2ts|vob|iso|img|nzb|torrent|rar|par2)$";

/// Trailing `[tag]` with any joining hyphen or whitespace.
pub(crate) const TRAILING_TAG: &str = r"[\s-]*\[([^\[\]]*)\]\s*$";

/// Bracketed 8-hex CRC32 tag.
pub(crate) const HASH_TAG: &str = r"[\[(]([0-9A-Fa-f]{8})[\])]";

/// Language names and native spellings, keyed in lower case.
pub(crate) static LANGUAGE_NAMES: phf::Map<&'static str, Language> = phf_map! {
    "english" => Language::English,
    "french" => Language::French,
    "francais" => Language::French,
    "truefrench" => Language::French,
    "vostfr" => Language::French,
    "german" => Language::German,
    "deutsch" => Language::German,
    "spanish" => Language::Spanish,
    "espanol" => Language::Spanish,
    "castellano" => Language::Spanish,
    "latino" => Language::Spanish,
    "catalan" => Language::Catalan,
    "italian" => Language::Italian,
    "italiano" => Language::Italian,
    "portuguese" => Language::Portuguese,
    "portugues" => Language::Portuguese,
    "brazilian" => Language::Portuguese,
    "russian" => Language::Russian,
    "japanese" => Language::Japanese,
    "korean" => Language::Korean,
    "chinese" => Language::Chinese,
    "mandarin" => Language::Mandarin,
    "cantonese" => Language::Cantonese,
    "arabic" => Language::Arabic,
    "hindi" => Language::Hindi,
    "turkish" => Language::Turkish,
    "polish" => Language::Polish,
    "polski" => Language::Polish,
    "dutch" => Language::Dutch,
    "nederlands" => Language::Dutch,
    "flemish" => Language::Flemish,
    "swedish" => Language::Swedish,
    "svenska" => Language::Swedish,
    "norwegian" => Language::Norwegian,
    "norsk" => Language::Norwegian,
    "danish" => Language::Danish,
    "dansk" => Language::Danish,
    "finnish" => Language::Finnish,
    "suomi" => Language::Finnish,
    "icelandic" => Language::Icelandic,
    "czech" => Language::Czech,
    "hungarian" => Language::Hungarian,
    "romanian" => Language::Romanian,
    "bulgarian" => Language::Bulgarian,
    "greek" => Language::Greek,
    "hebrew" => Language::Hebrew,
    "thai" => Language::Thai,
    "vietnamese" => Language::Vietnamese,
    "indonesian" => Language::Indonesian,
    "ukrainian" => Language::Ukrainian,
    "croatian" => Language::Croatian,
    "serbian" => Language::Serbian,
    "slovak" => Language::Slovak,
    "lithuanian" => Language::Lithuanian,
    "latvian" => Language::Latvian,
    "estonian" => Language::Estonian,
    "persian" => Language::Persian,
    "farsi" => Language::Persian,
    "tamil" => Language::Tamil,
    "telugu" => Language::Telugu,
    "multi" => Language::Multi,
};

/// Short language codes. Case-sensitive: only the upper-case scene
/// spelling counts, so `Ita` or `ger` in a title stay words.
pub(crate) static LANGUAGE_CODES: phf::Map<&'static str, Language> = phf_map! {
    "ENG" => Language::English,
    "FRE" => Language::French,
    "FRA" => Language::French,
    "VFF" => Language::French,
    "VFQ" => Language::French,
    "GER" => Language::German,
    "DEU" => Language::German,
    "SPA" => Language::Spanish,
    "ESP" => Language::Spanish,
    "CAT" => Language::Catalan,
    "ITA" => Language::Italian,
    "POR" => Language::Portuguese,
    "RUS" => Language::Russian,
    "JAP" => Language::Japanese,
    "JPN" => Language::Japanese,
    "KOR" => Language::Korean,
    "CHI" => Language::Chinese,
    "CHN" => Language::Chinese,
    "ARA" => Language::Arabic,
    "HIN" => Language::Hindi,
    "TUR" => Language::Turkish,
    "POL" => Language::Polish,
    "DUT" => Language::Dutch,
    "NLD" => Language::Dutch,
    "SWE" => Language::Swedish,
    "NOR" => Language::Norwegian,
    "DAN" => Language::Danish,
    "FIN" => Language::Finnish,
    "CZE" => Language::Czech,
    "HUN" => Language::Hungarian,
    "ROM" => Language::Romanian,
    "RUM" => Language::Romanian,
    "BUL" => Language::Bulgarian,
    "GRE" => Language::Greek,
    "HEB" => Language::Hebrew,
    "UKR" => Language::Ukrainian,
    "MULTi" => Language::Multi,
};
