//! Quality tier of a release: source, resolution, codec and revision.

use super::ParseError;

/// Origin of the media in a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// No source token was found.
    #[default]
    Unknown,
    /// Camera recording from a theater.
    Cam,
    /// Telesync (audio from an external source).
    Telesync,
    /// Telecine (film reel transfer).
    Telecine,
    /// Screener copy.
    Screener,
    /// DVD rip.
    Dvd,
    /// Television capture (HDTV, PDTV, SDTV, DSR).
    Tv,
    /// Web rip (capture or re-encode from a streaming service).
    WebRip,
    /// Web download (untouched stream from a streaming service).
    WebDl,
    /// Blu-ray encode.
    BluRay,
    /// Lossless disc remux.
    Remux,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Unknown => write!(f, "Unknown"),
            Source::Cam => write!(f, "CAM"),
            Source::Telesync => write!(f, "TELESYNC"),
            Source::Telecine => write!(f, "TELECINE"),
            Source::Screener => write!(f, "SCREENER"),
            Source::Dvd => write!(f, "DVD"),
            Source::Tv => write!(f, "TV"),
            Source::WebRip => write!(f, "WEBRip"),
            Source::WebDl => write!(f, "WEB-DL"),
            Source::BluRay => write!(f, "BluRay"),
            Source::Remux => write!(f, "Remux"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Source::Unknown),
            "cam" | "camrip" | "hdcam" => Ok(Source::Cam),
            "telesync" | "ts" | "hdts" => Ok(Source::Telesync),
            "telecine" | "tc" => Ok(Source::Telecine),
            "screener" | "scr" | "dvdscr" => Ok(Source::Screener),
            "dvd" | "dvdrip" => Ok(Source::Dvd),
            "tv" | "hdtv" | "pdtv" | "sdtv" => Ok(Source::Tv),
            "webrip" | "web-rip" => Ok(Source::WebRip),
            "web-dl" | "webdl" | "web" => Ok(Source::WebDl),
            "bluray" | "blu-ray" | "bdrip" | "brrip" => Ok(Source::BluRay),
            "remux" => Ok(Source::Remux),
            _ => Err(ParseError(format!("invalid source: {}", s))),
        }
    }
}

/// Vertical resolution tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// No resolution token was found.
    #[default]
    Unknown,
    /// Standard definition below 480 lines (360p and friends).
    Sd,
    /// 480p
    R480p,
    /// 576p (PAL)
    R576p,
    /// 720p
    R720p,
    /// 1080p
    R1080p,
    /// 2160p / 4K / UHD
    R2160p,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Unknown => write!(f, "Unknown"),
            Resolution::Sd => write!(f, "SD"),
            Resolution::R480p => write!(f, "480p"),
            Resolution::R576p => write!(f, "576p"),
            Resolution::R720p => write!(f, "720p"),
            Resolution::R1080p => write!(f, "1080p"),
            Resolution::R2160p => write!(f, "2160p"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Resolution::Unknown),
            "sd" | "360p" | "360i" => Ok(Resolution::Sd),
            "480p" | "480i" => Ok(Resolution::R480p),
            "576p" | "576i" => Ok(Resolution::R576p),
            "720p" | "1280x720" => Ok(Resolution::R720p),
            "1080p" | "1080i" | "1920x1080" => Ok(Resolution::R1080p),
            "2160p" | "4k" | "uhd" | "3840x2160" => Ok(Resolution::R2160p),
            _ => Err(ParseError(format!("invalid resolution: {}", s))),
        }
    }
}

/// Video codec family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VideoCodec {
    /// No codec token was found.
    #[default]
    Unknown,
    /// H.264 / AVC
    X264,
    /// H.265 / HEVC
    X265,
    /// XviD (MPEG-4 Part 2)
    XviD,
    /// DivX (MPEG-4 Part 2)
    DivX,
    /// AV1
    Av1,
    /// VP9
    Vp9,
    /// MPEG-2
    Mpeg2,
}

impl std::fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoCodec::Unknown => write!(f, "Unknown"),
            VideoCodec::X264 => write!(f, "x264"),
            VideoCodec::X265 => write!(f, "x265"),
            VideoCodec::XviD => write!(f, "XviD"),
            VideoCodec::DivX => write!(f, "DivX"),
            VideoCodec::Av1 => write!(f, "AV1"),
            VideoCodec::Vp9 => write!(f, "VP9"),
            VideoCodec::Mpeg2 => write!(f, "MPEG2"),
        }
    }
}

impl std::str::FromStr for VideoCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(VideoCodec::Unknown),
            "x264" | "h264" | "h.264" | "avc" => Ok(VideoCodec::X264),
            "x265" | "h265" | "h.265" | "hevc" => Ok(VideoCodec::X265),
            "xvid" => Ok(VideoCodec::XviD),
            "divx" => Ok(VideoCodec::DivX),
            "av1" => Ok(VideoCodec::Av1),
            "vp9" => Ok(VideoCodec::Vp9),
            "mpeg2" | "mpeg-2" => Ok(VideoCodec::Mpeg2),
            _ => Err(ParseError(format!("invalid video codec: {}", s))),
        }
    }
}

/// Re-release markers.
///
/// `proper`, `repack` and `real` are independent flags; `version` is the
/// effective release version (1 for a first release).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Revision {
    /// A PROPER tag was present.
    pub proper: bool,
    /// A REPACK or RERIP tag was present.
    pub repack: bool,
    /// An upper-case REAL tag was present.
    pub real: bool,
    /// Release version (default 1).
    pub version: u8,
}

impl Default for Revision {
    fn default() -> Self {
        Self {
            proper: false,
            repack: false,
            real: false,
            version: 1,
        }
    }
}

impl Revision {
    /// Whether any re-release marker was seen.
    pub fn is_rerelease(&self) -> bool {
        self.proper || self.repack || self.real || self.version > 1
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.version)?;
        if self.real {
            write!(f, " REAL")?;
        }
        if self.proper {
            write!(f, " PROPER")?;
        }
        if self.repack {
            write!(f, " REPACK")?;
        }
        Ok(())
    }
}

/// Quality tier of a release.
///
/// Always populated; sub-fields that could not be determined stay
/// `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quality {
    /// Media source.
    pub source: Source,
    /// Resolution tier.
    pub resolution: Resolution,
    /// Video codec.
    pub codec: VideoCodec,
    /// Re-release markers.
    pub revision: Revision,
}

impl Quality {
    /// True when neither source, resolution nor codec is known.
    pub fn is_unknown(&self) -> bool {
        self.source == Source::Unknown
            && self.resolution == Resolution::Unknown
            && self.codec == VideoCodec::Unknown
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.source, self.resolution, self.codec, self.revision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_display_fromstr_roundtrip() {
        let variants = [
            Source::Unknown,
            Source::Cam,
            Source::Telesync,
            Source::Telecine,
            Source::Screener,
            Source::Dvd,
            Source::Tv,
            Source::WebRip,
            Source::WebDl,
            Source::BluRay,
            Source::Remux,
        ];
        for variant in variants {
            let s = variant.to_string();
            let parsed: Source = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn resolution_display_fromstr_roundtrip() {
        let variants = [
            Resolution::Unknown,
            Resolution::Sd,
            Resolution::R480p,
            Resolution::R576p,
            Resolution::R720p,
            Resolution::R1080p,
            Resolution::R2160p,
        ];
        for variant in variants {
            let s = variant.to_string();
            let parsed: Resolution = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn codec_display_fromstr_roundtrip() {
        let variants = [
            VideoCodec::Unknown,
            VideoCodec::X264,
            VideoCodec::X265,
            VideoCodec::XviD,
            VideoCodec::DivX,
            VideoCodec::Av1,
            VideoCodec::Vp9,
            VideoCodec::Mpeg2,
        ];
        for variant in variants {
            let s = variant.to_string();
            let parsed: VideoCodec = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn source_aliases() {
        assert_eq!("HDTV".parse::<Source>().ok(), Some(Source::Tv));
        assert_eq!("BDRip".parse::<Source>().ok(), Some(Source::BluRay));
        assert_eq!("web".parse::<Source>().ok(), Some(Source::WebDl));
        assert!("laserdisc".parse::<Source>().is_err());
    }

    #[test]
    fn resolution_orders_by_tier() {
        assert!(Resolution::R2160p > Resolution::R1080p);
        assert!(Resolution::Sd > Resolution::Unknown);
    }

    #[test]
    fn revision_default() {
        let rev = Revision::default();
        assert_eq!(rev.version, 1);
        assert!(!rev.is_rerelease());
        assert_eq!(rev.to_string(), "v1");
    }

    #[test]
    fn revision_display_flags() {
        let rev = Revision {
            proper: true,
            repack: false,
            real: true,
            version: 2,
        };
        assert_eq!(rev.to_string(), "v2 REAL PROPER");
    }

    #[test]
    fn quality_default_is_unknown() {
        let q = Quality::default();
        assert!(q.is_unknown());
        assert_eq!(q.revision.version, 1);
    }
}
