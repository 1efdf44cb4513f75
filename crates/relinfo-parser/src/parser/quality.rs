//! Quality extraction: resolution, source, codec and revision flags.
//!
//! Every quality token is claimed, including audio, HDR and bit-depth
//! tokens that are not modelled, so later extractors never mistake the
//! internals of `DTS-X.MA` or `WEB-DL` for a title or group.

use super::claims::{ClaimKind, Claims};
use super::Input;
use crate::lexer::{Span, Token};
use crate::model::{Quality, Resolution, Source, VideoCodec};

pub(crate) fn extract(input: &Input<'_>, mut claims: Claims) -> (Quality, Claims) {
    let mut quality = Quality::default();
    let mut remux = false;
    let mut explicit_version: Option<u8> = None;
    let mut repack_number: Option<u8> = None;

    for (token, range) in input.tokens {
        let span = Span::from(range.clone());

        if let Token::SeasonEpisode(text) = token {
            // S01E12v2
            if explicit_version.is_none() {
                explicit_version = trailing_version(text);
            }
            continue;
        }
        if !token.is_quality() || claims.overlaps(span) {
            continue;
        }

        match token {
            Token::Resolution(text) => {
                if quality.resolution == Resolution::Unknown {
                    quality.resolution = resolution_of(text);
                }
            }
            Token::Remux(_) => remux = true,
            Token::CodecH264(_) => set_codec(&mut quality, VideoCodec::X264),
            Token::CodecH265(_) => set_codec(&mut quality, VideoCodec::X265),
            Token::CodecXvid(_) => set_codec(&mut quality, VideoCodec::XviD),
            Token::CodecDivx(_) => set_codec(&mut quality, VideoCodec::DivX),
            Token::CodecAv1(_) => set_codec(&mut quality, VideoCodec::Av1),
            Token::CodecVp9(_) => set_codec(&mut quality, VideoCodec::Vp9),
            Token::CodecMpeg2(_) => set_codec(&mut quality, VideoCodec::Mpeg2),
            Token::Proper(_) => quality.revision.proper = true,
            Token::Repack(text) => {
                quality.revision.repack = true;
                if repack_number.is_none() {
                    repack_number = trailing_number(text);
                }
            }
            Token::Real => quality.revision.real = true,
            Token::Version(text) => {
                if explicit_version.is_none() {
                    explicit_version = trailing_number(text);
                }
            }
            other => {
                if let Some(source) = source_of(other) {
                    if quality.source == Source::Unknown {
                        quality.source = source;
                    }
                }
            }
        }
        claims = claims.with(span, ClaimKind::Quality);
    }

    if remux {
        quality.source = Source::Remux;
    }

    let revision = &mut quality.revision;
    revision.version = explicit_version
        .or_else(|| repack_number.map(|n| n.saturating_add(1)))
        .unwrap_or(if revision.proper || revision.repack { 2 } else { 1 });

    (quality, claims)
}

fn set_codec(quality: &mut Quality, codec: VideoCodec) {
    if quality.codec == VideoCodec::Unknown {
        quality.codec = codec;
    }
}

fn source_of(token: &Token<'_>) -> Option<Source> {
    match token {
        Token::BluRay(_) => Some(Source::BluRay),
        Token::WebDl(_) => Some(Source::WebDl),
        Token::WebRip(_) => Some(Source::WebRip),
        Token::Tv(_) => Some(Source::Tv),
        Token::Dvd(_) => Some(Source::Dvd),
        Token::Cam(_) => Some(Source::Cam),
        Token::Telesync(_) => Some(Source::Telesync),
        Token::Telecine(_) => Some(Source::Telecine),
        Token::Screener(_) => Some(Source::Screener),
        _ => None,
    }
}

fn resolution_of(text: &str) -> Resolution {
    let lower = text.to_ascii_lowercase();
    if lower.starts_with("2160") || lower.starts_with("3840") || lower == "4k" || lower == "uhd" {
        Resolution::R2160p
    } else if lower.starts_with("1080") || lower.starts_with("1920") {
        Resolution::R1080p
    } else if lower.starts_with("720") || lower.starts_with("1280") {
        Resolution::R720p
    } else if lower.starts_with("576") {
        Resolution::R576p
    } else if lower.starts_with("480") {
        Resolution::R480p
    } else {
        Resolution::Sd
    }
}

fn trailing_number(text: &str) -> Option<u8> {
    let digits = text.trim_start_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

fn trailing_version(marker: &str) -> Option<u8> {
    let idx = marker.rfind(['v', 'V'])?;
    marker[idx + 1..].parse().ok()
}
