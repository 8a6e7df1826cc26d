//! Song XML parsing
//!
//! Turns a `<song>` document into a validated [`Song`] tree. Parsing is
//! all-or-nothing: the first problem found aborts with a [`ParseError`].

pub mod document;
pub mod info;
pub mod lyrics;

use crate::errors::ParseError;
use crate::models::Song;
use document::{get_child, XmlDocument};

/// Parse song XML text into a [`Song`]
pub fn parse_song(xml: &str) -> Result<Song, ParseError> {
    let doc = XmlDocument::parse(xml)?;
    let song = doc.song()?;

    let info = info::parse_info(song)?;
    let element = get_child(song, "lyrics")
        .ok_or_else(|| ParseError::schema("song", "missing <lyrics> element"))?;
    let lyrics = lyrics::parse_lyrics(element)?;

    log::debug!(
        "parsed song \"{}\" with {} top-level lyrics nodes",
        info.title(),
        lyrics.nodes().len()
    );

    Ok(Song::new(info, lyrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_song() {
        let song = parse_song("<song><info><title>t</title></info><lyrics/></song>").unwrap();
        assert_eq!(song.info().title(), "t");
        assert!(song.lyrics().is_empty());
    }

    #[test]
    fn test_missing_lyrics() {
        let err = parse_song("<song><info><title>t</title></info></song>").unwrap_err();
        assert!(matches!(err, ParseError::SchemaViolation { ref element, .. } if element == "song"));
    }

    #[test]
    fn test_not_xml() {
        assert!(matches!(parse_song("not xml"), Err(ParseError::MalformedDocument(_))));
    }
}
