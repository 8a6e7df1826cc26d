//! `<info>` element parsing

use super::document::{get_child, get_child_text};
use crate::errors::ParseError;
use crate::models::SongInfo;
use roxmltree::Node;

/// Parse song metadata from the `<song>` element.
///
/// Requires a non-empty `<title>`; an empty `<author>` counts as absent.
pub fn parse_info(song: Node) -> Result<SongInfo, ParseError> {
    let info = get_child(song, "info")
        .ok_or_else(|| ParseError::schema("song", "missing <info> element"))?;

    let title = get_child_text(info, "title").unwrap_or_default();
    if title.is_empty() {
        return Err(ParseError::schema("info", "missing or empty <title> element"));
    }

    let author = get_child_text(info, "author").filter(|author| !author.is_empty());

    Ok(SongInfo::new(title, author)?)
}
