//! One-call conversions from song XML text
//!
//! Each helper parses the input and runs one exporter, so callers that
//! only hold XML text never touch the tree.

use crate::errors::SongError;
use crate::parse::parse_song;
use crate::renderers::{to_html, to_print_html, to_xml, PrintOptions};

/// Parse and re-serialize song XML in canonical form
pub fn canonicalize_xml(xml: &str) -> Result<String, SongError> {
    let song = parse_song(xml)?;
    Ok(to_xml(&song)?)
}

/// Song XML to screen HTML
pub fn xml_to_html(xml: &str) -> Result<String, SongError> {
    let song = parse_song(xml)?;
    Ok(to_html(&song)?)
}

/// Song XML to a complete print HTML document
pub fn xml_to_print_html(xml: &str, options: &PrintOptions) -> Result<String, SongError> {
    let song = parse_song(xml)?;
    Ok(to_print_html(&song, options)?)
}
