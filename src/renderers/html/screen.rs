//! Screen HTML markup
//!
//! Each verse becomes a two-row table (chords above text), paragraphs are
//! wrapped in `<div class="song-paragraph">`. No header is rendered.

use super::row::{cell_text, CellClass, Row};
use super::HtmlFlavor;
use crate::errors::ExportError;
use crate::models::{Chord, SongInfo};
use quick_xml::escape::escape;

const PARAGRAPH_CLASS: &str = "song-paragraph";
const CHORD_CLASS: &str = "chord";

/// Table-based markup for on-screen display
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenFlavor;

impl HtmlFlavor for ScreenFlavor {
    fn renders_header(&self) -> bool {
        false
    }

    fn header(&self, _info: &SongInfo) -> Result<String, ExportError> {
        Err(ExportError::UnsupportedOperation(
            "screen HTML does not render song info".into(),
        ))
    }

    fn includes_chord(&self, _chord: &Chord) -> bool {
        true
    }

    fn text_chunks(&self, text: &str) -> Vec<String> {
        vec![text.to_string()]
    }

    fn paragraph_start(&self) -> &'static str {
        r#"<div class="song-paragraph">"#
    }

    fn paragraph_end(&self) -> &'static str {
        "</div>"
    }

    fn row(&self, row: &Row) -> String {
        let mut chords = String::from("<tr>");
        let mut text = String::from("<tr>");

        for cell in row.cells() {
            chords.push_str(&format!(
                "<td class=\"{}\">{}</td>",
                CHORD_CLASS,
                escape(cell.chord.as_deref().unwrap_or(""))
            ));
            text.push_str(&format!(
                "<td{}>{}</td>",
                class_attribute(cell.class),
                cell_text(cell.text.as_deref().unwrap_or(""))
            ));
        }

        format!("<table><tbody>{}</tr>{}</tr></tbody></table>", chords, text)
    }

    fn reference(&self, text: &str) -> String {
        format!(
            "<div class=\"{}\"><table><tbody><tr><td class=\"{}\"></td></tr><tr><td class=\"{}\">{}</td></tr></tbody></table></div>",
            PARAGRAPH_CLASS,
            CHORD_CLASS,
            CellClass::StropheReference.class_name(),
            escape(text)
        )
    }
}

fn class_attribute(class: Option<CellClass>) -> String {
    match class {
        Some(class) => format!(" class=\"{}\"", escape(class.class_name())),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_markup() {
        let mut row = Row::default();
        row.push_chord("D");
        row.push_text("a ");
        row.push_marker("[: ", CellClass::RepeatMarker);
        assert_eq!(
            ScreenFlavor.row(&row),
            "<table><tbody><tr><td class=\"chord\">D</td><td class=\"chord\"></td></tr>\
             <tr><td>a\u{a0}</td><td class=\"repeat-marker\">[:\u{a0}</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_chord_without_text() {
        let mut row = Row::default();
        row.push_chord("A7");
        assert_eq!(
            ScreenFlavor.row(&row),
            "<table><tbody><tr><td class=\"chord\">A7</td></tr><tr><td></td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_header_unsupported() {
        let info = SongInfo::new("t", None).unwrap();
        assert!(matches!(ScreenFlavor.header(&info), Err(ExportError::UnsupportedOperation(_))));
    }
}
