//! Print HTML markup
//!
//! Cells are inline blocks so a verse can wrap inside a narrow column;
//! text runs are split per word to give the wrapping something to work
//! with. A verse without any print-eligible chord has no chord lane.

use super::row::{cell_text, CellClass, Row, HARD_SPACE};
use super::HtmlFlavor;
use crate::errors::ExportError;
use crate::models::{Chord, SongInfo};
use crate::renderers::print::PrintOptions;
use quick_xml::escape::escape;

/// Markup for the typesetting backend
#[derive(Debug, Clone, Default)]
pub struct PrintFlavor {
    /// Show chords marked `print="false"` as well
    pub print_hidden_chords: bool,
    /// Extra lines under the title; the first one joins the author line
    pub metadata: Vec<String>,
    pub include_header: bool,
}

impl PrintFlavor {
    pub fn new(options: &PrintOptions, include_header: bool) -> Self {
        Self {
            print_hidden_chords: options.print_hidden_chords,
            metadata: options.metadata.clone(),
            include_header,
        }
    }
}

impl HtmlFlavor for PrintFlavor {
    fn renders_header(&self) -> bool {
        self.include_header
    }

    fn header(&self, info: &SongInfo) -> Result<String, ExportError> {
        Ok(header_html(info, &self.metadata))
    }

    fn includes_chord(&self, chord: &Chord) -> bool {
        chord.is_print() || self.print_hidden_chords
    }

    fn text_chunks(&self, text: &str) -> Vec<String> {
        split_words(text)
    }

    fn paragraph_start(&self) -> &'static str {
        r#"<div class="paragraph">"#
    }

    fn paragraph_end(&self) -> &'static str {
        "</div>"
    }

    fn row(&self, row: &Row) -> String {
        let chord_lane = row.has_chords();
        let mut html = String::from(r#"<div class="verse">"#);

        for cell in row.cells() {
            let mut text = cell_text(cell.text.as_deref().unwrap_or(""));
            let class = match cell.class {
                Some(class) => format!("cell {}", class.class_name()),
                None => "cell".to_string(),
            };
            html.push_str(&format!("<div class=\"{}\">", class));

            if chord_lane {
                let chord = cell.chord.as_deref().unwrap_or("");
                html.push_str(&format!("<span class=\"chord\">{}</span><br>", escape(chord)));
                // keep the column height when a chord has nothing under it
                if !chord.is_empty() && text.is_empty() {
                    text.push(HARD_SPACE);
                }
            }

            html.push_str(&format!("<span class=\"text\">{}</span></div>", text));
        }

        html.push_str("</div>");
        html
    }

    fn reference(&self, text: &str) -> String {
        format!(
            "<div class=\"paragraph\"><div class=\"verse\"><div class=\"cell\"><span class=\"chord\"></span><br><span class=\"text {}\">{}</span></div></div></div>",
            CellClass::StropheReference.class_name(),
            escape(text)
        )
    }
}

/// Header block: title, author line, remaining metadata lines
pub fn header_html(info: &SongInfo, metadata: &[String]) -> String {
    let mut html = String::from(r#"<div class="header">"#);
    html.push_str(&format!("<h1>{}</h1>", escape(info.title())));

    if let Some(author) = info.author() {
        let mut line = vec![author];
        if let Some(first) = metadata.first().filter(|first| !first.is_empty()) {
            line.push(first.as_str());
        }
        html.push_str(&format!(
            "<div class=\"author\">{}</div>",
            escape(&line.join(" "))
        ));
    }

    for meta in metadata.iter().skip(1) {
        html.push_str(&format!("<div class=\"meta\">{}</div>", escape(meta.as_str())));
    }

    html.push_str("</div>");
    html
}

/// Split on single spaces, keeping the space on every chunk but the last
fn split_words(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split(' ').collect();
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| if i < last { format!("{} ", part) } else { part.to_string() })
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
