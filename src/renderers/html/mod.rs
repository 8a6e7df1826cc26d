//! HTML export
//!
//! One state machine, two markup flavors: [`ScreenFlavor`] produces a
//! table-based fragment for display, [`PrintFlavor`] produces the markup
//! fed to a typesetting backend.
//!
//! ## Render state
//!
//! - `row`: cells of the verse being rendered, present only inside a verse
//! - `label`: label of the current strophe, consumed by its first verse
//! - `repeat`: count of a block repeat, consumed together with the label
//!   or by a strophe reference
//!
//! A repeat met inside a row renders as inline `[: ... :]` brackets. A
//! repeat met outside a row is a block repeat and must wrap exactly one
//! strophe, strophe reference or verse. A block-repeated verse without a
//! pending label is re-wrapped in an inline repeat, so bracket markers have
//! a single rendering path.

pub mod print;
pub mod row;
pub mod screen;
pub mod templates;

pub use print::PrintFlavor;
pub use row::{Cell, CellClass, Row};
pub use screen::ScreenFlavor;

use crate::errors::ExportError;
use crate::models::{
    Chord, Node, Paragraph, Repeat, Song, SongInfo, SongLyrics, Strophe, StropheReference, Text, Verse,
    DEFAULT_REPEAT_COUNT,
};
use crate::renderers::print::PrintOptions;
use crate::renderers::visitor::{walk_nodes, SongVisitor, VisitResult};

const REPEAT_START: &str = "[: ";
const REPEAT_END: &str = " :]";

/// Markup policy of an HTML renderer
pub trait HtmlFlavor {
    /// Whether the song header is rendered before the lyrics
    fn renders_header(&self) -> bool;

    /// Header markup for the song metadata
    fn header(&self, info: &SongInfo) -> Result<String, ExportError>;

    /// Whether a chord takes part in row layout
    fn includes_chord(&self, chord: &Chord) -> bool;

    /// Split a text run into the chunks that become cells
    fn text_chunks(&self, text: &str) -> Vec<String>;

    fn paragraph_start(&self) -> &'static str;

    fn paragraph_end(&self) -> &'static str;

    /// Markup for one finished verse row
    fn row(&self, row: &Row) -> String;

    /// Markup for a strophe reference with its formatted display text
    fn reference(&self, text: &str) -> String;
}

/// Pending state between visitor calls
#[derive(Debug, Default)]
pub struct RenderState {
    pub row: Option<Row>,
    pub label: Option<String>,
    pub repeat: Option<u32>,
}

/// HTML renderer parameterized by markup flavor
pub struct HtmlRenderer<F: HtmlFlavor> {
    flavor: F,
    state: RenderState,
    html: Vec<String>,
}

impl<F: HtmlFlavor> HtmlRenderer<F> {
    pub fn new(flavor: F) -> Self {
        Self {
            flavor,
            state: RenderState::default(),
            html: Vec::new(),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Concatenated markup produced so far
    pub fn finish(self) -> String {
        self.html.concat()
    }

    fn row_mut(&mut self, kind: &str) -> Result<&mut Row, ExportError> {
        self.state
            .row
            .as_mut()
            .ok_or_else(|| ExportError::UnsupportedStructure(format!("cannot render {} outside a verse", kind)))
    }
}

fn label_text(label: &str, repeat: Option<u32>) -> String {
    match repeat {
        Some(count) => format!("{} ({}×). ", label, count),
        None => format!("{}. ", label),
    }
}

fn reference_text(label: &str, repeat: Option<u32>) -> String {
    match repeat {
        Some(count) => format!("{}. {}×", label, count),
        None => format!("{}.", label),
    }
}

/// A block repeat may only wrap one strophe, strophe reference or verse
fn check_block_repeat(repeat: &Repeat) -> VisitResult {
    match repeat.nodes() {
        [Node::Strophe(_) | Node::StropheReference(_) | Node::Verse(_)] => Ok(()),
        nodes => Err(ExportError::UnsupportedStructure(format!(
            "only a single strophe, strophe reference or verse can be repeated as a block, found {}",
            describe(nodes)
        ))),
    }
}

fn describe(nodes: &[Node]) -> String {
    if nodes.is_empty() {
        return "nothing".into();
    }
    nodes.iter().map(Node::kind_name).collect::<Vec<_>>().join(", ")
}

impl<F: HtmlFlavor> SongVisitor for HtmlRenderer<F> {
    fn visit_song(&mut self, song: &Song) -> VisitResult {
        if self.flavor.renders_header() {
            song.info().accept(self)?;
        }
        song.lyrics().accept(self)
    }

    fn visit_song_info(&mut self, info: &SongInfo) -> VisitResult {
        let header = self.flavor.header(info)?;
        self.html.push(header);
        Ok(())
    }

    fn visit_song_lyrics(&mut self, lyrics: &SongLyrics) -> VisitResult {
        walk_nodes(lyrics.nodes(), self, lyrics)
    }

    fn visit_strophe(&mut self, strophe: &Strophe, scope: &SongLyrics) -> VisitResult {
        self.state.label = strophe.label().map(String::from);
        walk_nodes(strophe.nodes(), self, scope)?;
        self.state.label = None;
        Ok(())
    }

    fn visit_strophe_reference(&mut self, _reference: &StropheReference, target: &Strophe) -> VisitResult {
        let label = target.label().ok_or_else(|| {
            ExportError::UnsupportedOperation("cannot render a reference to an unlabeled strophe".into())
        })?;
        let text = reference_text(label, self.state.repeat.take());
        self.html.push(self.flavor.reference(&text));
        Ok(())
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph, scope: &SongLyrics) -> VisitResult {
        self.html.push(self.flavor.paragraph_start().to_string());
        walk_nodes(paragraph.nodes(), self, scope)?;
        self.html.push(self.flavor.paragraph_end().to_string());
        Ok(())
    }

    fn visit_verse(&mut self, verse: &Verse, scope: &SongLyrics) -> VisitResult {
        let mut row = Row::default();
        let wrapped: [Node; 1];

        let nodes: &[Node] = if let Some(label) = self.state.label.take() {
            row.push_marker(label_text(&label, self.state.repeat.take()), CellClass::StropheLabel);
            verse.nodes()
        } else if let Some(count) = self.state.repeat {
            wrapped = [Repeat::new(verse.nodes().to_vec(), count)?.into()];
            &wrapped
        } else {
            verse.nodes()
        };

        self.state.row = Some(row);
        walk_nodes(nodes, self, scope)?;

        let row = self.state.row.take().unwrap_or_default();
        log::debug!("rendered verse row with {} cells", row.cells().len());
        self.html.push(self.flavor.row(&row));
        Ok(())
    }

    fn visit_repeat(&mut self, repeat: &Repeat, scope: &SongLyrics) -> VisitResult {
        if self.state.row.is_some() {
            self.row_mut("repeat")?.push_marker(REPEAT_START, CellClass::RepeatMarker);
            walk_nodes(repeat.nodes(), self, scope)?;

            let end = match repeat.count() {
                DEFAULT_REPEAT_COUNT => REPEAT_END.to_string(),
                count => format!("{} {}×", REPEAT_END, count),
            };
            self.row_mut("repeat")?.push_marker(end, CellClass::RepeatMarker);
            return Ok(());
        }

        check_block_repeat(repeat)?;
        self.state.repeat = Some(repeat.count());
        walk_nodes(repeat.nodes(), self, scope)?;
        self.state.repeat = None;
        Ok(())
    }

    fn visit_chord(&mut self, chord: &Chord) -> VisitResult {
        let include = self.flavor.includes_chord(chord);
        let row = self.row_mut("chord")?;
        if include {
            row.push_chord(chord.name());
        }
        Ok(())
    }

    fn visit_text(&mut self, text: &Text) -> VisitResult {
        let chunks = self.flavor.text_chunks(text.content());
        let row = self.row_mut("text")?;
        for chunk in &chunks {
            row.push_text(chunk);
        }
        Ok(())
    }
}

/// Render song lyrics as a screen HTML fragment
pub fn to_html(song: &Song) -> Result<String, ExportError> {
    let mut renderer = HtmlRenderer::new(ScreenFlavor);
    song.accept(&mut renderer)?;
    let html = renderer.finish();
    log::info!("exported \"{}\" to HTML ({} bytes)", song.info().title(), html.len());
    Ok(html)
}

/// Render a complete print-ready HTML document including the header
pub fn to_print_html(song: &Song, options: &PrintOptions) -> Result<String, ExportError> {
    let body = print_body(song, options, true)?;
    templates::render_print_document(options.font_size, body)
}

/// Print markup of a song, with or without the header block
pub fn print_body(song: &Song, options: &PrintOptions, include_header: bool) -> Result<String, ExportError> {
    let flavor = PrintFlavor::new(options, include_header);
    let mut renderer = HtmlRenderer::new(flavor);
    song.accept(&mut renderer)?;
    Ok(renderer.finish())
}
