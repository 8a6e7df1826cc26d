//! Chord/lyric rows
//!
//! A row is the rendered form of one verse: a sequence of cells, each with
//! an optional chord above an optional piece of text. A chord always opens
//! a new cell and the text that follows fills it, which keeps every chord
//! in its own column above the word it belongs to.

use quick_xml::escape::escape;

/// Non-collapsing space used at the edges of a cell
pub const HARD_SPACE: char = '\u{a0}';

/// Special role of a text cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    RepeatMarker,
    StropheLabel,
    StropheReference,
}

impl CellClass {
    pub fn class_name(self) -> &'static str {
        match self {
            CellClass::RepeatMarker => "repeat-marker",
            CellClass::StropheLabel => "strophe-label",
            CellClass::StropheReference => "strophe-reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub chord: Option<String>,
    /// `None` until text is placed under a chord
    pub text: Option<String>,
    pub class: Option<CellClass>,
}

/// Cells of the verse being rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn has_chords(&self) -> bool {
        self.cells.iter().any(|cell| cell.chord.is_some())
    }

    pub fn push_chord(&mut self, name: &str) {
        self.cells.push(Cell {
            chord: Some(name.to_string()),
            text: None,
            class: None,
        });
    }

    /// Fill the text slot of a preceding chord, or start a text-only cell
    pub fn push_text(&mut self, text: &str) {
        match self.cells.last_mut() {
            Some(cell) if cell.text.is_none() => cell.text = Some(text.to_string()),
            _ => self.cells.push(Cell {
                chord: None,
                text: Some(text.to_string()),
                class: None,
            }),
        }
    }

    /// Chordless cell with a special role (label, repeat bracket)
    pub fn push_marker(&mut self, text: impl Into<String>, class: CellClass) {
        self.cells.push(Cell {
            chord: None,
            text: Some(text.into()),
            class: Some(class),
        });
    }

    /// Chord lane as plain strings, empty where a cell has no chord
    pub fn chord_lane(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.chord.as_deref().unwrap_or("")).collect()
    }

    /// Text lane as plain strings, empty where a cell has no text
    pub fn text_lane(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.text.as_deref().unwrap_or("")).collect()
    }
}

/// Escape cell text, turning one leading and one trailing space into
/// hard spaces so HTML whitespace collapsing keeps them
pub fn cell_text(text: &str) -> String {
    let (lead, rest) = match text.strip_prefix(' ') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (rest, trail) = match rest.strip_suffix(' ') {
        Some(rest) => (rest, true),
        None => (rest, false),
    };

    let mut out = String::with_capacity(text.len() + 4);
    if lead {
        out.push(HARD_SPACE);
    }
    out.push_str(&escape(rest));
    if trail {
        out.push(HARD_SPACE);
    }
    out
}
