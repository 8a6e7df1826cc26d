//! Song document model
//!
//! Immutable tree of typed nodes: [`Song`] holds [`SongInfo`] metadata and
//! [`SongLyrics`], which nests strophes, paragraphs, verses, chords, text
//! and repeats.

pub mod nodes;
pub mod song;

pub use nodes::{
    Chord, Level, Node, Paragraph, Repeat, Strophe, StropheId, StropheReference, Text, Verse,
    DEFAULT_REPEAT_COUNT,
};
pub use song::{Song, SongInfo, SongLyrics, SongLyricsBuilder};
