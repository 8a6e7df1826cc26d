//! Export visitor protocol
//!
//! Every renderer implements [`SongVisitor`]; nodes dispatch to the matching
//! handler through `accept`. Strophe references are resolved against the
//! owning [`SongLyrics`] before dispatch, so handlers receive the target
//! strophe directly.

use crate::errors::ExportError;
use crate::models::{
    Chord, Node, Paragraph, Repeat, Song, SongInfo, SongLyrics, Strophe, StropheReference, Text, Verse,
};

pub type VisitResult = Result<(), ExportError>;

/// One handler per node kind
pub trait SongVisitor {
    fn visit_song(&mut self, song: &Song) -> VisitResult;
    fn visit_song_info(&mut self, info: &SongInfo) -> VisitResult;
    fn visit_song_lyrics(&mut self, lyrics: &SongLyrics) -> VisitResult;
    fn visit_strophe(&mut self, strophe: &Strophe, scope: &SongLyrics) -> VisitResult;
    fn visit_strophe_reference(&mut self, reference: &StropheReference, target: &Strophe) -> VisitResult;
    fn visit_paragraph(&mut self, paragraph: &Paragraph, scope: &SongLyrics) -> VisitResult;
    fn visit_verse(&mut self, verse: &Verse, scope: &SongLyrics) -> VisitResult;
    fn visit_repeat(&mut self, repeat: &Repeat, scope: &SongLyrics) -> VisitResult;
    fn visit_chord(&mut self, chord: &Chord) -> VisitResult;
    fn visit_text(&mut self, text: &Text) -> VisitResult;
}

impl Song {
    pub fn accept<V: SongVisitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        visitor.visit_song(self)
    }
}

impl SongInfo {
    pub fn accept<V: SongVisitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        visitor.visit_song_info(self)
    }
}

impl SongLyrics {
    pub fn accept<V: SongVisitor + ?Sized>(&self, visitor: &mut V) -> VisitResult {
        visitor.visit_song_lyrics(self)
    }
}

impl Node {
    /// Dispatch to the handler for this node's kind.
    ///
    /// `scope` is the lyrics the node belongs to; it resolves references.
    pub fn accept<V: SongVisitor + ?Sized>(&self, visitor: &mut V, scope: &SongLyrics) -> VisitResult {
        match self {
            Node::Text(text) => visitor.visit_text(text),
            Node::Chord(chord) => visitor.visit_chord(chord),
            Node::Verse(verse) => visitor.visit_verse(verse, scope),
            Node::Paragraph(paragraph) => visitor.visit_paragraph(paragraph, scope),
            Node::Repeat(repeat) => visitor.visit_repeat(repeat, scope),
            Node::Strophe(strophe) => visitor.visit_strophe(strophe, scope),
            Node::StropheReference(reference) => {
                visitor.visit_strophe_reference(reference, scope.resolve(reference))
            }
        }
    }
}

/// Visit `nodes` in order, stopping at the first error
pub fn walk_nodes<V: SongVisitor + ?Sized>(nodes: &[Node], visitor: &mut V, scope: &SongLyrics) -> VisitResult {
    nodes.iter().try_for_each(|node| node.accept(visitor, scope))
}
