//! Song document root
//!
//! [`SongLyrics`] owns the lyrics tree plus a flat table of the strophes
//! that strophe references point at. Equality is structural: a reference
//! compares equal to another when the strophes they resolve to are equal,
//! whatever their position in the respective tables.

use super::nodes::{Level, Node, Strophe, StropheId, StropheReference};
use crate::errors::ModelError;

/// Song metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    title: String,
    author: Option<String>,
}

impl SongInfo {
    pub fn new(title: impl Into<String>, author: Option<String>) -> Result<Self, ModelError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        Ok(Self { title, author })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

/// Lyrics content of a song
#[derive(Debug, Clone)]
pub struct SongLyrics {
    nodes: Vec<Node>,
    /// Reference targets, indexed by [`StropheId`]
    strophes: Vec<Strophe>,
}

impl SongLyrics {
    /// Build lyrics from top-level nodes and the reference table.
    ///
    /// Fails if a node is not allowed at lyrics level or a reference points
    /// past the end of `strophes`.
    pub fn new(nodes: Vec<Node>, strophes: Vec<Strophe>) -> Result<Self, ModelError> {
        Level::Lyrics.validate(&nodes)?;
        check_references(&nodes, strophes.len())?;
        Ok(Self { nodes, strophes })
    }

    pub fn builder() -> SongLyricsBuilder {
        SongLyricsBuilder::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Strophes that references may point at
    pub fn referenced_strophes(&self) -> &[Strophe] {
        &self.strophes
    }

    /// Strophe a reference points at
    pub fn resolve(&self, reference: &StropheReference) -> &Strophe {
        // ids are bounds-checked in `new`
        &self.strophes[reference.target().index()]
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn check_references(nodes: &[Node], table_len: usize) -> Result<(), ModelError> {
    for node in nodes {
        match node {
            Node::StropheReference(reference) if reference.target().index() >= table_len => {
                return Err(ModelError::DanglingReference(reference.target().index()));
            }
            Node::Repeat(repeat) => check_references(repeat.nodes(), table_len)?,
            _ => {}
        }
    }
    Ok(())
}

impl PartialEq for SongLyrics {
    fn eq(&self, other: &Self) -> bool {
        lyrics_nodes_eq(&self.nodes, self, &other.nodes, other)
    }
}

impl Eq for SongLyrics {}

fn lyrics_nodes_eq(left: &[Node], left_scope: &SongLyrics, right: &[Node], right_scope: &SongLyrics) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| lyrics_node_eq(l, left_scope, r, right_scope))
}

fn lyrics_node_eq(left: &Node, left_scope: &SongLyrics, right: &Node, right_scope: &SongLyrics) -> bool {
    match (left, right) {
        (Node::StropheReference(l), Node::StropheReference(r)) => {
            left_scope.resolve(l) == right_scope.resolve(r)
        }
        (Node::Repeat(l), Node::Repeat(r)) => {
            l.count() == r.count() && lyrics_nodes_eq(l.nodes(), left_scope, r.nodes(), right_scope)
        }
        // strophes never contain references, derived equality is structural here
        _ => left == right,
    }
}

/// Incremental construction of [`SongLyrics`] by hand
#[derive(Debug, Default)]
pub struct SongLyricsBuilder {
    nodes: Vec<Node>,
    strophes: Vec<Strophe>,
}

impl SongLyricsBuilder {
    /// Register a reference target and get a reference pointing at it
    pub fn reference(&mut self, strophe: Strophe) -> StropheReference {
        let id = StropheId(self.strophes.len());
        self.strophes.push(strophe);
        StropheReference::new(id)
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn build(self) -> Result<SongLyrics, ModelError> {
        SongLyrics::new(self.nodes, self.strophes)
    }
}

/// Song document: metadata plus lyrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    info: SongInfo,
    lyrics: SongLyrics,
}

impl Song {
    pub fn new(info: SongInfo, lyrics: SongLyrics) -> Self {
        Self { info, lyrics }
    }

    pub fn info(&self) -> &SongInfo {
        &self.info
    }

    pub fn lyrics(&self) -> &SongLyrics {
        &self.lyrics
    }
}
