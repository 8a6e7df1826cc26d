//! Lyrics tree nodes
//!
//! Every node is immutable once constructed. Containers validate their
//! children against the grammatical [`Level`] they represent; a [`Repeat`]
//! has no level of its own and is checked against the level of whatever
//! container it ends up in.

use crate::errors::ModelError;

/// Repeat count assumed when a `<repeat>` has no `count` attribute
pub const DEFAULT_REPEAT_COUNT: u32 = 2;

/// Grammatical level of a container, selecting which children it admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Song lyrics: strophes, strophe references, repeats
    Lyrics,
    /// Strophe: paragraphs, repeats
    Strophe,
    /// Paragraph: verses, repeats
    Paragraph,
    /// Verse: text, chords, repeats
    Verse,
}

impl Level {
    /// XML element name of a container at this level
    pub fn element_name(self) -> &'static str {
        match self {
            Level::Lyrics => "lyrics",
            Level::Strophe => "strophe",
            Level::Paragraph => "paragraph",
            Level::Verse => "verse",
        }
    }

    /// Check whether `node` may appear as a child at this level.
    ///
    /// A repeat is admitted when all of its own children are.
    pub fn admits(self, node: &Node) -> bool {
        match (self, node) {
            (_, Node::Repeat(repeat)) => repeat.nodes().iter().all(|child| self.admits(child)),
            (Level::Lyrics, Node::Strophe(_) | Node::StropheReference(_)) => true,
            (Level::Strophe, Node::Paragraph(_)) => true,
            (Level::Paragraph, Node::Verse(_)) => true,
            (Level::Verse, Node::Text(_) | Node::Chord(_)) => true,
            _ => false,
        }
    }

    /// Validate a child list, reporting the first offending node
    pub fn validate(self, nodes: &[Node]) -> Result<(), ModelError> {
        match nodes.iter().find(|node| !self.admits(node)) {
            Some(node) => Err(ModelError::DisallowedChild {
                container: self.element_name(),
                found: first_disallowed(self, node).kind_name(),
            }),
            None => Ok(()),
        }
    }
}

/// Descend through repeats to the node that actually broke the grammar
fn first_disallowed(level: Level, node: &Node) -> &Node {
    if let Node::Repeat(repeat) = node {
        if let Some(child) = repeat.nodes().iter().find(|child| !level.admits(child)) {
            return first_disallowed(level, child);
        }
    }
    node
}

/// Plain text within a verse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Chord annotation placed above the text that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    name: String,
    /// Include the chord in printed output?
    print: bool,
}

impl Chord {
    pub fn new(name: impl Into<String>, print: bool) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyChordName);
        }
        Ok(Self { name, print })
    }

    /// Chord shown in every output
    pub fn printed(name: impl Into<String>) -> Result<Self, ModelError> {
        Self::new(name, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_print(&self) -> bool {
        self.print
    }
}

/// One line of lyrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    nodes: Vec<Node>,
}

impl Verse {
    pub fn new(nodes: Vec<Node>) -> Result<Self, ModelError> {
        Level::Verse.validate(&nodes)?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Group of verses within a strophe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    nodes: Vec<Node>,
}

impl Paragraph {
    pub fn new(nodes: Vec<Node>) -> Result<Self, ModelError> {
        Level::Paragraph.validate(&nodes)?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Verse or chorus block, optionally labeled so it can be referenced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strophe {
    nodes: Vec<Node>,
    label: Option<String>,
}

impl Strophe {
    pub fn new(nodes: Vec<Node>, label: Option<String>) -> Result<Self, ModelError> {
        Level::Strophe.validate(&nodes)?;
        if label.as_deref() == Some("") {
            return Err(ModelError::EmptyLabel);
        }
        Ok(Self { nodes, label })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Content to be repeated `count` times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    nodes: Vec<Node>,
    count: u32,
}

impl Repeat {
    pub fn new(nodes: Vec<Node>, count: u32) -> Result<Self, ModelError> {
        if count < DEFAULT_REPEAT_COUNT {
            return Err(ModelError::RepeatCountTooLow(count));
        }
        Ok(Self { nodes, count })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the count differs from the implicit default
    pub fn has_explicit_count(&self) -> bool {
        self.count != DEFAULT_REPEAT_COUNT
    }
}

/// Index of a strophe in the reference table of [`SongLyrics`](super::SongLyrics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StropheId(pub(crate) usize);

impl StropheId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stand-in for a strophe defined elsewhere in the same song.
///
/// Holds an index, not the strophe; resolve it through the owning lyrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StropheReference {
    target: StropheId,
}

impl StropheReference {
    pub(crate) fn new(target: StropheId) -> Self {
        Self { target }
    }

    pub fn target(&self) -> StropheId {
        self.target
    }
}

/// Any node of the lyrics tree
///
/// Derived equality compares strophe references by index; lyrics-level
/// comparison resolves them structurally instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Chord(Chord),
    Verse(Verse),
    Paragraph(Paragraph),
    Repeat(Repeat),
    Strophe(Strophe),
    StropheReference(StropheReference),
}

impl Node {
    /// Human-readable node kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Text(_) => "text",
            Node::Chord(_) => "chord",
            Node::Verse(_) => "verse",
            Node::Paragraph(_) => "paragraph",
            Node::Repeat(_) => "repeat",
            Node::Strophe(_) => "strophe",
            Node::StropheReference(_) => "strophe-ref",
        }
    }
}

macro_rules! impl_from_for_node {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_node!(Text, Chord, Verse, Paragraph, Repeat, Strophe, StropheReference);
