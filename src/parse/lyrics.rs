//! `<lyrics>` element parsing
//!
//! Two phases:
//! 1. **Pre-scan**: walk the lyrics children (descending into `<repeat>`),
//!    parse every `<strophe>` and record labeled ones. A later strophe with
//!    the same label replaces an earlier one, so references bind to the last
//!    definition in document order, and a `<strophe-ref>` may precede the
//!    strophe it names.
//! 2. **Main parse**: recursive descent over the four grammatical levels.
//!    `<repeat>` reuses the child rules of the level it appears at.
//!
//! Strophes parsed during the pre-scan are memoized by source node, so the
//! main pass reuses them instead of parsing each `<strophe>` twice.

use std::collections::HashMap;

use super::document::{element_name, text_content};
use crate::errors::ParseError;
use crate::models::{
    Chord, Level, Node, Paragraph, Repeat, Strophe, StropheId, StropheReference, SongLyrics, Text, Verse,
    DEFAULT_REPEAT_COUNT,
};
use roxmltree::{Node as XmlNode, NodeId};

/// Parse the `<lyrics>` element
pub fn parse_lyrics(lyrics: XmlNode) -> Result<SongLyrics, ParseError> {
    let mut parser = LyricsParser::default();
    parser.prescan(lyrics)?;
    log::debug!(
        "pre-scan found {} strophes, {} labeled",
        parser.parsed.len(),
        parser.labeled.len()
    );

    let nodes = parser.parse_children(Level::Lyrics, lyrics)?;
    Ok(SongLyrics::new(nodes, parser.targets)?)
}

#[derive(Default)]
struct LyricsParser {
    /// Strophes already parsed, keyed by source element
    parsed: HashMap<NodeId, Strophe>,
    /// Label -> last strophe carrying it
    labeled: HashMap<String, Strophe>,
    /// Reference table handed to [`SongLyrics`]
    targets: Vec<Strophe>,
    /// Label -> slot in `targets`, filled on first reference
    target_ids: HashMap<String, StropheId>,
}

impl LyricsParser {
    fn prescan(&mut self, container: XmlNode) -> Result<(), ParseError> {
        for child in container.children().filter(|n| n.is_element()) {
            match element_name(child).as_str() {
                "strophe" => {
                    let strophe = parse_strophe(child)?;
                    if let Some(label) = strophe.label() {
                        if self.labeled.insert(label.to_string(), strophe.clone()).is_some() {
                            log::warn!("strophe label \"{}\" defined more than once, last one wins", label);
                        }
                    }
                    self.parsed.insert(child.id(), strophe);
                }
                "repeat" => self.prescan(child)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Parse the children of `container` with the rules of `level`
    fn parse_children(&mut self, level: Level, container: XmlNode) -> Result<Vec<Node>, ParseError> {
        if level == Level::Verse {
            return parse_verse_children(container);
        }

        let mut nodes = Vec::new();
        for child in significant_children(level, container)? {
            let node: Node = match (level, element_name(child).as_str()) {
                (Level::Lyrics, "strophe") => self.strophe(child)?.into(),
                (Level::Lyrics, "strophe-ref") => self.reference(child)?.into(),
                (Level::Strophe, "paragraph") => {
                    Paragraph::new(self.parse_children(Level::Paragraph, child)?)?.into()
                }
                (Level::Paragraph, "verse") => Verse::new(parse_verse_children(child)?)?.into(),
                (_, "repeat") => {
                    let count = parse_count(child)?;
                    Repeat::new(self.parse_children(level, child)?, count)?.into()
                }
                (_, name) => return Err(disallowed(level, name)),
            };
            nodes.push(node);
        }
        Ok(nodes)
    }

    fn strophe(&mut self, element: XmlNode) -> Result<Strophe, ParseError> {
        match self.parsed.get(&element.id()) {
            Some(strophe) => Ok(strophe.clone()),
            None => parse_strophe(element),
        }
    }

    fn reference(&mut self, element: XmlNode) -> Result<StropheReference, ParseError> {
        let label = element.attribute("ref").unwrap_or_default();
        if label.is_empty() {
            return Err(ParseError::schema("strophe-ref", "attribute \"ref\" must not be empty"));
        }

        if let Some(id) = self.target_ids.get(label) {
            return Ok(StropheReference::new(*id));
        }

        let strophe = self.labeled.get(label).ok_or_else(|| {
            ParseError::schema(
                "strophe-ref",
                format!("no <strophe> with label \"{}\" found", label),
            )
        })?;
        let id = StropheId(self.targets.len());
        self.targets.push(strophe.clone());
        self.target_ids.insert(label.to_string(), id);
        Ok(StropheReference::new(id))
    }
}

/// Parse a `<strophe>`; strophe content never contains references
fn parse_strophe(element: XmlNode) -> Result<Strophe, ParseError> {
    let label = element
        .attribute("label")
        .filter(|label| !label.is_empty())
        .map(String::from);
    let nodes = LyricsParser::default().parse_children(Level::Strophe, element)?;
    Ok(Strophe::new(nodes, label)?)
}

/// Verse content is mixed: text and elements interleaved in document order.
///
/// Text runs separated only by skipped nodes (comments, processing
/// instructions) are joined, so a verse never holds two adjacent texts.
fn parse_verse_children(container: XmlNode) -> Result<Vec<Node>, ParseError> {
    let mut nodes: Vec<Node> = Vec::new();
    for child in container.children() {
        if child.is_text() {
            let run = child.text().unwrap_or_default();
            match nodes.last_mut() {
                Some(Node::Text(previous)) => {
                    *previous = Text::new(format!("{}{}", previous.content(), run));
                }
                _ => nodes.push(Text::new(run).into()),
            }
            continue;
        }
        if !child.is_element() {
            log::warn!("skipping non-element node inside <{}>", element_name(container));
            continue;
        }
        let node: Node = match element_name(child).as_str() {
            "chord" => parse_chord(child)?.into(),
            "repeat" => {
                let count = parse_count(child)?;
                Repeat::new(parse_verse_children(child)?, count)?.into()
            }
            name => return Err(disallowed(Level::Verse, name)),
        };
        nodes.push(node);
    }
    Ok(nodes)
}

/// Element children of a non-verse container.
///
/// Whitespace between elements is ignored; any other text is a violation.
fn significant_children<'a, 'input>(
    level: Level,
    container: XmlNode<'a, 'input>,
) -> Result<Vec<XmlNode<'a, 'input>>, ParseError> {
    let mut children = Vec::new();
    for child in container.children() {
        if child.is_element() {
            children.push(child);
        } else if child.is_text() && !child.text().unwrap_or_default().trim().is_empty() {
            return Err(ParseError::schema(
                level.element_name(),
                format!("text content is not allowed in <{}>", element_name(container)),
            ));
        }
    }
    Ok(children)
}

/// Parse `<chord print="...">name</chord>`
fn parse_chord(element: XmlNode) -> Result<Chord, ParseError> {
    let print = match element.attribute("print").map(str::to_lowercase).as_deref() {
        None | Some("") | Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        Some(other) => {
            return Err(ParseError::invalid(
                "chord",
                format!("attribute \"print\" must have a boolean value, got \"{}\"", other),
            ))
        }
    };
    Ok(Chord::new(text_content(element), print)?)
}

/// Parse the `count` attribute of `<repeat>`, defaulting to 2
fn parse_count(element: XmlNode) -> Result<u32, ParseError> {
    let Some(raw) = element.attribute("count") else {
        return Ok(DEFAULT_REPEAT_COUNT);
    };
    let count: i64 = raw.trim().parse().map_err(|_| {
        ParseError::invalid(
            "repeat",
            format!("non-numeric value \"{}\" in attribute \"count\"", raw),
        )
    })?;
    if count < i64::from(DEFAULT_REPEAT_COUNT) {
        return Err(ParseError::invalid(
            "repeat",
            format!("attribute \"count\" must be at least 2, got {}", count),
        ));
    }
    u32::try_from(count)
        .map_err(|_| ParseError::invalid("repeat", format!("attribute \"count\" is too large: {}", count)))
}

fn disallowed(level: Level, found: &str) -> ParseError {
    let container = level.element_name();
    ParseError::schema(container, format!("element <{}> cannot have <{}> as its child", container, found))
}
