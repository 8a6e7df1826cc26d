//! XML parsing layer for song documents
//!
//! Thin wrapper around roxmltree: parses the text, locates the `<song>`
//! root and offers helpers for case-insensitive element lookup.

use crate::errors::ParseError;
use roxmltree::{Document, Node, ParsingOptions};

/// Parsed XML document holding a `<song>` root
pub struct XmlDocument<'input> {
    doc: Document<'input>,
}

impl<'input> XmlDocument<'input> {
    /// Parse XML text; a DOCTYPE declaration is accepted
    pub fn parse(xml: &'input str) -> Result<Self, ParseError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)
            .map_err(|e| ParseError::MalformedDocument(e.to_string()))?;
        Ok(Self { doc })
    }

    /// Get the root `<song>` element
    pub fn song(&self) -> Result<Node<'_, 'input>, ParseError> {
        let root = self.doc.root_element();
        if !is_named(root, "song") {
            return Err(ParseError::schema(
                element_name(root),
                "root element must be <song>",
            ));
        }
        Ok(root)
    }
}

/// Lowercased local name of an element
pub fn element_name(node: Node) -> String {
    node.tag_name().name().to_lowercase()
}

/// Case-insensitive element name check
pub fn is_named(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

/// Get first child element with given name
pub fn get_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_named(*n, name))
}

/// Concatenated text of all descendant text nodes
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Text content of first child with given name
pub fn get_child_text(node: Node, name: &str) -> Option<String> {
    get_child(node, name).map(text_content)
}
