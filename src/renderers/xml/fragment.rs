//! In-memory XML fragments and their pretty-printer
//!
//! Element-only content is indented two spaces per level. An element that
//! holds text, or sits inside one that does, is written on a single line so
//! no whitespace is introduced into mixed content.

use quick_xml::escape::{escape, partial_escape};

/// Child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Element(Fragment),
    Text(String),
}

/// One element with attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Content>,
}

impl Fragment {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn push_element(&mut self, element: Fragment) {
        self.children.push(Content::Element(element));
    }

    /// Append text; empty strings are dropped
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Content::Text(text));
        }
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    fn has_text(&self) -> bool {
        self.children.iter().any(|child| matches!(child, Content::Text(_)))
    }

    /// Write this element at `depth` indentation levels
    pub fn write(&self, out: &mut String, depth: usize, inline: bool) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        let inline = inline || self.has_text();
        for child in &self.children {
            match child {
                Content::Text(text) => out.push_str(&escape_text(text)),
                Content::Element(element) if inline => element.write(out, depth + 1, true),
                Content::Element(element) => {
                    out.push('\n');
                    indent(out, depth + 1);
                    element.write(out, depth + 1, element.name == "verse");
                }
            }
        }

        if !inline {
            out.push('\n');
            indent(out, depth);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

/// Attribute values also protect whitespace from attribute-value normalization
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in escape(value).chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
    out
}

/// Carriage returns in text would come back as line feeds
fn escape_text(text: &str) -> String {
    partial_escape(text).replace('\r', "&#13;")
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
