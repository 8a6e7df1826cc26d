//! Canonical song XML export
//!
//! Walks the tree with an explicit stack of open fragments: entering a
//! container pushes a new fragment, leaving it pops the fragment and appends
//! it to the new top. Attributes equal to their defaults are omitted, and a
//! strophe reference is written as `<strophe-ref>` rather than re-expanded.

pub mod fragment;

use crate::errors::ExportError;
use crate::models::{
    Chord, Node, Paragraph, Repeat, Song, SongInfo, SongLyrics, Strophe, StropheReference, Text, Verse,
};
use crate::renderers::visitor::{walk_nodes, SongVisitor, VisitResult};
use fragment::Fragment;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DTD_PUBLIC: &str = "-//JABURJAK//DTD Song 1.0//EN";
const DTD_SYSTEM: &str = "https://chords.jaburjak.cz/dtd/song-1.dtd";
const SCHEMA_LOCATION: &str = "https://chords.jaburjak.cz/schema/song-1.xsd";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Serialize a song to canonical XML
pub fn to_xml(song: &Song) -> Result<String, ExportError> {
    let mut visitor = XmlExportVisitor::new();
    song.accept(&mut visitor)?;
    let xml = visitor.finish()?;
    log::info!("exported \"{}\" to XML ({} bytes)", song.info().title(), xml.len());
    Ok(xml)
}

/// Builds the XML document one fragment at a time
pub struct XmlExportVisitor {
    /// Open fragments; the bottom one collects the root element
    stack: Vec<Fragment>,
}

impl Default for XmlExportVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlExportVisitor {
    pub fn new() -> Self {
        Self {
            stack: vec![Fragment::new("#document")],
        }
    }

    /// Render the collected document
    pub fn finish(mut self) -> Result<String, ExportError> {
        if self.stack.len() != 1 {
            return Err(ExportError::UnsupportedStructure(format!(
                "{} element(s) left open",
                self.stack.len() - 1
            )));
        }
        let document = self.stack.pop().unwrap_or_else(|| Fragment::new("#document"));

        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push('\n');
        out.push_str(&format!("<!DOCTYPE song PUBLIC \"{}\" \"{}\">\n", DTD_PUBLIC, DTD_SYSTEM));
        for child in document.children() {
            if let fragment::Content::Element(root) = child {
                root.write(&mut out, 0, false);
                out.push('\n');
            }
        }
        Ok(out)
    }

    fn top(&mut self) -> Result<&mut Fragment, ExportError> {
        self.stack
            .last_mut()
            .ok_or_else(|| ExportError::UnsupportedStructure("no open element".into()))
    }

    fn open(&mut self, fragment: Fragment) {
        self.stack.push(fragment);
    }

    fn close(&mut self) -> VisitResult {
        let fragment = self
            .stack
            .pop()
            .ok_or_else(|| ExportError::UnsupportedStructure("no open element".into()))?;
        self.top()?.push_element(fragment);
        Ok(())
    }

    /// Open `fragment`, visit `nodes` into it, close it
    fn container(&mut self, fragment: Fragment, nodes: &[Node], scope: &SongLyrics) -> VisitResult {
        self.open(fragment);
        walk_nodes(nodes, self, scope)?;
        self.close()
    }
}

impl SongVisitor for XmlExportVisitor {
    fn visit_song(&mut self, song: &Song) -> VisitResult {
        self.open(
            Fragment::new("song")
                .with_attribute("xmlns", SCHEMA_LOCATION)
                .with_attribute("xmlns:xsi", XSI_NAMESPACE)
                .with_attribute("xsi:noNamespaceSchemaLocation", SCHEMA_LOCATION),
        );
        song.info().accept(self)?;
        song.lyrics().accept(self)?;
        self.close()
    }

    fn visit_song_info(&mut self, info: &SongInfo) -> VisitResult {
        let mut element = Fragment::new("info");
        element.push_element(Fragment::new("title").with_text(info.title()));
        if let Some(author) = info.author() {
            element.push_element(Fragment::new("author").with_text(author));
        }
        self.top()?.push_element(element);
        Ok(())
    }

    fn visit_song_lyrics(&mut self, lyrics: &SongLyrics) -> VisitResult {
        self.container(Fragment::new("lyrics"), lyrics.nodes(), lyrics)
    }

    fn visit_strophe(&mut self, strophe: &Strophe, scope: &SongLyrics) -> VisitResult {
        let mut element = Fragment::new("strophe");
        if let Some(label) = strophe.label() {
            element = element.with_attribute("label", label);
        }
        self.container(element, strophe.nodes(), scope)
    }

    fn visit_strophe_reference(&mut self, _reference: &StropheReference, target: &Strophe) -> VisitResult {
        let label = target.label().ok_or_else(|| {
            ExportError::UnsupportedOperation(
                "cannot create a <strophe-ref> pointing to an unlabeled <strophe>".into(),
            )
        })?;
        self.top()?.push_element(Fragment::new("strophe-ref").with_attribute("ref", label));
        Ok(())
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph, scope: &SongLyrics) -> VisitResult {
        self.container(Fragment::new("paragraph"), paragraph.nodes(), scope)
    }

    fn visit_verse(&mut self, verse: &Verse, scope: &SongLyrics) -> VisitResult {
        self.container(Fragment::new("verse"), verse.nodes(), scope)
    }

    fn visit_repeat(&mut self, repeat: &Repeat, scope: &SongLyrics) -> VisitResult {
        let mut element = Fragment::new("repeat");
        if repeat.has_explicit_count() {
            element = element.with_attribute("count", repeat.count().to_string());
        }
        self.container(element, repeat.nodes(), scope)
    }

    fn visit_chord(&mut self, chord: &Chord) -> VisitResult {
        let mut element = Fragment::new("chord").with_text(chord.name());
        if !chord.is_print() {
            element = element.with_attribute("print", "false");
        }
        self.top()?.push_element(element);
        Ok(())
    }

    fn visit_text(&mut self, text: &Text) -> VisitResult {
        self.top()?.push_text(text.content());
        Ok(())
    }
}
