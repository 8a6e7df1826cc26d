//! Renderers module
//!
//! Every exporter is a [`SongVisitor`] over the same song tree: canonical
//! XML, screen HTML and print HTML. The print pipeline paginates print HTML
//! through external typesetting and compositing engines.

pub mod html;
pub mod print;
pub mod visitor;
pub mod xml;

// Re-export commonly used types
pub use html::{to_html, to_print_html, HtmlFlavor, HtmlRenderer, PrintFlavor, ScreenFlavor};
pub use print::{export_print_document, plan_sheets, PrintOptions};
pub use visitor::{walk_nodes, SongVisitor, VisitResult};
pub use xml::{to_xml, XmlExportVisitor};
