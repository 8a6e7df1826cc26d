//! Format converters
//!
//! Convenience wrappers chaining the parser with one exporter.

pub mod song;

pub use song::{canonicalize_xml, xml_to_html, xml_to_print_html};
