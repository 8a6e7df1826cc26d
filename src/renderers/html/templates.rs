//! Mustache template for print documents
//!
//! The print markup is wrapped in a complete styled HTML page before it is
//! handed to a typesetting backend.

use crate::errors::ExportError;
use crate::renderers::print::FontSize;
use serde::Serialize;

const PRINT_TEMPLATE: &str = include_str!("templates/print.html.mustache");

/// Context data for the print template
#[derive(Debug, Clone, Serialize)]
pub struct PrintTemplateContext {
    /// CSS font size, e.g. "10pt"
    pub font_size: String,
    /// Rendered song markup, inserted unescaped
    pub body: String,
}

impl PrintTemplateContext {
    pub fn new(font_size: FontSize, body: String) -> Self {
        Self {
            font_size: font_size.css().to_string(),
            body,
        }
    }
}

/// Render a full print document around `body`
pub fn render_print_document(font_size: FontSize, body: String) -> Result<String, ExportError> {
    let context = PrintTemplateContext::new(font_size, body);
    let template = mustache::compile_str(PRINT_TEMPLATE).map_err(|e| ExportError::Template(e.to_string()))?;
    template
        .render_to_string(&context)
        .map_err(|e| ExportError::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_and_raw_body() {
        let html = render_print_document(FontSize::Bigger, "<div class=\"paragraph\"></div>".into()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("font-size: 12pt;"));
        assert!(html.contains("<body><div class=\"paragraph\"></div></body>"));
    }
}
