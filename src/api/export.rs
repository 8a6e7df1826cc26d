//! Song operations for the WASM API
//!
//! Every function takes song XML text from JavaScript:
//! - parseSong: validate and return the canonical form
//! - songToXml: canonical XML export
//! - songToHtml: screen HTML fragment
//! - songToPrintHtml: styled print document
//! - planPagination: sheet layout for a typeset page count

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, serialize};
use crate::parse::parse_song;
use crate::renderers::print::{plan_sheets, PageGeometry, PrintOptions};
use crate::renderers::{to_html, to_print_html, to_xml};
use crate::{wasm_info, wasm_log};

/// Options object from JS; `undefined`/`null` mean defaults
fn print_options(options: JsValue) -> Result<PrintOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(PrintOptions::default());
    }
    deserialize(options, "Invalid print options")
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse song XML, failing on the first schema or value error
///
/// # Returns
/// The song re-serialized as canonical XML
#[wasm_bindgen(js_name = parseSong)]
pub fn parse_song_xml(xml: &str) -> Result<String, JsValue> {
    wasm_info!("parseSong called ({} bytes)", xml.len());

    let song = parse_song(xml).map_err(|e| js_error("Parse error", e))?;
    wasm_log!("  Parsed \"{}\", {} lyrics nodes", song.info().title(), song.lyrics().nodes().len());

    let canonical = to_xml(&song).map_err(|e| js_error("XML export error", e))?;
    wasm_info!("parseSong completed successfully");
    Ok(canonical)
}

// ============================================================================
// Export
// ============================================================================

/// Export song XML in canonical form
#[wasm_bindgen(js_name = songToXml)]
pub fn song_to_xml(xml: &str) -> Result<String, JsValue> {
    wasm_info!("songToXml called");

    let song = parse_song(xml).map_err(|e| js_error("Parse error", e))?;
    let output = to_xml(&song).map_err(|e| js_error("XML export error", e))?;

    wasm_info!("songToXml completed: {} bytes", output.len());
    Ok(output)
}

/// Export song lyrics as an HTML fragment for on-screen display
#[wasm_bindgen(js_name = songToHtml)]
pub fn song_to_html(xml: &str) -> Result<String, JsValue> {
    wasm_info!("songToHtml called");

    let song = parse_song(xml).map_err(|e| js_error("Parse error", e))?;
    let html = to_html(&song).map_err(|e| js_error("HTML export error", e))?;

    wasm_info!("songToHtml completed: {} bytes", html.len());
    Ok(html)
}

/// Export a complete print HTML document
///
/// # Parameters
/// * `options` - `{ paperSize, columns, fontSize, printHiddenChords, metadata }`, all optional
#[wasm_bindgen(js_name = songToPrintHtml)]
pub fn song_to_print_html(xml: &str, options: JsValue) -> Result<String, JsValue> {
    wasm_info!("songToPrintHtml called");

    let options = print_options(options)?;
    let song = parse_song(xml).map_err(|e| js_error("Parse error", e))?;
    let html = to_print_html(&song, &options).map_err(|e| js_error("Print HTML export error", e))?;

    wasm_info!("songToPrintHtml completed: {} bytes", html.len());
    Ok(html)
}

// ============================================================================
// Pagination
// ============================================================================

/// Plan how `page_count` typeset column pages are placed on sheets
///
/// # Returns
/// Array of `{ header, placements: [{ page, x, y }] }`
#[wasm_bindgen(js_name = planPagination)]
pub fn plan_pagination(page_count: usize, options: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("planPagination called: {} pages", page_count);

    let options = print_options(options)?;
    let geometry = PageGeometry::from_options(&options).map_err(|e| js_error("Invalid print options", e))?;
    let sheets = plan_sheets(page_count, &geometry);

    wasm_log!("  {} sheets, column {}x{}", sheets.len(), geometry.column_width, geometry.column_height);
    serialize(&sheets, "Failed to serialize sheet plan")
}
