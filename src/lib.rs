//! Song Lyrics WASM Module
//!
//! Song document model for lyrics with chords, its XML parser and the
//! exporters built on a shared visitor: canonical XML, screen HTML and
//! print HTML with column pagination.

pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod converters;
pub mod api;

// Re-export commonly used types
pub use errors::{ExportError, ModelError, ParseError, SongError};
pub use models::{Song, SongInfo, SongLyrics};
pub use parse::parse_song;
pub use renderers::{to_html, to_print_html, to_xml, PrintOptions};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_log_failure(&e.to_string());
    }

    log::info!("Song WASM module initialized");
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn web_log_failure(s: &str);
}
