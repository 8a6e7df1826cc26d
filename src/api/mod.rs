//! Song WASM API
//!
//! JavaScript-facing functions. Everything crosses the boundary as XML text
//! or serde-converted plain objects; errors become string `JsValue`s.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and logging macros
//! - `export`: parse, export and pagination entry points

pub mod helpers;
pub mod export;

pub use export::{parse_song_xml, plan_pagination, song_to_html, song_to_print_html, song_to_xml};
