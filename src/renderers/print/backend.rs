//! Collaborators of the print pipeline
//!
//! Typesetting HTML into pages and compositing PDF sheets are left to
//! external engines; these traits are the seam they plug into.

use std::error::Error;
use std::path::Path;

pub type BackendResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Turns an HTML document into a paged document
pub trait TypesettingBackend {
    /// Typeset `html` on pages of `width` x `height` points, returning the
    /// serialized paged document
    fn render_to_pages(&mut self, html: &str, width: f64, height: f64) -> BackendResult<Vec<u8>>;

    /// Number of pages in a paged document stored at `path`
    fn page_count(&mut self, path: &Path) -> BackendResult<usize>;
}

/// Builds the output document out of imported pages
pub trait PdfCompositor {
    /// Handle of an output sheet
    type Sheet: Copy;
    /// Handle of an imported source page
    type Page;

    fn new_sheet(&mut self, width: f64, height: f64) -> BackendResult<Self::Sheet>;

    /// Import page `index` (0-based) of the paged document at `path`
    fn import_page(&mut self, path: &Path, index: usize) -> BackendResult<Self::Page>;

    /// Draw an imported page with its top-left corner at (`x`, `y`)
    fn place_page(&mut self, sheet: Self::Sheet, page: &Self::Page, x: f64, y: f64) -> BackendResult<()>;

    fn set_title(&mut self, title: &str);

    fn serialize(self) -> BackendResult<Vec<u8>>;
}
