//! Print pipeline: options, pagination layout and paginated export

pub mod backend;
pub mod export;
pub mod layout;
pub mod options;

pub use backend::{BackendResult, PdfCompositor, TypesettingBackend};
pub use export::export_print_document;
pub use layout::{plan_sheets, PageGeometry, Placement, SheetHeader, SheetPlan};
pub use options::{FontSize, PaperSize, PrintOptions};
