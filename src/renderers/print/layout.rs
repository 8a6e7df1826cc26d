//! Column pagination
//!
//! Lyrics are typeset into pages one column wide; those pages are then laid
//! out side by side on output sheets, `columns` pages per sheet. The first
//! sheet carries the title block. When the lyrics need more than one sheet,
//! every following sheet carries a running header (title and author).

use super::options::{PaperSize, PrintOptions};
use crate::errors::ExportError;
use serde::Serialize;

pub const MARGIN_TOP: f64 = 40.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const MARGIN_LEFT: f64 = 40.0;
pub const MARGIN_RIGHT: f64 = 40.0;
/// Horizontal space between two columns
pub const COLUMN_GAP: f64 = 10.0;
/// Height reserved above the columns for the title block or running header
pub const HEADER_BAND_HEIGHT: f64 = 60.0;

/// Sheet and column dimensions in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub paper_width: f64,
    pub paper_height: f64,
    pub columns: u8,
    pub column_width: f64,
    pub column_height: f64,
}

impl PageGeometry {
    pub fn new(paper: PaperSize, columns: u8) -> Result<Self, ExportError> {
        PrintOptions {
            columns,
            ..PrintOptions::default()
        }
        .validate()?;

        let (paper_width, paper_height) = paper.dimensions();
        let column_width = (paper_width - MARGIN_LEFT - MARGIN_RIGHT) / f64::from(columns) - COLUMN_GAP / 2.0;
        let column_height = paper_height - MARGIN_TOP - MARGIN_BOTTOM - HEADER_BAND_HEIGHT;

        Ok(Self {
            paper_width,
            paper_height,
            columns,
            column_width,
            column_height,
        })
    }

    pub fn from_options(options: &PrintOptions) -> Result<Self, ExportError> {
        Self::new(options.paper_size, options.columns)
    }

    /// Top-left corner of the header band
    pub fn header_origin(&self) -> (f64, f64) {
        (MARGIN_LEFT, MARGIN_TOP)
    }

    /// Top-left corner of the column a source page lands in
    pub fn column_origin(&self, page: usize) -> (f64, f64) {
        let slot = page % usize::from(self.columns);
        let mut x = MARGIN_LEFT + slot as f64 * self.column_width;
        if slot != 0 {
            x += COLUMN_GAP;
        }
        (x, MARGIN_TOP + HEADER_BAND_HEIGHT)
    }
}

/// What occupies the header band of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetHeader {
    /// Full header: title, author, metadata
    TitleBlock,
    /// Condensed header: title and author
    RunningHeader,
}

/// One source page positioned on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// 0-based index into the typeset lyrics
    pub page: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetPlan {
    pub header: Option<SheetHeader>,
    pub placements: Vec<Placement>,
}

impl SheetPlan {
    pub fn pages(&self) -> Vec<usize> {
        self.placements.iter().map(|placement| placement.page).collect()
    }
}

/// Distribute `page_count` column pages over sheets.
///
/// Always yields at least one sheet, so the title block has a place even
/// when the lyrics are empty.
pub fn plan_sheets(page_count: usize, geometry: &PageGeometry) -> Vec<SheetPlan> {
    let columns = usize::from(geometry.columns.max(1));
    let mut sheets = vec![SheetPlan {
        header: Some(SheetHeader::TitleBlock),
        placements: Vec::new(),
    }];

    for page in 0..page_count {
        if page % columns == 0 && page != 0 {
            sheets.push(SheetPlan {
                header: (page_count > columns).then_some(SheetHeader::RunningHeader),
                placements: Vec::new(),
            });
        }
        let (x, y) = geometry.column_origin(page);
        if let Some(sheet) = sheets.last_mut() {
            sheet.placements.push(Placement { page, x, y });
        }
    }

    log::debug!(
        "planned {} sheet(s) for {} page(s) in {} column(s)",
        sheets.len(),
        page_count,
        columns
    );
    sheets
}
