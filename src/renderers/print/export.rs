//! Paginated print export
//!
//! Typesets the lyrics into column-sized pages, then composes them onto
//! output sheets following [`plan_sheets`]. Intermediate paged documents
//! live in temporary files that are removed when the export returns,
//! whether it succeeds or not.

use std::io::Write;
use std::path::Path;

use super::backend::{PdfCompositor, TypesettingBackend};
use super::layout::{plan_sheets, PageGeometry, SheetHeader, HEADER_BAND_HEIGHT};
use super::options::PrintOptions;
use crate::errors::ExportError;
use crate::models::Song;
use crate::renderers::html::print::header_html;
use crate::renderers::html::{print_body, templates::render_print_document};
use tempfile::NamedTempFile;

/// Paged document produced by the backend, kept on disk for the compositor
struct RenderedArtifact {
    file: NamedTempFile,
}

impl RenderedArtifact {
    fn render<B: TypesettingBackend + ?Sized>(
        backend: &mut B,
        html: &str,
        width: f64,
        height: f64,
    ) -> Result<Self, ExportError> {
        let bytes = backend.render_to_pages(html, width, height).map_err(backend_error)?;
        let mut file = tempfile::Builder::new().prefix("song-").suffix(".pdf").tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }
}

fn backend_error(err: Box<dyn std::error::Error + Send + Sync>) -> ExportError {
    ExportError::Backend(err.to_string())
}

/// Export a song as a paginated document
pub fn export_print_document<B, C>(
    song: &Song,
    options: &PrintOptions,
    backend: &mut B,
    mut compositor: C,
) -> Result<Vec<u8>, ExportError>
where
    B: TypesettingBackend + ?Sized,
    C: PdfCompositor,
{
    let geometry = PageGeometry::from_options(options)?;
    let info = song.info();

    let lyrics_html = render_print_document(options.font_size, print_body(song, options, false)?)?;
    let lyrics = RenderedArtifact::render(backend, &lyrics_html, geometry.column_width, geometry.column_height)?;
    let page_count = backend.page_count(lyrics.path()).map_err(backend_error)?;

    let sheets = plan_sheets(page_count, &geometry);

    let title_html = render_print_document(options.font_size, header_html(info, &options.metadata))?;
    let title = RenderedArtifact::render(backend, &title_html, geometry.column_width, HEADER_BAND_HEIGHT)?;
    let title_pages = backend.page_count(title.path()).map_err(backend_error)?;
    if title_pages > 1 {
        log::warn!(
            "title block of \"{}\" spans {} pages of the header band, only the first is placed",
            info.title(),
            title_pages
        );
    }
    let title_page = compositor.import_page(title.path(), 0).map_err(backend_error)?;

    let running = if sheets.iter().any(|sheet| sheet.header == Some(SheetHeader::RunningHeader)) {
        let html = render_print_document(options.font_size, header_html(info, &[]))?;
        let artifact = RenderedArtifact::render(backend, &html, geometry.column_width, HEADER_BAND_HEIGHT)?;
        let page = compositor.import_page(artifact.path(), 0).map_err(backend_error)?;
        Some((artifact, page))
    } else {
        None
    };

    let (header_x, header_y) = geometry.header_origin();
    for plan in &sheets {
        let sheet = compositor
            .new_sheet(geometry.paper_width, geometry.paper_height)
            .map_err(backend_error)?;

        let header_page = match (plan.header, &running) {
            (Some(SheetHeader::TitleBlock), _) => Some(&title_page),
            (Some(SheetHeader::RunningHeader), Some((_, page))) => Some(page),
            _ => None,
        };
        if let Some(page) = header_page {
            compositor
                .place_page(sheet, page, header_x, header_y)
                .map_err(backend_error)?;
        }

        for placement in &plan.placements {
            let page = compositor
                .import_page(lyrics.path(), placement.page)
                .map_err(backend_error)?;
            compositor
                .place_page(sheet, &page, placement.x, placement.y)
                .map_err(backend_error)?;
        }
    }

    compositor.set_title(info.title());
    let bytes = compositor.serialize().map_err(backend_error)?;
    log::info!(
        "exported \"{}\" to {} sheet(s) from {} column page(s)",
        info.title(),
        sheets.len(),
        page_count
    );
    Ok(bytes)
}
