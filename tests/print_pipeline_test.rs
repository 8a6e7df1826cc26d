// Test the paginated print export against fake typesetting and compositing engines

mod common;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chords_wasm::renderers::print::layout::HEADER_BAND_HEIGHT;
use chords_wasm::renderers::print::{
    export_print_document, BackendResult, PageGeometry, PdfCompositor, PrintOptions, TypesettingBackend,
};
use chords_wasm::ExportError;
use common::*;

/// Typesets nothing; reports a fixed page count
struct FakeBackend {
    pages: usize,
    fail_page_count: bool,
    /// Page count queries, one per artifact
    counted: usize,
    /// (width, height, html) per render call
    renders: Vec<(f64, f64, String)>,
}

impl FakeBackend {
    fn new(pages: usize) -> Self {
        Self {
            pages,
            fail_page_count: false,
            counted: 0,
            renders: Vec::new(),
        }
    }
}

impl TypesettingBackend for FakeBackend {
    fn render_to_pages(&mut self, html: &str, width: f64, height: f64) -> BackendResult<Vec<u8>> {
        self.renders.push((width, height, html.to_string()));
        Ok(format!("%PDF-fake {}", self.renders.len()).into_bytes())
    }

    fn page_count(&mut self, path: &Path) -> BackendResult<usize> {
        let content = std::fs::read_to_string(path)?;
        assert!(content.starts_with("%PDF-fake"), "artifact should hold the rendered bytes");
        self.counted += 1;
        if self.fail_page_count {
            return Err("broken document".into());
        }
        Ok(self.pages)
    }
}

/// Records every call as a line of text
#[derive(Default)]
struct FakeCompositor {
    ops: Vec<String>,
    sheets: usize,
    fail_on_place: bool,
    paths: Rc<RefCell<Vec<PathBuf>>>,
}

impl PdfCompositor for FakeCompositor {
    type Sheet = usize;
    type Page = String;

    fn new_sheet(&mut self, width: f64, height: f64) -> BackendResult<usize> {
        self.sheets += 1;
        self.ops.push(format!("sheet {} {}x{}", self.sheets, width, height));
        Ok(self.sheets)
    }

    fn import_page(&mut self, path: &Path, index: usize) -> BackendResult<String> {
        assert!(path.exists(), "imported artifact should exist during export");
        self.paths.borrow_mut().push(path.to_path_buf());
        let content = std::fs::read_to_string(path)?;
        Ok(format!("{}#{}", content, index))
    }

    fn place_page(&mut self, sheet: usize, page: &String, x: f64, y: f64) -> BackendResult<()> {
        if self.fail_on_place {
            return Err("out of ink".into());
        }
        self.ops.push(format!("place {} on {} at {},{}", page, sheet, x, y));
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.ops.push(format!("title {}", title));
    }

    fn serialize(self) -> BackendResult<Vec<u8>> {
        Ok(self.ops.join("\n").into_bytes())
    }
}

#[test]
fn test_five_pages_two_columns() {
    let song = okor_song(Some("lidová"));
    let options = PrintOptions::default();
    let geometry = PageGeometry::from_options(&options).unwrap();
    let mut backend = FakeBackend::new(5);
    let paths = Rc::new(RefCell::new(Vec::new()));
    let compositor = FakeCompositor {
        paths: paths.clone(),
        ..FakeCompositor::default()
    };

    let bytes = export_print_document(&song, &options, &mut backend, compositor).expect("export should succeed");
    let output = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.iter().filter(|l| l.starts_with("sheet ")).count(), 3);
    assert_eq!(lines.last(), Some(&"title Okoř"));

    // lyrics at column size, then title block and running header in the band
    assert_eq!(backend.renders.len(), 3);
    assert_eq!((backend.renders[0].0, backend.renders[0].1), (geometry.column_width, geometry.column_height));
    assert!(!backend.renders[0].2.contains("class=\"header\""));
    assert_eq!(backend.renders[1].1, HEADER_BAND_HEIGHT);
    assert!(backend.renders[1].2.contains("<div class=\"author\">lidová</div>"));
    assert!(backend.renders[2].2.contains("<h1>Okoř</h1>"));

    // title block on the first sheet, running header on the others
    assert!(output.contains("place %PDF-fake 2#0 on 1 at 40,40"));
    assert!(output.contains("place %PDF-fake 3#0 on 2 at 40,40"));
    assert!(output.contains("place %PDF-fake 3#0 on 3 at 40,40"));
    assert!(output.contains("place %PDF-fake 1#4 on 3 at 40,100"));

    for path in paths.borrow().iter() {
        assert!(!path.exists(), "temporary artifact {:?} should be removed", path);
    }
}

#[test]
fn test_overflowing_title_block_places_first_page_only() {
    // every artifact reports 5 pages, the title block included
    let mut backend = FakeBackend::new(5);

    let bytes = export_print_document(&okor_song(Some("lidová")), &PrintOptions::default(), &mut backend, FakeCompositor::default())
        .expect("export should succeed");
    let output = String::from_utf8(bytes).unwrap();

    // lyrics and title block are both measured
    assert_eq!(backend.counted, 2);
    assert!(output.contains("place %PDF-fake 2#0 on 1"));
    assert!(!output.contains("%PDF-fake 2#1"));
}

#[test]
fn test_no_running_header_when_one_sheet_suffices() {
    let song = okor_song(None);
    let mut backend = FakeBackend::new(2);

    let bytes = export_print_document(&song, &PrintOptions::default(), &mut backend, FakeCompositor::default())
        .expect("export should succeed");
    let output = String::from_utf8(bytes).unwrap();

    assert_eq!(backend.renders.len(), 2);
    assert_eq!(output.matches("sheet ").count(), 1);
}

#[test]
fn test_invalid_columns_fail_before_rendering() {
    let options = PrintOptions {
        columns: 7,
        ..PrintOptions::default()
    };
    let mut backend = FakeBackend::new(1);

    let result = export_print_document(&okor_song(None), &options, &mut backend, FakeCompositor::default());
    assert!(matches!(result, Err(ExportError::InvalidValue(_))));
    assert!(backend.renders.is_empty());
}

#[test]
fn test_backend_failure_propagates() {
    let mut backend = FakeBackend::new(1);
    backend.fail_page_count = true;

    let result = export_print_document(&okor_song(None), &PrintOptions::default(), &mut backend, FakeCompositor::default());
    assert!(matches!(result, Err(ExportError::Backend(ref msg)) if msg == "broken document"));
}

#[test]
fn test_artifacts_removed_after_compositor_failure() {
    let paths = Rc::new(RefCell::new(Vec::new()));
    let compositor = FakeCompositor {
        fail_on_place: true,
        paths: paths.clone(),
        ..FakeCompositor::default()
    };
    let mut backend = FakeBackend::new(3);

    let result = export_print_document(&okor_song(None), &PrintOptions::default(), &mut backend, compositor);
    assert!(matches!(result, Err(ExportError::Backend(_))));

    assert!(!paths.borrow().is_empty());
    for path in paths.borrow().iter() {
        assert!(!path.exists(), "temporary artifact {:?} should be removed", path);
    }
}
