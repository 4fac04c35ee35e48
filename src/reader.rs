//! Page-text acquisition from the source PDF.
//!
//! The pipeline itself never touches the document; it consumes the
//! text produced here. [`PageSource`] keeps that seam explicit, and
//! the Pdfium-backed implementation is the only code that can fail
//! for non-text reasons.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use pdfium_render::prelude::{PdfDocument, Pdfium, PdfiumError};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from the Pdfium-backed source. Anything here is fatal:
/// the pipeline assumes it receives valid text.
#[derive(Debug, Error)]
pub enum PdfReadError {
    #[error("failed to load Pdfium runtime: {0}")]
    Library(#[source] PdfiumError),

    #[error("failed to load PDF document: {0}")]
    Document(#[source] PdfiumError),

    #[error("failed to extract text for page {page_index}: {source}")]
    PageText {
        page_index: usize,
        #[source]
        source: PdfiumError,
    },
}

/// Which pages to read. The defaults skip the cover and table of
/// contents at the front and the annexes at the back of the 2017
/// edition.
#[derive(Debug, Clone, Copy)]
pub struct PageRange {
    pub skip_leading: usize,
    pub skip_trailing: usize,
}

impl Default for PageRange {
    fn default() -> Self {
        PageRange {
            skip_leading: 6,
            skip_trailing: 12,
        }
    }
}

/// An opaque producer of per-page text blobs in reading order.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String>;
}

impl PageSource for Vec<String> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        Ok(self[index].clone())
    }
}

// The reference needs its own lifetime: the document itself borrows
// from the Pdfium runtime, and tying both to one parameter would force
// the borrow to outlive the document's drop.
struct PdfiumPages<'a, 'b> {
    document: &'b PdfDocument<'a>,
}

impl PageSource for PdfiumPages<'_, '_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|source| PdfReadError::PageText {
                page_index: index,
                source,
            })?;
        let text = page.text().map_err(|source| PdfReadError::PageText {
            page_index: index,
            source,
        })?;
        Ok(text.all())
    }
}

/// Read `range` pages of the PDF at `path` and return one text blob,
/// pages joined with a newline.
pub fn extract_pdf_text(path: &Path, range: PageRange) -> Result<String> {
    let pdfium = load_pdfium().map_err(PdfReadError::Library)?;
    let document = pdfium
        .load_pdf_from_file(&path, None)
        .map_err(PdfReadError::Document)?;

    extract_text(&PdfiumPages { document: &document }, range)
}

/// Pull the text of every page in `range` from `source`.
pub fn extract_text(source: &dyn PageSource, range: PageRange) -> Result<String> {
    let count = source.page_count();
    let start = range.skip_leading.min(count);
    let end = count.saturating_sub(range.skip_trailing);

    if start >= end {
        warn!(
            "Page range empty: {} pages, skipping {} leading + {} trailing",
            count,
            range.skip_leading,
            range.skip_trailing
        );
        return Ok(String::new());
    }

    let pb = ProgressBar::new((end - start) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages")?
            .progress_chars("=> "),
    );

    let mut parts = Vec::with_capacity(end - start);
    for index in start..end {
        parts.push(source.page_text(index)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("Extracted {} of {} pages", end - start, count);
    Ok(parts.join("\n"))
}

fn load_pdfium() -> Result<Pdfium, PdfiumError> {
    if let Some(value) = env::var_os("PDFIUM_DYNAMIC_LIB_PATH") {
        return Pdfium::bind_to_library(PathBuf::from(value)).map(Pdfium::new);
    }

    match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./")) {
        Ok(bindings) => Ok(Pdfium::new(bindings)),
        Err(primary) => match Pdfium::bind_to_system_library() {
            Ok(bindings) => Ok(Pdfium::new(bindings)),
            Err(_) => Err(primary),
        },
    }
}

// ── Tests ──
