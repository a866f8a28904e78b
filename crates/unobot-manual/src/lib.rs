//! Reference manual loading.
//!
//! The manual is read once at startup and turned into a single string:
//! the raw text of every page, in page order, with nothing inserted
//! between pages. Extraction quality is whatever the PDF library yields;
//! garbled text is passed through unchanged.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use unobot_common::ManualError;

/// The extracted manual text. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ManualContext {
    path: PathBuf,
    page_count: usize,
    text: String,
}

impl ManualContext {
    /// Read and extract the manual at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManualError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManualError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| ManualError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read manual");

        let pages = extract_pages(&bytes).map_err(|reason| ManualError::Extract {
            path: path.to_path_buf(),
            reason,
        })?;

        let context = Self::from_pages(path, &pages);
        info!(
            path = %path.display(),
            pages = context.page_count,
            chars = context.text.chars().count(),
            "manual loaded"
        );
        Ok(context)
    }

    /// Build a context from already-extracted page text.
    pub fn from_pages<S: AsRef<str>>(path: impl Into<PathBuf>, pages: &[S]) -> Self {
        Self {
            path: path.into(),
            page_count: pages.len(),
            text: join_pages(pages),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Concatenate page text in order, with no separators.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let len = pages.iter().map(|p| p.as_ref().len()).sum();
    pages
        .iter()
        .fold(String::with_capacity(len), |mut text, page| {
            text.push_str(page.as_ref());
            text
        })
}

/// Extract the raw text of each page, in page order.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, String> {
    pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| e.to_string())
}
