//! Document ingestion: stashing an uploaded résumé and extracting its text.

pub mod pdf;
pub mod upload;

use std::path::{Path, PathBuf};

/// Opaque handle to an uploaded résumé document.
///
/// Created at upload time, read exactly once during extraction, dropped when
/// scoring completes. Construction does no validation; the PDF parser is the
/// only judge of whether the bytes are usable.
#[derive(Debug, Clone)]
pub enum ResumeDocument {
    /// A document on local disk, e.g. stashed by [`upload::stash_upload`].
    File(PathBuf),
    /// A document still in memory, straight off the upload surface.
    Bytes(Vec<u8>),
}

impl ResumeDocument {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        ResumeDocument::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        ResumeDocument::Bytes(bytes.into())
    }
}
