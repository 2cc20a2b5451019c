//! PDF text extraction — a thin wrapper around `pdf-extract`.
//!
//! Two contracts: a strict one that surfaces read/parse failures as
//! [`MatchError::Extraction`], and the fail-soft one the original upload
//! screen relied on, where any failure collapses to an empty string.

use tracing::{debug, warn};

use crate::errors::MatchError;
use crate::extract::ResumeDocument;

/// Extracts the plain-text contents of a résumé document.
///
/// No size or encoding constraints are enforced here; whatever `pdf-extract`
/// accepts is accepted.
pub fn extract_text(document: &ResumeDocument) -> Result<String, MatchError> {
    let text = match document {
        ResumeDocument::File(path) => pdf_extract::extract_text(path)?,
        ResumeDocument::Bytes(bytes) => pdf_extract::extract_text_from_mem(bytes)?,
    };
    debug!(chars = text.len(), "extracted résumé text");
    Ok(text)
}

/// Fail-soft variant: any extraction failure becomes an empty string so the
/// caller always has something to score. The failure is logged and otherwise
/// swallowed.
pub fn extract_text_or_empty(document: &ResumeDocument) -> String {
    match extract_text(document) {
        Ok(text) => text,
        Err(e) => {
            warn!("résumé text extraction failed, treating as empty: {e}");
            String::new()
        }
    }
}
