use thiserror::Error;

/// Library-level error type.
///
/// The tool this library grew out of mapped every failure to a score of 0.
/// Callers that still want that can use [`crate::ats_score`]; everything
/// else gets a distinct error and decides presentation itself.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The document could not be read or parsed as a PDF.
    #[error("failed to extract text from document: {0}")]
    Extraction(#[from] pdf_extract::OutputError),

    /// Copying the uploaded byte stream into a local scratch file failed.
    #[error("failed to stash uploaded document: {0}")]
    Upload(#[from] std::io::Error),

    /// The job description was empty or whitespace-only.
    #[error("job description is blank")]
    EmptyJobDescription,

    /// No text to score: empty document, scanned/image-only PDF, or a
    /// fail-soft extraction that already swallowed a parse error upstream.
    #[error("résumé text is empty")]
    EmptyResumeText,
}
