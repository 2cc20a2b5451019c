//! Crude "applicant tracking system" (ATS) match scoring for résumés.
//!
//! Two collaborating pieces form the whole library: a PDF text extractor
//! ([`extract`]) and a keyword-overlap scorer ([`scoring`]). Control flow is
//! one synchronous call — hand over a document and a job description, get a
//! [`MatchReport`] back. No persistence, no network, no concurrency; each
//! invocation is independent and stateless.
//!
//! ```no_run
//! use jobmatch::{ats_score, ResumeDocument};
//!
//! let resume = ResumeDocument::from_path("resume.pdf");
//! let score = ats_score(&resume, "Senior Rust engineer, distributed systems");
//! assert!(score <= 100);
//! ```

pub mod errors;
pub mod extract;
pub mod scoring;

pub use errors::MatchError;
pub use extract::ResumeDocument;
pub use scoring::{KeywordScorer, MatchReport, Scorer};

use tracing::debug;

/// Extracts the résumé text and scores it against `job_description`.
///
/// Strict pipeline: extraction failures and empty inputs come back as
/// distinct [`MatchError`] variants so the caller decides how to present
/// them.
pub fn match_resume(
    document: &ResumeDocument,
    job_description: &str,
) -> Result<MatchReport, MatchError> {
    let resume_text = extract::pdf::extract_text(document)?;
    let report = KeywordScorer.score(&resume_text, job_description)?;
    debug!(score = report.score, "scored résumé against job description");
    Ok(report)
}

/// The original tool's observable contract: never fails, always yields a
/// number in `0..=100`. Corrupt document, blank job description, empty
/// extraction — everything collapses to 0.
pub fn ats_score(document: &ResumeDocument, job_description: &str) -> u32 {
    let resume_text = extract::pdf::extract_text_or_empty(document);
    match KeywordScorer.score(&resume_text, job_description) {
        Ok(report) => report.score,
        Err(_) => 0,
    }
}
