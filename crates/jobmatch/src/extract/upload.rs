//! Upload stashing — copies an uploaded byte stream into a scratch file.
//!
//! The host UI hands us a reader over the selected document; we land it in
//! the caller's scratch directory and return a [`ResumeDocument`] pointing
//! at it. The write goes through a temp file and a rename so a half-copied
//! upload never shadows a previous good one.

use std::io::{self, Read};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::MatchError;
use crate::extract::ResumeDocument;

/// File name the stashed upload lands under, one per scratch directory.
/// Re-uploading replaces the previous document.
pub const UPLOAD_FILE_NAME: &str = "uploaded_resume.pdf";

/// Copies `reader` into `scratch_dir` and returns a handle to the stashed
/// file. I/O failures come back as [`MatchError::Upload`] so the caller can
/// show an upload-failure notice.
pub fn stash_upload<R: Read>(
    mut reader: R,
    scratch_dir: &Path,
) -> Result<ResumeDocument, MatchError> {
    let mut tmp = NamedTempFile::new_in(scratch_dir)?;
    let bytes = io::copy(&mut reader, tmp.as_file_mut())?;

    let dest = scratch_dir.join(UPLOAD_FILE_NAME);
    tmp.persist(&dest).map_err(|e| MatchError::Upload(e.error))?;

    debug!(bytes, path = %dest.display(), "stashed uploaded résumé");
    Ok(ResumeDocument::File(dest))
}
