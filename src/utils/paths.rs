use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};
use chrono::NaiveDate;

pub const DOCUMENT_EXTENSION: &str = "md";

/// Path of a document relative to the output root, always `/`-separated:
/// `YYYY/MM-DD/<session-id>.md`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use transcript_export::utils::relative_document_path;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// assert_eq!(relative_document_path(date, "abc"), "2025/03-09/abc.md");
/// ```
pub fn relative_document_path(date: NaiveDate, session_id: &str) -> String {
    format!("{}/{}/{}.{}", date.format("%Y"), date.format("%m-%d"), session_id, DOCUMENT_EXTENSION)
}

/// Absolute location of a document under `output_dir`.
pub fn document_path(output_dir: &Path, date: NaiveDate, session_id: &str) -> PathBuf {
    output_dir
        .join(date.format("%Y").to_string())
        .join(date.format("%m-%d").to_string())
        .join(format!("{}.{}", session_id, DOCUMENT_EXTENSION))
}

/// Session ids become file names, so they must be a single normal path component.
///
/// # Errors
///
/// Returns an error if the id is empty, contains a path separator or a control
/// character, or is `.`/`..`. Ids are also written one per line to the export
/// state and on a single frontmatter line, so a newline must never get through.
pub fn validate_session_id(session_id: &str) -> Result<()> {
    if session_id.is_empty() {
        bail!("Session ID cannot be empty");
    }
    if session_id.chars().any(char::is_control) {
        bail!("Session ID contains a control character: {:?}", session_id);
    }
    if session_id.contains('/') || session_id.contains('\\') {
        bail!("Session ID contains a path separator: {}", session_id);
    }

    let mut components = Path::new(session_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("Session ID is not a valid file name: {}", session_id),
    }
}
