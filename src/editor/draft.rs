//! The title/body template the user edits.

use std::path::{Path, PathBuf};

use thiserror::Error;

const TITLE_TAG: &str = "Title:";
const BODY_TAG: &str = "Body:";

/// Title and body pulled out of an edited template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    /// Single-line issue title.
    pub title: String,
    /// Free-form body, possibly empty.
    pub body: String,
}

/// Why an edited template could not be read back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The file does not start with the title tag.
    #[error("Title: tag not found in file {}", .path.display())]
    MissingTitleTag {
        /// Template file.
        path: PathBuf,
    },
    /// No line starts with the body tag.
    #[error("Body: tag not found in file {}", .path.display())]
    MissingBodyTag {
        /// Template file.
        path: PathBuf,
    },
    /// The title was left blank.
    #[error("title is empty in file {}", .path.display())]
    EmptyTitle {
        /// Template file.
        path: PathBuf,
    },
    /// The title runs over more than one line.
    #[error("title spans several lines in file {}", .path.display())]
    MultiLineTitle {
        /// Template file.
        path: PathBuf,
    },
}

/// The blank template written before the editor opens.
#[must_use]
pub fn template() -> &'static str {
    "Title: \nBody: \n"
}

/// Renders an existing title and body into the template, for editing.
#[must_use]
pub fn render(title: &str, body: &str) -> String {
    format!("{TITLE_TAG} {title}\n{BODY_TAG} {body}\n")
}

/// Parses an edited template.
///
/// The file must start with `Title:` (a leading byte order mark is
/// ignored); the body begins at the first line starting with `Body:` and
/// runs to the end of the file. The title must fit on one line. Both parts are
/// trimmed, so editors that strip trailing whitespace from the tags are
/// fine.
///
/// # Errors
///
/// Returns a [`DraftError`] naming `path` when a tag is missing or the
/// title is blank or spans several lines.
pub fn parse_draft(content: &str, path: &Path) -> Result<IssueDraft, DraftError> {
    let after_title = content
        .trim_start_matches('\u{feff}')
        .trim_start()
        .strip_prefix(TITLE_TAG)
        .ok_or_else(|| DraftError::MissingTitleTag { path: path.to_path_buf() })?;

    let (title, body) = split_at_body_tag(after_title)
        .ok_or_else(|| DraftError::MissingBodyTag { path: path.to_path_buf() })?;

    let title = title.trim();
    if title.is_empty() {
        return Err(DraftError::EmptyTitle { path: path.to_path_buf() });
    }
    if title.contains('\n') {
        return Err(DraftError::MultiLineTitle { path: path.to_path_buf() });
    }
    Ok(IssueDraft { title: title.to_string(), body: body.trim().to_string() })
}

fn split_at_body_tag(s: &str) -> Option<(&str, &str)> {
    let needle = format!("\n{BODY_TAG}");
    let at = s.find(&needle)?;
    Some((&s[..at], &s[at + needle.len()..]))
}
