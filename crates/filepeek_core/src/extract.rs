use once_cell::sync::Lazy;
use regex::Regex;

/// Substitute file name when the label is missing or does not match.
pub const DEFAULT_FILE_NAME: &str = "downloaded_file.pdf";

/// Substitute file identifier when the DOM identifier yields nothing usable.
pub const DEFAULT_FILE_ID: &str = "unknown";

/// Matches a file name ending in a recognized extension, immediately followed
/// by a parenthesized size annotation, e.g. `report.pdf(206KB)`.
static FILE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([^/]+(?:\.pdf|\.png|\.jpg|\.jpeg))\s*\(\d+KB\)")
        .expect("valid file name pattern")
});

/// A fetch request inferred from a download control. Both fields are always
/// non-empty; extraction substitutes defaults instead of failing, so
/// downstream logic only branches on fetch success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_id: String,
    pub file_name: String,
}

impl DownloadRequest {
    /// Builds a request from a control's DOM identifier and the text of its
    /// file-name label, if the adapter found one.
    pub fn from_control(dom_id: &str, name_label: Option<&str>) -> Self {
        Self {
            file_id: file_id_from_dom_id(dom_id),
            file_name: file_name_from_label(name_label),
        }
    }
}

/// Derives the file identifier from a control's DOM identifier: the last
/// non-empty colon-delimited segment.
///
/// The identifier is a best-effort proxy for the host system's real file id;
/// beyond non-emptiness no validation is done. Fallbacks, in order: the whole
/// trimmed identifier, then [`DEFAULT_FILE_ID`].
pub fn file_id_from_dom_id(dom_id: &str) -> String {
    if let Some(segment) = dom_id.rsplit(':').map(str::trim).find(|s| !s.is_empty()) {
        return segment.to_string();
    }
    let trimmed = dom_id.trim();
    if trimmed.is_empty() {
        DEFAULT_FILE_ID.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derives the file name from the label text next to a download control.
///
/// Returns the matched `<name>.<ext>` portion of a `<name>.<ext>(<size>KB)`
/// label, trimmed. Falls back to [`DEFAULT_FILE_NAME`] when the label is
/// absent or the pattern does not match. Never fails.
pub fn file_name_from_label(name_label: Option<&str>) -> String {
    name_label
        .and_then(|text| FILE_NAME_PATTERN.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
}
