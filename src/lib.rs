use error_set::error_set;
use std::fs;
use std::path::Path;

pub mod align;
pub mod diff;
pub mod render;

pub use align::{Cell, Row, RowKind, Side, align};
pub use diff::{Diff, DiffLine, FileDiff, Hunk, HunkHeader, LineKind};
pub use render::render_html;

error_set! {
    /// Errors from converting a diff file into an HTML page
    DiffHtmlError := {
        /// Input diff could not be read (missing, unreadable, or not UTF-8)
        #[display("Failed to read diff {path}: {message}")]
        ReadFailed { path: String, message: String },
        /// Output page could not be written
        #[display("Failed to write {path}: {message}")]
        WriteFailed { path: String, message: String },
    }
}

/// Render unified diff text as a standalone HTML page
///
/// # Examples
/// ```
/// let html = diff_to_html::diff_to_html(
///     "diff --git a/a.txt b/a.txt\n@@ -1 +1 @@\n-old\n+new\n",
/// );
/// assert!(html.contains(r#"<tr class="changed">"#));
/// ```
pub fn diff_to_html(text: &str) -> String {
    render_html(&Diff::parse(text))
}

/// Read the diff at `input`, render it, and write the page to `output`.
///
/// Returns the parsed diff so callers can report on it.
///
/// # Errors
///
/// Returns [`DiffHtmlError`] if the input cannot be read as UTF-8 text or the
/// output cannot be written. Malformed diff content is never an error.
pub fn convert_file(input: &Path, output: &Path) -> Result<Diff, DiffHtmlError> {
    let text = fs::read_to_string(input).map_err(|e| DiffHtmlError::ReadFailed {
        path: input.display().to_string(),
        message: e.to_string(),
    })?;
    log::info!("Read {} bytes from {}", text.len(), input.display());

    let diff = Diff::parse(&text);
    let html = render_html(&diff);

    fs::write(output, html).map_err(|e| DiffHtmlError::WriteFailed {
        path: output.display().to_string(),
        message: e.to_string(),
    })?;
    log::info!("Rendered {} files to {}", diff.files.len(), output.display());

    Ok(diff)
}
