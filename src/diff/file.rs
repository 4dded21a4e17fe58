use super::hunk::{DiffLine, Hunk};
use crate::align::{Row, align};

/// All hunks for a single file in a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// File name exactly as it appears in the `diff --git` header
    pub filename: String,
    /// All hunks for this file, possibly none (e.g. a pure rename)
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            hunks: Vec::new(),
        }
    }

    /// Start a file from its `diff --git a/path b/path` header.
    ///
    /// The file name is the last whitespace-separated token, kept verbatim:
    /// the `b/` prefix stays, and paths containing spaces come out truncated.
    #[must_use]
    pub fn from_header(line: &str) -> Self {
        Self::new(line.split_whitespace().last().unwrap_or_default())
    }

    /// Every line of every hunk, in file order
    pub fn lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.hunks.iter().flat_map(|hunk| hunk.lines.iter())
    }

    /// Side-by-side rows for this file, with hunk boundaries flattened
    #[must_use]
    pub fn align(&self) -> Vec<Row<'_>> {
        align(&self.lines().collect::<Vec<_>>())
    }
}
