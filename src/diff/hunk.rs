use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, digit0, u32 as line_number},
    combinator::opt,
    sequence::preceded,
};

/// Which version(s) of the file a diff line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Added,
    Removed,
    Unchanged,
}

/// A single line inside a hunk, with its diff marker and line ending stripped.
///
/// Line numbers are `None` when the enclosing hunk header could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    /// Line only present in the new version
    Added { new_line: Option<u32>, text: String },
    /// Line only present in the old version
    Removed { old_line: Option<u32>, text: String },
    /// Context line present in both versions
    Unchanged {
        old_line: Option<u32>,
        new_line: Option<u32>,
        text: String,
    },
}

impl DiffLine {
    pub fn kind(&self) -> LineKind {
        match self {
            DiffLine::Added { .. } => LineKind::Added,
            DiffLine::Removed { .. } => LineKind::Removed,
            DiffLine::Unchanged { .. } => LineKind::Unchanged,
        }
    }

    /// Line number in the old version (never set for additions)
    pub fn old_line(&self) -> Option<u32> {
        match self {
            DiffLine::Added { .. } => None,
            DiffLine::Removed { old_line, .. } | DiffLine::Unchanged { old_line, .. } => *old_line,
        }
    }

    /// Line number in the new version (never set for removals)
    pub fn new_line(&self) -> Option<u32> {
        match self {
            DiffLine::Removed { .. } => None,
            DiffLine::Added { new_line, .. } | DiffLine::Unchanged { new_line, .. } => *new_line,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DiffLine::Added { text, .. }
            | DiffLine::Removed { text, .. }
            | DiffLine::Unchanged { text, .. } => text,
        }
    }
}

/// Start positions from a `@@ -old[,count] +new[,count] @@` header.
///
/// Counts are accepted but not kept: line numbering only needs the starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: u32,
    pub new_start: u32,
}

impl HunkHeader {
    /// Parse a hunk header line. Anything after the closing `@@` (usually the
    /// enclosing function name) is ignored.
    ///
    /// Returns `None` if the line does not have the expected shape.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        header(line).ok().map(|(_, header)| header)
    }
}

fn header(input: &str) -> IResult<&str, HunkHeader> {
    (
        tag("@@ -"),
        line_number,
        opt(preceded(char(','), digit0)),
        tag(" +"),
        line_number,
        opt(preceded(char(','), digit0)),
        tag(" @@"),
    )
        .map(|(_, old_start, _, _, new_start, _, _)| HunkHeader {
            old_start,
            new_start,
        })
        .parse(input)
}

/// A single hunk from a unified diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hunk {
    /// Parsed header, `None` if it was malformed
    pub header: Option<HunkHeader>,
    /// Lines in file order
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    pub fn new(header: Option<HunkHeader>) -> Self {
        Self {
            header,
            lines: Vec::new(),
        }
    }
}
