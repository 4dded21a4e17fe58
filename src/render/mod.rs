//! Standalone HTML page for a parsed diff.
//!
//! The page has a file explorer sidebar on the left (see [`DirTree`]) and one
//! side-by-side section per file. Each section is identified by the file's
//! position in the diff (`file-0`, `file-1`, ...), which is what the sidebar
//! entries point at. CSS and JS are inlined so the output is a single file.

mod tree;

pub use tree::DirTree;

use crate::align::{Row, Side};
use crate::diff::{Diff, FileDiff};
use std::fmt;

const STYLE: &str = include_str!("../../assets/page.css");
const SCRIPT: &str = include_str!("../../assets/page.js");

/// Render a parsed diff as a complete HTML document
pub fn render_html(diff: &Diff) -> String {
    Page(diff).to_string()
}

/// The complete HTML document for a diff
pub struct Page<'a>(pub &'a Diff);

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diff = self.0;

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html><head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(f, "<title>Diff</title>")?;
        writeln!(f, "<style>\n{STYLE}</style>")?;
        writeln!(f, "<script>\n{SCRIPT}</script>")?;
        writeln!(f, "</head><body>")?;
        writeln!(f, r#"<div class="container">"#)?;

        writeln!(f, r#"<div class="file-explorer">"#)?;
        writeln!(f, "<h2>Files</h2>")?;
        writeln!(f, "{}", DirTree::build(diff))?;
        writeln!(f, "</div>")?;
        writeln!(f, r#"<div id="sidebar-resizer" class="resizer"></div>"#)?;

        writeln!(f, r#"<div class="diff-view">"#)?;
        for (index, file) in diff.files.iter().enumerate() {
            write!(f, "{}", FileSection { index, file })?;
        }
        writeln!(f, "</div>")?;

        writeln!(f, "</div>")?;
        write!(f, "</body></html>")
    }
}

/// Old and new panes for one file
pub struct FileSection<'a> {
    pub index: usize,
    pub file: &'a FileDiff,
}

impl fmt::Display for FileSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.file.align();

        writeln!(
            f,
            r#"<div id="diff-file-{}" class="diff-section">"#,
            self.index
        )?;
        writeln!(f, "<h2>{}</h2>", Escaped(&self.file.filename))?;
        writeln!(f, r#"<div class="panes">"#)?;
        write!(f, "{}", Pane { side: Side::Old, rows: &rows })?;
        write!(f, "{}", Pane { side: Side::New, rows: &rows })?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }
}

struct Pane<'a, 'r> {
    side: Side,
    rows: &'r [Row<'a>],
}

impl fmt::Display for Pane<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, container) = match self.side {
            Side::Old => ("Old Code", "old-container"),
            Side::New => ("New Code", "new-container"),
        };

        writeln!(f, r#"<div class="pane">"#)?;
        writeln!(f, "<h3>{title}</h3>")?;
        writeln!(f, r#"<div class="{container} scroller">"#)?;
        writeln!(f, r#"<table class="diff">"#)?;
        writeln!(f, "<tr><th>Line</th><th>Code</th></tr>")?;
        for row in self.rows {
            let cell = row.cell(self.side);
            writeln!(
                f,
                r#"<tr class="{}"><td class="lineno">{}</td><td class="code">{}</td></tr>"#,
                row.kind.as_str(),
                LineNumber(cell.line_number),
                Escaped(cell.text)
            )?;
        }
        writeln!(f, "</table></div></div>")
    }
}

/// Line number cell content; blank when the number is unknown
struct LineNumber(Option<u32>);

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => Ok(()),
        }
    }
}

/// Text with `& < > " '` replaced by HTML entities
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            f.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#x27;",
            })?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}
