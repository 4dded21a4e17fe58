//! Side-by-side alignment of diff lines.
//!
//! [`align`] turns the flat line list of one file into [`Row`]s, each pairing
//! an old-side [`Cell`] with a new-side [`Cell`]. Projecting every row onto
//! one [`Side`] gives that pane's column, so both columns always have the
//! same length.
//!
//! Pairing is a single forward scan with one line of lookahead: a removal
//! immediately followed by an addition becomes one [`RowKind::Changed`] row.
//! There is no similarity matching, so in a block of several removals
//! followed by several additions only the removal adjacent to the first
//! addition is paired.
//!
//! ```
//! use diff_to_html::{Diff, RowKind};
//!
//! let diff = Diff::parse("diff --git a/a b/a\n@@ -1,2 +1,2 @@\n-x\n+y\n z\n");
//! let rows = diff.files[0].align();
//! assert_eq!(rows[0].kind, RowKind::Changed);
//! assert_eq!(rows[1].kind, RowKind::Unchanged);
//! ```

use crate::diff::{DiffLine, LineKind};

/// How a row should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Line only on the new side, old side blank
    Added,
    /// Line only on the old side, new side blank
    Removed,
    /// Same line on both sides
    Unchanged,
    /// Removed line shown next to the addition that replaced it
    Changed,
}

impl RowKind {
    /// Name used as the CSS class of the row
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Added => "added",
            RowKind::Removed => "removed",
            RowKind::Unchanged => "unchanged",
            RowKind::Changed => "changed",
        }
    }
}

/// Which pane of the side-by-side view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

/// One side of a row. A blank cell has no number and no text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell<'a> {
    pub line_number: Option<u32>,
    pub text: &'a str,
}

impl<'a> Cell<'a> {
    pub fn blank() -> Self {
        Self::default()
    }

    fn old_side(line: &'a DiffLine) -> Self {
        Self {
            line_number: line.old_line(),
            text: line.text(),
        }
    }

    fn new_side(line: &'a DiffLine) -> Self {
        Self {
            line_number: line.new_line(),
            text: line.text(),
        }
    }
}

/// One visual line of the side-by-side view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub old: Cell<'a>,
    pub new: Cell<'a>,
    pub kind: RowKind,
}

impl<'a> Row<'a> {
    pub fn cell(&self, side: Side) -> &Cell<'a> {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }
}

/// Pair up a file's diff lines for side-by-side display.
///
/// Every input line ends up in exactly one row.
pub fn align<'a>(lines: &[&'a DiffLine]) -> Vec<Row<'a>> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        match line.kind() {
            LineKind::Unchanged => {
                rows.push(Row {
                    old: Cell::old_side(line),
                    new: Cell::new_side(line),
                    kind: RowKind::Unchanged,
                });
                i += 1;
            }
            LineKind::Removed => match lines.get(i + 1) {
                Some(&next) if next.kind() == LineKind::Added => {
                    rows.push(Row {
                        old: Cell::old_side(line),
                        new: Cell::new_side(next),
                        kind: RowKind::Changed,
                    });
                    i += 2;
                }
                _ => {
                    rows.push(Row {
                        old: Cell::old_side(line),
                        new: Cell::blank(),
                        kind: RowKind::Removed,
                    });
                    i += 1;
                }
            },
            LineKind::Added => {
                rows.push(Row {
                    old: Cell::blank(),
                    new: Cell::new_side(line),
                    kind: RowKind::Added,
                });
                i += 1;
            }
        }
    }

    rows
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn added(new_line: u32, text: &str) -> DiffLine {
        DiffLine::Added {
            new_line: Some(new_line),
            text: text.to_string(),
        }
    }

    fn removed(old_line: u32, text: &str) -> DiffLine {
        DiffLine::Removed {
            old_line: Some(old_line),
            text: text.to_string(),
        }
    }

    fn unchanged(old_line: u32, new_line: u32, text: &str) -> DiffLine {
        DiffLine::Unchanged {
            old_line: Some(old_line),
            new_line: Some(new_line),
            text: text.to_string(),
        }
    }

    fn cell(line_number: u32, text: &str) -> Cell<'_> {
        Cell {
            line_number: Some(line_number),
            text,
        }
    }

    fn run(lines: &[DiffLine]) -> Vec<Row<'_>> {
        align(&lines.iter().collect::<Vec<_>>())
    }

    #[test]
    fn empty_input() {
        assert_eq!(run(&[]), vec![]);
    }

    #[test]
    fn unchanged_lines_align() {
        let lines = vec![unchanged(10, 12, "fn main() {")];
        assert_eq!(
            run(&lines),
            vec![Row {
                old: cell(10, "fn main() {"),
                new: cell(12, "fn main() {"),
                kind: RowKind::Unchanged,
            }]
        );
    }

    #[test]
    fn removal_then_addition_is_a_change() {
        let lines = vec![removed(4, "let x = 1;"), added(4, "let x = 2;")];
        assert_eq!(
            run(&lines),
            vec![Row {
                old: cell(4, "let x = 1;"),
                new: cell(4, "let x = 2;"),
                kind: RowKind::Changed,
            }]
        );
    }

    #[test]
    fn addition_then_removal_is_not_paired() {
        let lines = vec![added(4, "new"), removed(4, "old")];
        assert_eq!(
            run(&lines),
            vec![
                Row {
                    old: Cell::blank(),
                    new: cell(4, "new"),
                    kind: RowKind::Added,
                },
                Row {
                    old: cell(4, "old"),
                    new: Cell::blank(),
                    kind: RowKind::Removed,
                },
            ]
        );
    }

    #[test]
    fn trailing_removal_is_pure() {
        let lines = vec![unchanged(1, 1, "a"), removed(2, "b")];
        let rows = run(&lines);
        assert_eq!(rows[1].kind, RowKind::Removed);
        assert_eq!(rows[1].new, Cell::blank());
    }

    #[test]
    fn removal_block_pairs_only_adjacent_line() {
        // Three removals followed by two additions: only old#7 touches an
        // addition, so it is the single changed row.
        let lines = vec![
            removed(5, "r5"),
            removed(6, "r6"),
            removed(7, "r7"),
            added(5, "a5"),
            added(6, "a6"),
        ];
        assert_eq!(
            run(&lines),
            vec![
                Row {
                    old: cell(5, "r5"),
                    new: Cell::blank(),
                    kind: RowKind::Removed,
                },
                Row {
                    old: cell(6, "r6"),
                    new: Cell::blank(),
                    kind: RowKind::Removed,
                },
                Row {
                    old: cell(7, "r7"),
                    new: cell(5, "a5"),
                    kind: RowKind::Changed,
                },
                Row {
                    old: Cell::blank(),
                    new: cell(6, "a6"),
                    kind: RowKind::Added,
                },
            ]
        );
    }

    #[test]
    fn alternating_changes_each_pair() {
        let lines = vec![
            removed(1, "a"),
            added(1, "A"),
            removed(2, "b"),
            added(2, "B"),
        ];
        let kinds: Vec<_> = run(&lines).iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RowKind::Changed, RowKind::Changed]);
    }

    #[test]
    fn unnumbered_lines_keep_text() {
        let lines = vec![DiffLine::Unchanged {
            old_line: None,
            new_line: None,
            text: "ctx".to_string(),
        }];
        let rows = run(&lines);
        assert_eq!(rows[0].old, Cell { line_number: None, text: "ctx" });
        assert_eq!(rows[0].cell(Side::New).text, "ctx");
    }

    #[test]
    fn row_kind_names() {
        let names: Vec<_> = [
            RowKind::Added,
            RowKind::Removed,
            RowKind::Unchanged,
            RowKind::Changed,
        ]
        .into_iter()
        .map(RowKind::as_str)
        .collect();
        insta::assert_snapshot!(names.join(" "), @"added removed unchanged changed");
    }
}
