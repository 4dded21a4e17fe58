use super::file::FileDiff;
use super::hunk::{DiffLine, Hunk, HunkHeader};
use log::{debug, trace, warn};

/// A complete unified diff containing changes for multiple files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub files: Vec<FileDiff>,
}

impl Diff {
    /// Parse a complete unified diff.
    ///
    /// Parsing never fails: a malformed hunk header leaves that hunk's line
    /// numbers unset, and lines outside of any hunk are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Parse a diff that has already been split into lines.
    ///
    /// Lines may keep their `\n` / `\r\n` terminators.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(ParseState::default(), |state, line| state.feed(line.as_ref()))
            .finish()
    }
}

/// Accumulator threaded through the line scan
#[derive(Default)]
struct ParseState {
    files: Vec<FileDiff>,
    file: Option<FileDiff>,
    hunk: Option<Hunk>,
    old_line: Option<u32>,
    new_line: Option<u32>,
}

impl ParseState {
    fn feed(mut self, raw: &str) -> Self {
        let line = strip_line_ending(raw);

        if line.starts_with("diff --git") {
            self.close_file();
            let file = FileDiff::from_header(line);
            debug!("Found file in diff: {}", file.filename);
            self.file = Some(file);
        } else if line.starts_with("@@") {
            self.close_hunk();
            let header = HunkHeader::parse(line);
            if header.is_none() {
                warn!("Malformed hunk header {line:?}, line numbers unavailable for this hunk");
            }
            self.old_line = header.map(|h| h.old_start);
            self.new_line = header.map(|h| h.new_start);
            self.hunk = Some(Hunk::new(header));
        } else if let Some(hunk) = self.hunk.as_mut() {
            if let Some(text) = line.strip_prefix('+').filter(|_| !line.starts_with("+++")) {
                hunk.lines.push(DiffLine::Added {
                    new_line: self.new_line,
                    text: text.to_string(),
                });
                self.new_line = advance(self.new_line);
            } else if let Some(text) = line.strip_prefix('-').filter(|_| !line.starts_with("---")) {
                hunk.lines.push(DiffLine::Removed {
                    old_line: self.old_line,
                    text: text.to_string(),
                });
                self.old_line = advance(self.old_line);
            } else if let Some(text) = line.strip_prefix(' ') {
                hunk.lines.push(DiffLine::Unchanged {
                    old_line: self.old_line,
                    new_line: self.new_line,
                    text: text.to_string(),
                });
                self.old_line = advance(self.old_line);
                self.new_line = advance(self.new_line);
            } else {
                trace!("Skipping unmarked line in hunk: {line:?}");
            }
        } else {
            trace!("Skipping line outside of any hunk: {line:?}");
        }

        self
    }

    fn close_hunk(&mut self) {
        let Some(hunk) = self.hunk.take() else {
            return;
        };

        match self.file.as_mut() {
            Some(file) => {
                debug!("Adding hunk with {} lines to {}", hunk.lines.len(), file.filename);
                file.hunks.push(hunk);
            }
            None => debug!("Dropping hunk with no preceding file header"),
        }
    }

    fn close_file(&mut self) {
        self.close_hunk();
        if let Some(file) = self.file.take() {
            self.files.push(file);
        }
    }

    fn finish(mut self) -> Diff {
        self.close_file();
        debug!("Parsed {} files", self.files.len());
        Diff { files: self.files }
    }
}

fn strip_line_ending(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

fn advance(counter: Option<u32>) -> Option<u32> {
    counter.and_then(|n| n.checked_add(1))
}
