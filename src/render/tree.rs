use super::Escaped;
use crate::diff::Diff;
use std::collections::BTreeMap;
use std::fmt;

/// Folder node of the sidebar file tree.
///
/// Paths are split on `/` exactly as they appear in the diff, so `b/src/a.rs`
/// lives under the folders `b` and `src`. Folders render sorted by name,
/// files in diff order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirTree<'a> {
    pub folders: BTreeMap<&'a str, DirTree<'a>>,
    /// `(file index, display name)` pairs
    pub files: Vec<(usize, &'a str)>,
}

impl<'a> DirTree<'a> {
    pub fn build(diff: &'a Diff) -> Self {
        let mut root = Self::default();
        for (index, file) in diff.files.iter().enumerate() {
            root.insert(index, &file.filename);
        }
        root
    }

    pub fn insert(&mut self, index: usize, path: &'a str) {
        let (dirs, name) = match path.rsplit_once('/') {
            Some((dirs, name)) => (Some(dirs), name),
            None => (None, path),
        };

        let mut node = self;
        for segment in dirs.into_iter().flat_map(|d| d.split('/')) {
            node = node.folders.entry(segment).or_default();
        }
        node.files.push((index, name));
    }
}

impl fmt::Display for DirTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, folder) in &self.folders {
            write!(
                f,
                r#"<div class="folder-heading" onclick="toggleFolder(this)"><input type="checkbox" class="folder-checkbox" tabindex="-1" aria-disabled="true"><span class="folder-arrow"></span>{}</div>"#,
                Escaped(name)
            )?;
            write!(f, r#"<div class="folder-contents">{folder}</div>"#)?;
        }

        for (index, name) in &self.files {
            write!(
                f,
                r#"<div class="file-item" data-file="file-{index}" onclick="showFile('file-{index}')"><input type="checkbox" class="file-item-checkbox" onclick="event.stopPropagation();">{}</div>"#,
                Escaped(name)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::FileDiff;
    use similar_asserts::assert_eq;

    fn diff_of(names: &[&str]) -> Diff {
        Diff {
            files: names.iter().map(|name| FileDiff::new(*name)).collect(),
        }
    }

    #[test]
    fn groups_by_path_segment() {
        let diff = diff_of(&["b/src/main.rs", "b/README.md", "b/src/diff/mod.rs", "Makefile"]);
        let tree = DirTree::build(&diff);

        assert_eq!(tree.files, vec![(3, "Makefile")]);
        let b = &tree.folders["b"];
        assert_eq!(b.files, vec![(1, "README.md")]);
        let src = &b.folders["src"];
        assert_eq!(src.files, vec![(0, "main.rs")]);
        assert_eq!(src.folders["diff"].files, vec![(2, "mod.rs")]);
    }

    #[test]
    fn folders_are_sorted() {
        let diff = diff_of(&["zeta/a", "alpha/b", "mid/c"]);
        let tree = DirTree::build(&diff);
        let names: Vec<_> = tree.folders.keys().copied().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn renders_nested_markup() {
        let diff = diff_of(&["x/<y>.txt"]);
        insta::assert_snapshot!(
            DirTree::build(&diff).to_string(),
            @r#"<div class="folder-heading" onclick="toggleFolder(this)"><input type="checkbox" class="folder-checkbox" tabindex="-1" aria-disabled="true"><span class="folder-arrow"></span>x</div><div class="folder-contents"><div class="file-item" data-file="file-0" onclick="showFile('file-0')"><input type="checkbox" class="file-item-checkbox" onclick="event.stopPropagation();">&lt;y&gt;.txt</div></div>"#
        );
    }
}
