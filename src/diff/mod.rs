//! Unified diff model and parser.
//!
//! A [`Diff`] holds one [`FileDiff`] per `diff --git` header, in input order.
//! Each file holds its [`Hunk`]s, and each hunk its typed [`DiffLine`]s with
//! old/new line numbers taken from the `@@` header.

pub mod file;
pub mod full;
pub mod hunk;

pub use file::FileDiff;
pub use full::Diff;
pub use hunk::{DiffLine, Hunk, HunkHeader, LineKind};
