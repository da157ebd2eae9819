//! A Markdown document and the pure per-document plan.
//!
//! `plan` decides everything (target name, rewritten content) from the
//! document alone; the renamer then applies the plan to the filesystem.

use crate::front_matter::{self, FrontMatter};
use crate::naming::FileNamer;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What to do with each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rename after the title; content untouched.
    Rename,
    /// Rename after the title, then remove the front matter block.
    Strip,
}

/// A document read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    /// Current location on disk.
    pub path: PathBuf,
    /// `path` relative to the docs root (or `path` itself when outside it).
    pub rel_path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn new(root: &Path, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let rel_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        Self {
            path,
            rel_path,
            content: content.into(),
        }
    }

    /// Read `path` as UTF-8 text.
    pub fn read(root: &Path, path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(root, path, content))
    }

    /// Front matter title, if any.
    pub fn title(&self) -> Option<String> {
        front_matter::extract_title(&self.content)
    }

    /// Extension of the current file name, without the dot.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn has_file_name(&self, name: &str) -> bool {
        self.path.file_name().is_some_and(|n| n == name)
    }
}

/// Why a document was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No front matter block, or no non-empty `title:` in it.
    NoTitle,
    /// The title sanitizes to nothing.
    EmptyName { title: String },
}

/// Planned changes for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Skip(SkipReason),
    Apply {
        /// Target file name (same directory).
        file_name: String,
        /// False when the document already has `file_name`.
        rename: bool,
        /// New content to write after the rename (`Mode::Strip`).
        rewritten: Option<String>,
    },
}

/// Decide what happens to `doc` without touching the filesystem.
pub fn plan(doc: &Document, namer: &FileNamer, mode: Mode) -> Plan {
    let Some(front) = FrontMatter::parse(&doc.content) else {
        return Plan::Skip(SkipReason::NoTitle);
    };
    let Some(title) = front.title() else {
        return Plan::Skip(SkipReason::NoTitle);
    };

    let Some(file_name) = namer.file_name(title, &doc.rel_path, &doc.extension()) else {
        return Plan::Skip(SkipReason::EmptyName {
            title: title.to_string(),
        });
    };

    let rename = !doc.has_file_name(&file_name);
    let rewritten = match mode {
        Mode::Rename => None,
        Mode::Strip => Some(front.body().trim_start().to_string()),
    };

    Plan::Apply {
        file_name,
        rename,
        rewritten,
    }
}
