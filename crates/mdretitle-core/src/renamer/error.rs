//! Per-document failures. None of these stop the run.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Another document already owns the target name; never overwritten.
    #[error(
        "rename failed for {}: {} already exists",
        .from.display(),
        .to.display()
    )]
    TargetExists { from: PathBuf, to: PathBuf },

    #[error("rename failed for {}: {source}", .from.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rewrite failed. `renamed_to` is set when the rename before it
    /// already went through, so `path` is the document's new location.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        renamed_to: Option<PathBuf>,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// New path of a document that was renamed before the failure.
    pub fn renamed_to(&self) -> Option<&Path> {
        match self {
            ProcessError::Write { renamed_to, .. } => renamed_to.as_deref(),
            _ => None,
        }
    }
}
