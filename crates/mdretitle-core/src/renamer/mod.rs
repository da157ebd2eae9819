//! Walk the docs root and rename (and optionally strip) every document.
//!
//! Documents are handled one at a time, sequentially. Each one is read,
//! planned (`document::plan`) and applied; a failure is reported for that
//! document and the run moves on to the next.

mod apply;
mod error;
mod report;

pub use error::ProcessError;
pub use report::{FileReport, Outcome, Summary};

use crate::document::{self, Document, Mode, SkipReason};
use crate::naming::FileNamer;
use crate::walker;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Extension of the documents picked up by default.
pub const DEFAULT_EXTENSION: &str = "md";

pub struct Renamer {
    root: PathBuf,
    namer: FileNamer,
    mode: Mode,
    extension: String,
    dry_run: bool,
}

impl Renamer {
    pub fn new(root: impl Into<PathBuf>, namer: FileNamer, mode: Mode) -> Self {
        Self {
            root: root.into(),
            namer,
            mode,
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    /// Only report what would change.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Extension (without the dot) of the files to process.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Read, plan and apply a single document.
    pub fn process_file(&self, path: &Path) -> Outcome {
        let doc = match Document::read(&self.root, path) {
            Ok(doc) => doc,
            Err(source) => {
                return Outcome::Failed(ProcessError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let plan = document::plan(&doc, &self.namer, self.mode);
        apply::apply(&doc, plan, self.dry_run)
    }

    /// Process every document under the root, calling `on_file` after each.
    ///
    /// Only a missing or unreadable root fails the run; per-document
    /// failures are counted in the returned summary.
    pub fn run<F>(&self, mut on_file: F) -> Result<Summary>
    where
        F: FnMut(&FileReport),
    {
        let files = walker::collect_documents(&self.root, &self.extension)?;
        tracing::info!(
            root = %self.root.display(),
            documents = files.len(),
            mode = ?self.mode,
            dry_run = self.dry_run,
            "processing documents"
        );

        let mut summary = Summary::default();
        for path in files {
            let outcome = self.process_file(&path);
            log_outcome(&path, &outcome);
            summary.record(&outcome);
            on_file(&FileReport {
                path,
                outcome,
                dry_run: self.dry_run,
            });
        }

        tracing::info!(?summary, "run finished");
        Ok(summary)
    }
}

fn log_outcome(path: &Path, outcome: &Outcome) {
    let path = path.display();
    match outcome {
        Outcome::Skipped(SkipReason::NoTitle) => {
            tracing::warn!(%path, "no title found");
        }
        Outcome::Skipped(SkipReason::EmptyName { title }) => {
            tracing::warn!(%path, title = %title, "title leaves no usable file name");
        }
        Outcome::Unchanged => tracing::debug!(%path, "already named after its title"),
        Outcome::Processed {
            renamed_to,
            stripped,
        } => {
            tracing::info!(
                %path,
                renamed_to = ?renamed_to,
                stripped,
                "processed"
            );
        }
        Outcome::Failed(err) => tracing::error!(%path, error = %err, "document failed"),
    }
}
