//! Per-document outcomes and run totals.

use super::error::ProcessError;
use crate::document::SkipReason;
use std::path::PathBuf;

/// What happened to one document.
#[derive(Debug)]
pub enum Outcome {
    Skipped(SkipReason),
    /// Already correctly named and nothing to rewrite.
    Unchanged,
    Processed {
        /// New path, when the document was renamed.
        renamed_to: Option<PathBuf>,
        /// Front matter removed and the file rewritten.
        stripped: bool,
    },
    Failed(ProcessError),
}

/// Outcome of one document, as handed to the run callback.
#[derive(Debug)]
pub struct FileReport {
    /// Path the document had when the run started.
    pub path: PathBuf,
    pub outcome: Outcome,
    /// Nothing was written; the outcome is what would have happened.
    pub dry_run: bool,
}

/// Totals for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Documents seen; a document renamed before failing counts once here.
    pub documents: usize,
    pub renamed: usize,
    pub stripped: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.documents += 1;
        match outcome {
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Processed {
                renamed_to,
                stripped,
            } => {
                if renamed_to.is_some() {
                    self.renamed += 1;
                } else {
                    self.unchanged += 1;
                }
                if *stripped {
                    self.stripped += 1;
                }
            }
            Outcome::Failed(err) => {
                if err.renamed_to().is_some() {
                    self.renamed += 1;
                }
                self.failed += 1;
            }
        }
    }

    pub fn total(&self) -> usize {
        self.documents
    }
}
