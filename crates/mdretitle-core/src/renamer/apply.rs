//! Applying a plan to the filesystem.

use super::error::ProcessError;
use super::report::Outcome;
use crate::document::{Document, Plan};
use crate::storage;
use std::fs;
use std::path::Path;

/// Rename, then rewrite, as planned. A failed rename stops here so the
/// rewrite never targets a stale path. With `dry_run` nothing is written.
pub(super) fn apply(doc: &Document, plan: Plan, dry_run: bool) -> Outcome {
    let (file_name, rename, rewritten) = match plan {
        Plan::Skip(reason) => return Outcome::Skipped(reason),
        Plan::Apply {
            file_name,
            rename,
            rewritten,
        } => (file_name, rename, rewritten),
    };

    let mut current = doc.path.clone();
    let mut renamed_to = None;

    if rename {
        let target = doc.path.with_file_name(&file_name);
        if let Err(err) = check_target(&doc.path, &target) {
            return Outcome::Failed(err);
        }
        if !dry_run {
            if let Err(source) = fs::rename(&doc.path, &target) {
                return Outcome::Failed(ProcessError::Rename {
                    from: doc.path.clone(),
                    to: target,
                    source,
                });
            }
        }
        current = target.clone();
        renamed_to = Some(target);
    }

    let stripped = match rewritten {
        Some(content) => {
            if !dry_run {
                if let Err(source) = storage::rewrite(&current, &content) {
                    return Outcome::Failed(ProcessError::Write {
                        path: current,
                        renamed_to,
                        source,
                    });
                }
            }
            true
        }
        None => false,
    };

    if renamed_to.is_none() && !stripped {
        Outcome::Unchanged
    } else {
        Outcome::Processed {
            renamed_to,
            stripped,
        }
    }
}

/// Refuse to overwrite another file. A target that is the source itself
/// (case-only rename on a case-insensitive filesystem) is fine.
fn check_target(from: &Path, to: &Path) -> Result<(), ProcessError> {
    if to.exists() && !same_file(from, to) {
        return Err(ProcessError::TargetExists {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SkipReason;

    fn apply_plan(
        path: &Path,
        file_name: &str,
        rewritten: Option<&str>,
        dry_run: bool,
    ) -> Outcome {
        let doc = Document::new(path.parent().unwrap(), path, "");
        let plan = Plan::Apply {
            file_name: file_name.to_string(),
            rename: path.file_name().unwrap() != file_name,
            rewritten: rewritten.map(str::to_string),
        };
        apply(&doc, plan, dry_run)
    }

    #[test]
    fn skip_passes_through() {
        let doc = Document::new(Path::new("/docs"), "/docs/a.md", "");
        let outcome = apply(&doc, Plan::Skip(SkipReason::NoTitle), false);
        assert!(matches!(outcome, Outcome::Skipped(SkipReason::NoTitle)));
    }

    #[test]
    fn rename_then_rewrite_at_new_path() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.md");
        fs::write(&old, "---\ntitle: New\n---\nbody").unwrap();

        let outcome = apply_plan(&old, "New.md", Some("body"), false);

        let new = dir.path().join("New.md");
        match outcome {
            Outcome::Processed {
                renamed_to,
                stripped,
            } => {
                assert_eq!(renamed_to.as_deref(), Some(new.as_path()));
                assert!(stripped);
            }
            other => panic!("expected Processed, got {other:?}"),
        }
        assert!(!old.exists());
        assert_eq!(fs::read_to_string(&new).unwrap(), "body");
    }

    #[test]
    fn same_name_without_rewrite_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Same.md");
        fs::write(&path, "x").unwrap();
        assert!(matches!(
            apply_plan(&path, "Same.md", None, false),
            Outcome::Unchanged
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn existing_target_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.md");
        let taken = dir.path().join("Taken.md");
        fs::write(&old, "mine").unwrap();
        fs::write(&taken, "theirs").unwrap();

        let outcome = apply_plan(&old, "Taken.md", Some("stripped"), false);

        assert!(matches!(
            outcome,
            Outcome::Failed(ProcessError::TargetExists { .. })
        ));
        assert_eq!(fs::read_to_string(&old).unwrap(), "mine");
        assert_eq!(fs::read_to_string(&taken).unwrap(), "theirs");
    }

    #[test]
    fn failed_rename_skips_the_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.md");
        let content = "---\ntitle: x\n---\nbody";
        fs::write(&old, content).unwrap();
        // Longer than NAME_MAX, so the rename itself fails with an io error.
        let too_long = format!("{}.md", "x".repeat(300));

        let outcome = apply_plan(&old, &too_long, Some("body"), false);

        match outcome {
            Outcome::Failed(err @ ProcessError::Rename { .. }) => {
                assert!(err.renamed_to().is_none());
            }
            other => panic!("expected Rename failure, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&old).unwrap(), content);
        assert!(!storage::temp_path(&old).exists());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old.md");
        fs::write(&old, "---\ntitle: New\n---\nbody").unwrap();

        let outcome = apply_plan(&old, "New.md", Some("body"), true);

        assert!(matches!(
            outcome,
            Outcome::Processed {
                renamed_to: Some(_),
                stripped: true
            }
        ));
        assert!(old.exists());
        assert!(!dir.path().join("New.md").exists());
        assert_eq!(
            fs::read_to_string(&old).unwrap(),
            "---\ntitle: New\n---\nbody"
        );
    }
}
