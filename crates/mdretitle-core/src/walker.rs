//! Recursive discovery of documents under the docs root.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// All files with `extension` under `root`, sorted by path.
///
/// Hidden files and directories (leading `.`) below the root are skipped.
/// The whole list is collected up front so renames made while processing
/// never feed back into the walk.
pub fn collect_documents(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("docs root {} is not a directory", root.display());
    }

    let mut files = Vec::new();
    let walk = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
