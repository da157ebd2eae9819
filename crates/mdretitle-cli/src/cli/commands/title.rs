//! `mdretitle title <path>` – show the extracted title and target file name.

use anyhow::{Context, Result};
use mdretitle_core::config::MdretitleConfig;
use mdretitle_core::{Document, FileNamer};
use std::fs;
use std::path::{Path, PathBuf};

/// What `rename` would do with one document.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TitlePreview {
    pub title: String,
    /// `None` when nothing usable is left of the title.
    pub file_name: Option<String>,
}

pub fn run_title(cfg: &MdretitleConfig, root: Option<&Path>, path: &Path) -> Result<()> {
    let root = root.unwrap_or(cfg.docs_root.as_path());
    match preview(cfg, root, path)? {
        None => println!("No title found in: {}", path.display()),
        Some(preview) => {
            println!("title:     {}", preview.title);
            match preview.file_name {
                Some(name) => println!("file name: {name}"),
                None => println!("file name: (nothing left after sanitizing)"),
            }
        }
    }
    Ok(())
}

/// Title and target name of `path`, with directory rules applied relative
/// to `root` exactly as a `rename` run over `root` applies them.
pub(crate) fn preview(
    cfg: &MdretitleConfig,
    root: &Path,
    path: &Path,
) -> Result<Option<TitlePreview>> {
    // `./docs` and `/abs/docs` must agree on what is below the root.
    let root = canonical_or_given(root);
    let path = canonical_or_given(path);

    let doc = Document::read(&root, &path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let Some(title) = doc.title() else {
        return Ok(None);
    };

    let namer = FileNamer::new(&cfg.naming)?;
    let file_name = namer.file_name(&title, &doc.rel_path, &doc.extension());
    Ok(Some(TitlePreview { title, file_name }))
}

fn canonical_or_given(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
