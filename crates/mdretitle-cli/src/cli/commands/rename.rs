//! `mdretitle rename` / `mdretitle strip` – process the whole docs tree.

use crate::cli::TargetArgs;
use anyhow::{bail, Result};
use mdretitle_core::config::MdretitleConfig;
use mdretitle_core::{FileNamer, FileReport, Mode, Outcome, Renamer, SkipReason, Summary};
use std::path::Path;

pub fn run_rename(cfg: &MdretitleConfig, target: &TargetArgs, mode: Mode) -> Result<()> {
    let root = target.root.as_ref().unwrap_or(&cfg.docs_root);
    let namer = FileNamer::new(&cfg.naming)?;
    let renamer = Renamer::new(root, namer, mode)
        .extension(cfg.extension.as_str())
        .dry_run(target.dry_run);

    let summary = renamer.run(print_report)?;
    println!("{}", summary_line(&summary, target.dry_run));

    if summary.failed > 0 {
        bail!("{} document(s) failed", summary.failed);
    }
    Ok(())
}

fn print_report(report: &FileReport) {
    let name = display_name(&report.path);
    match &report.outcome {
        Outcome::Skipped(SkipReason::NoTitle) => {
            eprintln!("⚠️  No title found in: {}", report.path.display());
        }
        Outcome::Skipped(SkipReason::EmptyName { title }) => {
            eprintln!(
                "⚠️  Title {:?} leaves no usable file name: {}",
                title,
                report.path.display()
            );
        }
        Outcome::Unchanged => {}
        Outcome::Processed {
            renamed_to,
            stripped,
        } => {
            if let Some(to) = renamed_to {
                print_renamed(&name, to, report.dry_run);
            }
            if *stripped {
                let current = renamed_to.as_deref().unwrap_or(report.path.as_path());
                let verb = if report.dry_run {
                    "Would remove front matter from"
                } else {
                    "Removed front matter from"
                };
                println!("✂️  {verb}: {}", display_name(current));
            }
        }
        Outcome::Failed(err) => {
            // The rename may have gone through before the rewrite failed.
            if let Some(to) = err.renamed_to() {
                print_renamed(&name, to, report.dry_run);
            }
            eprintln!("❌ {err}");
        }
    }
}

fn print_renamed(name: &str, to: &Path, dry_run: bool) {
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    println!("✅ {verb}: {name} → {}", display_name(to));
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn summary_line(summary: &Summary, dry_run: bool) -> String {
    let prefix = if dry_run { "dry run: " } else { "" };
    format!(
        "{prefix}{} documents: {} renamed, {} stripped, {} unchanged, {} skipped, {} failed",
        summary.total(),
        summary.renamed,
        summary.stripped,
        summary.unchanged,
        summary.skipped,
        summary.failed
    )
}
