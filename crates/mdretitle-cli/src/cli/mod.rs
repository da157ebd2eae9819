//! CLI for mdretitle.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use mdretitle_core::config;
use mdretitle_core::Mode;
use std::path::PathBuf;

use commands::{run_completions, run_man, run_rename, run_title};

/// Top-level CLI for mdretitle.
#[derive(Debug, Parser)]
#[command(name = "mdretitle")]
#[command(
    about = "mdretitle: rename Markdown docs after their front matter titles",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which docs tree to process and whether to write.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Documentation root (overrides `docs_root` from config.toml).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report what would change without renaming or writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rename every document after its front matter title.
    Rename {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Rename every document, then remove its front matter block.
    Strip {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show the title of one document and the file name it would get.
    Title {
        /// Path to the Markdown file.
        path: PathBuf,

        /// Documentation root the file belongs to (overrides `docs_root` from config.toml).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Rename { target } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_rename(&cfg, &target, Mode::Rename)?;
            }
            CliCommand::Strip { target } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_rename(&cfg, &target, Mode::Strip)?;
            }
            CliCommand::Title { path, root } => {
                let cfg = config::load_or_init()?;
                run_title(&cfg, root.as_deref(), &path)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
