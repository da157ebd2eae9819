//! CLI command handlers, one file per command.

mod completions;
mod rename;
mod title;

pub use completions::{run_completions, run_man};
pub use rename::run_rename;
pub use title::run_title;
