pub mod config;
pub mod logging;

pub mod document;
pub mod front_matter;
pub mod naming;
pub mod renamer;
pub mod storage;
pub mod walker;

pub use document::{Document, Mode, Plan, SkipReason};
pub use naming::{FileNamer, NamingRules};
pub use renamer::{FileReport, Outcome, ProcessError, Renamer, Summary};
