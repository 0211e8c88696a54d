//! Tooling & Integration Layer
//!
//! Command-line interface over the desktop core: tree inspection, clue lookup,
//! placement verification, scripted runs and an interactive session.

pub mod cli;
pub mod format;
pub mod script;

pub use cli::{Cli, CliContext, Commands};
pub use script::{run_script, ScriptStep};
