//! CLI Tooling
//!
//! Command-line interface for the MindMaze desktop core. Every command returns
//! its output as a string so it can be printed by the binary or checked in tests.

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::clues::{get_clue, verify_placement};
use crate::config::{ConfigLoader, MazeConfig};
use crate::desktop::{ActionOutcome, DesktopAction, Session};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tooling::format::{
    format_clue_text, format_placement_text, format_snapshot_text, format_tree_text,
};
use crate::tooling::script::run_script;
use crate::tree::build_file_system;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// MindMaze CLI - find the hidden clues, unlock the archive
#[derive(Parser)]
#[command(name = "mindmaze")]
#[command(about = "Window manager and virtual file system for a hidden-clue desktop puzzle")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags into the loaded configuration
    pub fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the virtual file system
    Tree {
        /// Tag the files that hide clues
        #[arg(long)]
        reveal: bool,
    },
    /// Print one riddle
    Clue {
        /// Clue number (1-15)
        id: u32,
    },
    /// Check that every clue is hidden exactly once
    Verify {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run a script of desktop actions and print the final desktop
    Run {
        /// Script file, one action per line
        script: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Interactive desktop session
    Play,
    /// Print the effective configuration
    Config,
}

/// CLI execution context
pub struct CliContext {
    config: MazeConfig,
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::InvalidAction(format!(
            "unknown output format '{}' (must be 'text' or 'json')",
            other
        ))),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}

impl CliContext {
    /// Create a context, loading configuration from `config_path` or the default sources
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: MazeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MazeConfig {
        &mut self.config
    }

    /// A fresh session on the given clock
    pub fn session(&self, clock: Arc<dyn Clock>) -> Session {
        Session::new(self.config.clone(), clock)
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree { reveal } => Ok(format_tree_text(&build_file_system(), *reveal)),
            Commands::Clue { id } => {
                let clue = get_clue(*id).ok_or(ApiError::ClueNotFound(*id))?;
                Ok(format_clue_text(clue))
            }
            Commands::Verify { format } => {
                check_format(format)?;
                let report = verify_placement(&build_file_system());
                if format == "json" {
                    to_json(&report)
                } else {
                    Ok(format_placement_text(&report))
                }
            }
            Commands::Run { script, format } => {
                check_format(format)?;
                let text = std::fs::read_to_string(script)?;
                let mut session = self.session(Arc::new(ManualClock::new()));
                let steps = run_script(&mut session, &text)?;
                info!(steps = steps.len(), script = %script.display(), "Script finished");
                let snapshot = session.snapshot();
                if format == "json" {
                    to_json(&snapshot)
                } else {
                    Ok(format_snapshot_text(&snapshot))
                }
            }
            Commands::Play => self.play(),
            Commands::Config => ConfigLoader::to_toml(&self.config),
        }
    }

    fn play(&self) -> Result<String, ApiError> {
        let mut session = self.session(Arc::new(SystemClock));
        println!("Find the fifteen clues. Type 'help' for actions, 'quit' to leave.");
        loop {
            let line: String = dialoguer::Input::new()
                .with_prompt("desktop")
                .allow_empty(true)
                .interact_text()?;
            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "exit" => break,
                "help" => {
                    println!("{}", PLAY_HELP);
                    continue;
                }
                _ => {}
            }
            match line.parse::<DesktopAction>() {
                Ok(action) => match session.apply(action) {
                    ActionOutcome::Show => print!("{}", format_snapshot_text(&session.snapshot())),
                    outcome => println!("{}", outcome),
                },
                Err(e) => println!("{}", e),
            }
        }
        Ok("Goodbye.".to_string())
    }
}

const PLAY_HELP: &str = "\
open <notes|archive|explorer>   double-click a desktop icon
close|focus|minimize <id>       title-bar buttons
taskbar <id>                    taskbar button
cd <name> | view <name>         double-click an entry in the active file browser
back                            back button of the active file browser
answer <n> <text>               write in the clue tracker
type <text>                     fill the archive's key-phrase field
submit [text]                   try a key phrase (or the typed one) on the archive
drag <id> <dx> <dy>             move a window
wait <ms>                       let time pass
refresh                         start over
show                            print the desktop";
