//! MindMaze: Desktop Puzzle Core
//!
//! The state behind a simulated desktop: a read-only virtual file system hiding
//! fifteen clue files, a window manager with focus, minimize and drag, per-window
//! explorer navigation, a shared clue tracker and a password-guarded archive.

pub mod clock;
pub mod clues;
pub mod config;
pub mod desktop;
pub mod error;
pub mod explorer;
pub mod gate;
pub mod logging;
pub mod notes;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod window;
