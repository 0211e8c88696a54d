//! Desktop Session
//!
//! The top-level controller: owns the file system, the window manager, the
//! per-window explorers, the answer sheet and the password gate, and routes
//! user actions into them.

pub mod action;
pub mod session;
pub mod snapshot;

pub use action::{ActionOutcome, DesktopAction, DesktopIcon};
pub use session::{Session, EXPLORER_WINDOW, GATE_WINDOW, NOTES_WINDOW};
pub use snapshot::{DesktopSnapshot, EntryView, WindowBody, WindowView};
