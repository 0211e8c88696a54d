//! Window Manager
//!
//! Owns the set of open windows: identity-based deduplication on open,
//! monotonic stack ordering for focus, minimize toggling and per-window drags.

pub mod geometry;
pub mod kind;
pub mod manager;
pub mod taskbar;

pub use geometry::{DragState, Geometry, Viewport};
pub use kind::WindowKind;
pub use manager::{OpenOutcome, WindowManager, WindowRecord, DEFAULT_INITIAL_STACK_ORDER};
pub use taskbar::TaskbarEntry;
