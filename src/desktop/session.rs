//! Session controller

use crate::clock::Clock;
use crate::clues::ClueId;
use crate::config::MazeConfig;
use crate::desktop::action::{ActionOutcome, DesktopAction, DesktopIcon};
use crate::desktop::snapshot::DesktopSnapshot;
use crate::explorer::{EntryAction, ExplorerNavigator, Explorers};
use crate::gate::{GateStatus, PasswordGate};
use crate::notes::AnswerHandle;
use crate::tree::{build_file_system, FileNode};
use crate::types::{Point, WindowId};
use crate::window::{OpenOutcome, WindowKind, WindowManager};
use std::sync::Arc;
use tracing::{debug, info};

/// Password-gate window opened from FinalTreasure.zip
pub const GATE_WINDOW: &str = "final";
/// Clue-tracker window opened from My Notes
pub const NOTES_WINDOW: &str = "notes";
/// File browser opened from the hidden folder
pub const EXPLORER_WINDOW: &str = "explorer";

/// One player's desktop
pub struct Session {
    config: MazeConfig,
    clock: Arc<dyn Clock>,
    tree: Arc<FileNode>,
    windows: WindowManager,
    explorers: Explorers,
    answers: AnswerHandle,
    gate: PasswordGate,
}

impl Session {
    pub fn new(config: MazeConfig, clock: Arc<dyn Clock>) -> Self {
        let windows = Self::fresh_windows(&config);
        let gate = Self::fresh_gate(&config, &clock);
        Self {
            config,
            clock,
            tree: build_file_system(),
            windows,
            explorers: Explorers::new(),
            answers: AnswerHandle::new(),
            gate,
        }
    }

    fn fresh_windows(config: &MazeConfig) -> WindowManager {
        WindowManager::with_settings(
            config.desktop.initial_stack_order,
            config.desktop.viewport(),
        )
    }

    fn fresh_gate(config: &MazeConfig, clock: &Arc<dyn Clock>) -> PasswordGate {
        PasswordGate::new(
            &config.gate.unlock_phrase,
            config.gate.error_revert(),
            Arc::clone(clock),
        )
    }

    pub fn tree(&self) -> &Arc<FileNode> {
        &self.tree
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn gate(&self) -> &PasswordGate {
        &self.gate
    }

    /// Shared read/update capability for clue-tracker views
    pub fn answers(&self) -> AnswerHandle {
        self.answers.clone()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Navigator of a file-browser window, if it has navigated yet
    pub fn explorer(&self, id: &WindowId) -> Option<&ExplorerNavigator> {
        self.explorers.get(id)
    }

    /// Folder a file-browser window is showing
    pub fn current_folder(&self, id: &WindowId) -> Option<Arc<FileNode>> {
        if let Some(nav) = self.explorers.get(id) {
            return Some(Arc::clone(nav.current_folder()));
        }
        self.windows.get(id)?.kind.explorer_root().cloned()
    }

    /// Breadcrumb of a file-browser window
    pub fn breadcrumb(&self, id: &WindowId) -> Option<Vec<String>> {
        if let Some(nav) = self.explorers.get(id) {
            return Some(nav.breadcrumb().into_iter().map(String::from).collect());
        }
        let root = self.windows.get(id)?.kind.explorer_root()?;
        Some(vec![root.name.clone()])
    }

    pub fn open(&mut self, id: impl Into<WindowId>, title: &str, kind: WindowKind) -> OpenOutcome {
        self.windows.open(id, title, kind)
    }

    /// Double-click a desktop icon
    pub fn open_icon(&mut self, icon: DesktopIcon) -> OpenOutcome {
        match icon {
            DesktopIcon::Archive => self.open(GATE_WINDOW, "Password Required", WindowKind::PasswordGate),
            DesktopIcon::Notes => self.open(NOTES_WINDOW, "My Notes", WindowKind::ClueTracker),
            DesktopIcon::Hidden => {
                let root = Arc::clone(&self.tree);
                self.open(EXPLORER_WINDOW, "File Explorer", WindowKind::Explorer(root))
            }
        }
    }

    /// Close a window and drop any state tied to it
    pub fn close(&mut self, id: &WindowId) -> bool {
        let Some(record) = self.windows.close(id) else {
            return false;
        };
        match record.kind {
            WindowKind::Explorer(_) => {
                self.explorers.discard(id);
            }
            WindowKind::PasswordGate => self.gate.discard_transient(),
            WindowKind::TextViewer(_) | WindowKind::ClueTracker => {}
        }
        true
    }

    pub fn focus(&mut self, id: &WindowId) -> bool {
        self.windows.focus(id)
    }

    pub fn toggle_minimize(&mut self, id: &WindowId) -> bool {
        self.windows.toggle_minimize(id)
    }

    pub fn taskbar_click(&mut self, id: &WindowId) -> bool {
        self.windows.activate_from_taskbar(id)
    }

    /// Double-click `name` inside file-browser `window`.
    ///
    /// Files open a text viewer; folders descend. `None` when `window` is not
    /// an open file browser.
    pub fn enter(&mut self, window: &WindowId, name: &str) -> Option<EntryAction> {
        let root = Arc::clone(self.windows.get(window)?.kind.explorer_root()?);
        let action = self.explorers.navigator(window, &root).enter(name);
        if let EntryAction::OpenViewer { id, title, content } = &action {
            self.windows
                .open(id.clone(), title, WindowKind::TextViewer(content.clone()));
        }
        Some(action)
    }

    /// Back button of file-browser `window`
    pub fn go_back(&mut self, window: &WindowId) -> bool {
        let Some(root) = self
            .windows
            .get(window)
            .and_then(|w| w.kind.explorer_root())
            .cloned()
        else {
            return false;
        };
        self.explorers.navigator(window, &root).go_back()
    }

    pub fn set_answer(&mut self, id: ClueId, value: &str) {
        self.answers.update(id, value);
    }

    /// Edit the key-phrase field. Ignored once the archive is unlocked.
    pub fn type_password(&mut self, input: &str) {
        self.gate.set_input(input);
    }

    pub fn submit_password(&mut self, input: &str) -> GateStatus {
        self.gate.submit(input)
    }

    /// Apply due timed transitions
    pub fn tick(&mut self) -> GateStatus {
        self.gate.poll()
    }

    pub fn begin_drag(&mut self, id: &WindowId, pointer: Point) -> bool {
        self.windows.begin_drag(id, pointer)
    }

    pub fn drag_to(&mut self, id: &WindowId, pointer: Point) -> bool {
        self.windows.drag_to(id, pointer)
    }

    pub fn end_drag(&mut self, id: &WindowId) -> bool {
        self.windows.end_drag(id)
    }

    /// Start over: no windows, blank answers, idle gate
    pub fn refresh(&mut self) {
        self.windows = Self::fresh_windows(&self.config);
        self.explorers.clear();
        self.answers.clear();
        self.gate = Self::fresh_gate(&self.config, &self.clock);
        info!("Desktop refreshed");
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot::capture(self)
    }

    fn active_explorer(&self) -> Result<WindowId, ActionOutcome> {
        match self.windows.active_window() {
            Some(w) if w.kind.explorer_root().is_some() => Ok(w.id.clone()),
            _ => Err(ActionOutcome::Ignored(
                "active window is not a file browser".to_string(),
            )),
        }
    }

    fn gate_visible(&self) -> bool {
        self.windows
            .get(&WindowId::new(GATE_WINDOW))
            .map(|w| !w.minimized)
            .unwrap_or(false)
    }

    /// Route one user action. Due timers fire before the action is applied.
    pub fn apply(&mut self, action: DesktopAction) -> ActionOutcome {
        self.tick();
        match &action {
            DesktopAction::Type(text) | DesktopAction::Submit(text) => {
                debug!(input_len = text.chars().count(), "Applying key-phrase action")
            }
            other => debug!(action = ?other, "Applying action"),
        }
        match action {
            DesktopAction::OpenIcon(icon) => {
                let id = WindowId::new(match icon {
                    DesktopIcon::Archive => GATE_WINDOW,
                    DesktopIcon::Notes => NOTES_WINDOW,
                    DesktopIcon::Hidden => EXPLORER_WINDOW,
                });
                match self.open_icon(icon) {
                    OpenOutcome::Opened => ActionOutcome::Opened(id),
                    OpenOutcome::Refocused => ActionOutcome::Refocused(id),
                }
            }
            DesktopAction::Close(id) => {
                if self.close(&id) {
                    ActionOutcome::Closed(id)
                } else {
                    ActionOutcome::Ignored(format!("no window '{}'", id))
                }
            }
            DesktopAction::Focus(id) => {
                if self.focus(&id) {
                    ActionOutcome::Focused(id)
                } else {
                    ActionOutcome::Ignored(format!("no window '{}'", id))
                }
            }
            DesktopAction::Minimize(id) => {
                if self.toggle_minimize(&id) {
                    let minimized = self.windows.get(&id).map(|w| w.minimized).unwrap_or(false);
                    ActionOutcome::MinimizeToggled { id, minimized }
                } else {
                    ActionOutcome::Ignored(format!("no window '{}'", id))
                }
            }
            DesktopAction::Taskbar(id) => {
                let was_minimized = self.windows.get(&id).map(|w| w.minimized);
                match was_minimized {
                    Some(minimized) => {
                        self.taskbar_click(&id);
                        if minimized {
                            ActionOutcome::MinimizeToggled {
                                id,
                                minimized: false,
                            }
                        } else {
                            ActionOutcome::Focused(id)
                        }
                    }
                    None => ActionOutcome::Ignored(format!("no window '{}'", id)),
                }
            }
            DesktopAction::Enter(name) => {
                let window = match self.active_explorer() {
                    Ok(window) => window,
                    Err(outcome) => return outcome,
                };
                match self.enter(&window, &name) {
                    Some(EntryAction::Descended) => {
                        ActionOutcome::Navigated(self.breadcrumb(&window).unwrap_or_default())
                    }
                    Some(EntryAction::OpenViewer { id, .. }) => ActionOutcome::ViewerOpened(id),
                    Some(EntryAction::NotFound) | None => {
                        ActionOutcome::Ignored(format!("no entry '{}' here", name))
                    }
                }
            }
            DesktopAction::Back => {
                let window = match self.active_explorer() {
                    Ok(window) => window,
                    Err(outcome) => return outcome,
                };
                if self.go_back(&window) {
                    ActionOutcome::Navigated(self.breadcrumb(&window).unwrap_or_default())
                } else {
                    ActionOutcome::Ignored("already at the top folder".to_string())
                }
            }
            DesktopAction::Answer(id, text) => {
                self.set_answer(id, &text);
                ActionOutcome::AnswerRecorded(id)
            }
            DesktopAction::Type(text) => {
                if !self.gate_visible() {
                    return ActionOutcome::Ignored("the archive is not open".to_string());
                }
                self.type_password(&text);
                ActionOutcome::Typed(self.gate.input().chars().count())
            }
            DesktopAction::Submit(text) => {
                if !self.gate_visible() {
                    return ActionOutcome::Ignored("the archive is not open".to_string());
                }
                let text = if text.is_empty() {
                    self.gate.input().to_string()
                } else {
                    text
                };
                ActionOutcome::Gate(self.submit_password(&text))
            }
            DesktopAction::Drag { id, dx, dy } => {
                let start = Point::new(0.0, 0.0);
                if !self.begin_drag(&id, start) {
                    return ActionOutcome::Ignored(format!("cannot drag '{}'", id));
                }
                self.drag_to(&id, Point::new(dx, dy));
                self.end_drag(&id);
                ActionOutcome::Moved(id)
            }
            DesktopAction::Wait(duration) => {
                self.clock.sleep(duration);
                self.tick();
                ActionOutcome::Waited(duration)
            }
            DesktopAction::Refresh => {
                self.refresh();
                ActionOutcome::Refreshed
            }
            DesktopAction::Show => ActionOutcome::Show,
        }
    }
}
