//! Open-window registry and stacking

use crate::types::{Point, StackOrder, WindowId};
use crate::window::geometry::{DragState, Geometry, Viewport};
use crate::window::kind::WindowKind;
use crate::window::taskbar::TaskbarEntry;
use tracing::debug;

/// Seed for the stack-order counter; only monotonic increase matters
pub const DEFAULT_INITIAL_STACK_ORDER: StackOrder = 10;

/// One open application instance
#[derive(Debug, Clone)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub kind: WindowKind,
    pub stack_order: StackOrder,
    pub minimized: bool,
    pub geometry: Geometry,
    drag: Option<DragState>,
}

impl WindowRecord {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// What an `open` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// The id was already open; it was focused and restored if minimized
    Refocused,
}

/// Window manager
///
/// Every operation is total: unknown ids are no-ops.
#[derive(Debug, Clone)]
pub struct WindowManager {
    /// Insertion order is taskbar order
    windows: Vec<WindowRecord>,
    top_stack_order: StackOrder,
    viewport: Viewport,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_INITIAL_STACK_ORDER, Viewport::default())
    }

    pub fn with_settings(initial_stack_order: StackOrder, viewport: Viewport) -> Self {
        Self {
            windows: Vec::new(),
            top_stack_order: initial_stack_order,
            viewport,
        }
    }

    fn position(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }

    // Saturates rather than wrapping; config caps the seed far below this.
    fn next_stack_order(&mut self) -> StackOrder {
        self.top_stack_order = self.top_stack_order.saturating_add(1);
        self.top_stack_order
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn top_stack_order(&self) -> StackOrder {
        self.top_stack_order
    }

    /// All records in insertion order
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Open a window, or focus and restore it if `id` is already open.
    ///
    /// In the duplicate case `title` and `kind` are ignored and the existing
    /// record keeps its payload.
    pub fn open(&mut self, id: impl Into<WindowId>, title: &str, kind: WindowKind) -> OpenOutcome {
        let id = id.into();
        if let Some(existing) = self.get(&id) {
            let was_minimized = existing.minimized;
            self.focus(&id);
            if was_minimized {
                self.toggle_minimize(&id);
            }
            return OpenOutcome::Refocused;
        }

        let stack_order = self.next_stack_order();
        let geometry = Geometry::initial(&kind, self.viewport, stack_order);
        debug!(window = %id, kind = kind.label(), stack_order, "Window opened");
        self.windows.push(WindowRecord {
            id,
            title: title.to_string(),
            kind,
            stack_order,
            minimized: false,
            geometry,
            drag: None,
        });
        OpenOutcome::Opened
    }

    /// Remove a window entirely. Returns the removed record.
    pub fn close(&mut self, id: &WindowId) -> Option<WindowRecord> {
        let idx = self.position(id)?;
        debug!(window = %id, "Window closed");
        Some(self.windows.remove(idx))
    }

    /// Raise a window to the top of the stack. Does not un-minimize.
    pub fn focus(&mut self, id: &WindowId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let stack_order = self.next_stack_order();
        self.windows[idx].stack_order = stack_order;
        debug!(window = %id, stack_order, "Window focused");
        true
    }

    /// Flip the minimized flag. Stack order is unchanged.
    pub fn toggle_minimize(&mut self, id: &WindowId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let record = &mut self.windows[idx];
        record.minimized = !record.minimized;
        if record.minimized {
            record.drag = None;
        }
        debug!(window = %id, minimized = record.minimized, "Window minimize toggled");
        true
    }

    /// Taskbar click: restore a minimized window, otherwise focus it.
    pub fn activate_from_taskbar(&mut self, id: &WindowId) -> bool {
        match self.get(id) {
            Some(record) if record.minimized => self.toggle_minimize(id),
            Some(_) => self.focus(id),
            None => false,
        }
    }

    /// The non-minimized window with the highest stack order
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.stack_order)
            .map(|w| &w.id)
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        let id = self.active_window_id()?;
        self.get(id)
    }

    /// Every record in insertion order, flagged with whether it is active
    pub fn list_for_taskbar(&self) -> Vec<TaskbarEntry> {
        let active = self.active_window_id();
        self.windows
            .iter()
            .map(|w| TaskbarEntry {
                id: w.id.clone(),
                title: w.title.clone(),
                kind: w.kind.label(),
                minimized: w.minimized,
                active: active == Some(&w.id),
            })
            .collect()
    }

    /// Visible windows, bottom of the stack first
    pub fn render_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.stack_order);
        visible
    }

    /// Pointer-down on a title bar: focus and capture. Ignored for minimized
    /// windows and for windows already being dragged.
    pub fn begin_drag(&mut self, id: &WindowId, pointer: Point) -> bool {
        match self.get(id) {
            Some(record) if !record.minimized && record.drag.is_none() => {}
            _ => return false,
        }
        self.focus(id);
        if let Some(idx) = self.position(id) {
            let record = &mut self.windows[idx];
            record.drag = Some(DragState::begin(pointer, record.geometry.origin));
        }
        true
    }

    /// Pointer-move while captured
    pub fn drag_to(&mut self, id: &WindowId, pointer: Point) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let record = &mut self.windows[idx];
        match record.drag {
            Some(drag) => {
                record.geometry.origin = drag.origin_for(pointer);
                true
            }
            None => false,
        }
    }

    /// Pointer-up or capture release
    pub fn end_drag(&mut self, id: &WindowId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.windows[idx].drag.take().is_some()
    }
}
