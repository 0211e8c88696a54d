//! Serializable view of a session for renderers and `--format json`

use crate::desktop::session::Session;
use crate::gate::GateStatus;
use crate::types::{StackOrder, WindowId};
use crate::window::{Geometry, TaskbarEntry, WindowKind, WindowRecord};
use serde::Serialize;

/// One entry listed by a file browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub name: String,
    pub folder: bool,
}

/// Kind-specific window contents
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WindowBody {
    FileBrowser {
        breadcrumb: Vec<String>,
        entries: Vec<EntryView>,
        can_go_back: bool,
    },
    TextViewer {
        text: String,
    },
    ClueTracker {
        answers: Vec<String>,
        acrostic: String,
    },
    PasswordGate {
        status: GateStatus,
    },
}

/// A visible window
#[derive(Debug, Clone, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub stack_order: StackOrder,
    pub active: bool,
    pub geometry: Geometry,
    pub body: WindowBody,
}

/// Everything a renderer needs to draw the desktop
#[derive(Debug, Clone, Serialize)]
pub struct DesktopSnapshot {
    pub active: Option<WindowId>,
    pub taskbar: Vec<TaskbarEntry>,
    /// Visible windows, bottom of the stack first
    pub windows: Vec<WindowView>,
    pub answers: Vec<String>,
    pub acrostic: String,
    pub gate: GateStatus,
}

impl DesktopSnapshot {
    pub fn capture(session: &Session) -> Self {
        let manager = session.windows();
        let active = manager.active_window_id().cloned();
        let sheet = session.answers().read();

        let windows = manager
            .render_order()
            .into_iter()
            .map(|record| WindowView {
                id: record.id.clone(),
                title: record.title.clone(),
                stack_order: record.stack_order,
                active: active.as_ref() == Some(&record.id),
                geometry: record.geometry,
                body: body_for(session, record),
            })
            .collect();

        DesktopSnapshot {
            active,
            taskbar: manager.list_for_taskbar(),
            windows,
            answers: sheet.answers().to_vec(),
            acrostic: sheet.acrostic(),
            gate: session.gate().status(),
        }
    }
}

fn body_for(session: &Session, record: &WindowRecord) -> WindowBody {
    match &record.kind {
        WindowKind::Explorer(_) => {
            let entries = session
                .current_folder(&record.id)
                .and_then(|folder| {
                    folder.children().map(|children| {
                        children
                            .iter()
                            .map(|child| EntryView {
                                name: child.name.clone(),
                                folder: child.is_folder(),
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .unwrap_or_default();
            let breadcrumb = session.breadcrumb(&record.id).unwrap_or_default();
            WindowBody::FileBrowser {
                can_go_back: breadcrumb.len() > 1,
                breadcrumb,
                entries,
            }
        }
        WindowKind::TextViewer(text) => WindowBody::TextViewer { text: text.clone() },
        WindowKind::ClueTracker => {
            let sheet = session.answers().read();
            WindowBody::ClueTracker {
                answers: sheet.answers().to_vec(),
                acrostic: sheet.acrostic(),
            }
        }
        WindowKind::PasswordGate => WindowBody::PasswordGate {
            status: session.gate().status(),
        },
    }
}
