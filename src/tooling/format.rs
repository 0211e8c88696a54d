//! Format desktop snapshots, the file tree and reports as text.

use crate::clues::{Clue, PlacementReport};
use crate::desktop::{DesktopSnapshot, WindowBody};
use crate::gate::GateStatus;
use crate::tree::{walk, FileNode};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::sync::Arc;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn format_gate_status(status: GateStatus) -> String {
    match status {
        GateStatus::Idle => "idle".to_string(),
        GateStatus::Error => format!("{}", "error".red()),
        GateStatus::Success => format!("{}", "success".green().bold()),
    }
}

/// Format the whole desktop: taskbar, then visible windows top-most last.
pub fn format_snapshot_text(snapshot: &DesktopSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Taskbar")));
    if snapshot.taskbar.is_empty() {
        out.push_str("  (no open windows)\n\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Window", "Title", "Kind", "State"]);
        for entry in &snapshot.taskbar {
            let state = if entry.active {
                "active"
            } else if entry.minimized {
                "minimized"
            } else {
                "open"
            };
            table.add_row(vec![
                entry.id.to_string(),
                entry.title.clone(),
                entry.kind.to_string(),
                state.to_string(),
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
    }

    for window in &snapshot.windows {
        let marker = if window.active { " *" } else { "" };
        out.push_str(&format!(
            "{}{}\n",
            format_section_heading(&format!("{} [{}]", window.title, window.id)),
            marker
        ));
        match &window.body {
            WindowBody::FileBrowser {
                breadcrumb,
                entries,
                ..
            } => {
                out.push_str(&format!("  {}\n", breadcrumb.join(" / ")));
                for entry in entries {
                    let suffix = if entry.folder { "/" } else { "" };
                    out.push_str(&format!("    {}{}\n", entry.name, suffix));
                }
            }
            WindowBody::TextViewer { text } => {
                for line in text.lines() {
                    out.push_str(&format!("  {}\n", line));
                }
            }
            WindowBody::ClueTracker { answers, acrostic } => {
                for (idx, answer) in answers.iter().enumerate() {
                    let shown = if answer.is_empty() { "..." } else { answer };
                    out.push_str(&format!("  {:>2}. {}\n", idx + 1, shown));
                }
                out.push_str(&format!("  Initials: {}\n", acrostic));
            }
            WindowBody::PasswordGate { status } => {
                out.push_str("  Combine the first letter of clues 1-15 to form a question.\n");
                out.push_str("  Type the answer to that question below.\n");
                out.push_str(&format!("  Status: {}\n", format_gate_status(*status)));
            }
        }
        out.push('\n');
    }
    out
}

/// Indented listing of the file system. `reveal` tags clue leaves.
pub fn format_tree_text(root: &Arc<FileNode>, reveal: bool) -> String {
    let mut out = String::new();
    for entry in walk(root) {
        let indent = "  ".repeat(entry.depth());
        let node = &entry.node;
        if node.is_folder() {
            out.push_str(&format!("{}{}/\n", indent, node.name));
            continue;
        }
        match node.clue() {
            Some(id) if reveal => {
                out.push_str(&format!("{}{}  [clue {}]\n", indent, node.name, id))
            }
            _ => out.push_str(&format!("{}{}\n", indent, node.name)),
        }
    }
    out
}

pub fn format_clue_text(clue: &Clue) -> String {
    format!("{}\n  {}\n", format_section_heading(clue.filename), clue.riddle)
}

/// Placement report as text.
pub fn format_placement_text(report: &PlacementReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Clue placement")));
    let verdict = if report.valid {
        format!("{}", "valid".green())
    } else {
        format!("{}", "INVALID".red().bold())
    };
    out.push_str(&format!("  Result: {}\n", verdict));
    out.push_str(&format!("  Files: {}\n", report.leaf_count));
    out.push_str(&format!("  Decoys: {}\n\n", report.decoy_count));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Clue", "Location"]);
    for (id, path) in &report.locations {
        table.add_row(vec![id.to_string(), path.clone()]);
    }
    out.push_str(&format!("{}\n", table));

    let join = |ids: &[crate::clues::ClueId]| {
        ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
    };
    if !report.missing.is_empty() {
        out.push_str(&format!("\n  Missing: {}\n", join(&report.missing)));
    }
    if !report.duplicated.is_empty() {
        out.push_str(&format!("\n  Duplicated: {}\n", join(&report.duplicated)));
    }
    out
}
