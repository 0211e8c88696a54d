//! User actions and their line-protocol form

use crate::clues::ClueId;
use crate::error::ApiError;
use crate::gate::GateStatus;
use crate::types::WindowId;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Desktop icons that open the fixed windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopIcon {
    /// FinalTreasure.zip
    Archive,
    /// My Notes
    Notes,
    /// The nearly invisible `???` folder
    Hidden,
}

impl FromStr for DesktopIcon {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "archive" | "final" => Ok(DesktopIcon::Archive),
            "notes" => Ok(DesktopIcon::Notes),
            "explorer" | "???" => Ok(DesktopIcon::Hidden),
            other => Err(ApiError::InvalidAction(format!("unknown icon '{}'", other))),
        }
    }
}

/// One discrete user event
#[derive(Debug, Clone, PartialEq)]
pub enum DesktopAction {
    OpenIcon(DesktopIcon),
    Close(WindowId),
    Focus(WindowId),
    Minimize(WindowId),
    /// Taskbar button click
    Taskbar(WindowId),
    /// Double-click an entry in the active file browser
    Enter(String),
    /// Back button of the active file browser
    Back,
    Answer(ClueId, String),
    /// Fill the archive's key-phrase field without submitting
    Type(String),
    /// Submit the given text, or the typed field when empty
    Submit(String),
    /// Title-bar drag by a relative offset
    Drag { id: WindowId, dx: f64, dy: f64 },
    Wait(Duration),
    /// Desktop context menu "Refresh": start over
    Refresh,
    Show,
}

fn required<'a>(arg: Option<&'a str>, what: &str, verb: &str) -> Result<&'a str, ApiError> {
    arg.filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::InvalidAction(format!("'{}' needs {}", verb, what)))
}

fn number<T: FromStr>(arg: Option<&str>, what: &str, verb: &str) -> Result<T, ApiError> {
    let raw = required(arg, what, verb)?;
    raw.parse()
        .map_err(|_| ApiError::InvalidAction(format!("'{}': invalid {} '{}'", verb, what, raw)))
}

impl FromStr for DesktopAction {
    type Err = ApiError;

    /// Parse one protocol line, e.g. `open notes`, `cd System`, `answer 3 react`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let action = match verb {
            "open" => DesktopAction::OpenIcon(required(args.next(), "an icon", verb)?.parse()?),
            "close" => DesktopAction::Close(required(args.next(), "a window id", verb)?.into()),
            "focus" => DesktopAction::Focus(required(args.next(), "a window id", verb)?.into()),
            "minimize" | "min" => {
                DesktopAction::Minimize(required(args.next(), "a window id", verb)?.into())
            }
            "taskbar" => DesktopAction::Taskbar(required(args.next(), "a window id", verb)?.into()),
            "cd" | "view" => DesktopAction::Enter(required(Some(rest), "an entry name", verb)?.to_string()),
            "back" => DesktopAction::Back,
            "answer" => {
                let n: u32 = number(args.next(), "clue number", verb)?;
                let id = ClueId::new(n).ok_or(ApiError::ClueNotFound(n))?;
                let text = rest
                    .split_once(char::is_whitespace)
                    .map(|(_, text)| text.trim())
                    .unwrap_or("");
                DesktopAction::Answer(id, text.to_string())
            }
            "type" => DesktopAction::Type(rest.to_string()),
            "submit" => DesktopAction::Submit(rest.to_string()),
            "drag" => DesktopAction::Drag {
                id: required(args.next(), "a window id", verb)?.into(),
                dx: number(args.next(), "dx", verb)?,
                dy: number(args.next(), "dy", verb)?,
            },
            "wait" => DesktopAction::Wait(Duration::from_millis(number(args.next(), "milliseconds", verb)?)),
            "refresh" => DesktopAction::Refresh,
            "show" | "ls" => DesktopAction::Show,
            "" => return Err(ApiError::InvalidAction("empty action".to_string())),
            other => return Err(ApiError::InvalidAction(format!("unknown action '{}'", other))),
        };
        Ok(action)
    }
}

/// What applying an action did
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Opened(WindowId),
    Refocused(WindowId),
    Closed(WindowId),
    Focused(WindowId),
    MinimizeToggled { id: WindowId, minimized: bool },
    Navigated(Vec<String>),
    ViewerOpened(WindowId),
    AnswerRecorded(ClueId),
    /// Characters now in the key-phrase field
    Typed(usize),
    Gate(GateStatus),
    Moved(WindowId),
    Waited(Duration),
    Refreshed,
    Show,
    Ignored(String),
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Opened(id) => write!(f, "opened {}", id),
            ActionOutcome::Refocused(id) => write!(f, "brought {} to front", id),
            ActionOutcome::Closed(id) => write!(f, "closed {}", id),
            ActionOutcome::Focused(id) => write!(f, "focused {}", id),
            ActionOutcome::MinimizeToggled { id, minimized: true } => write!(f, "minimized {}", id),
            ActionOutcome::MinimizeToggled { id, minimized: false } => write!(f, "restored {}", id),
            ActionOutcome::Navigated(path) => write!(f, "{}", path.join(" / ")),
            ActionOutcome::ViewerOpened(id) => write!(f, "opened {}", id),
            ActionOutcome::AnswerRecorded(id) => write!(f, "noted answer {}", id),
            ActionOutcome::Typed(len) => write!(f, "{} characters in key phrase", len),
            ActionOutcome::Gate(GateStatus::Success) => write!(f, "SUCCESS! archive unlocked"),
            ActionOutcome::Gate(GateStatus::Error) => write!(f, "access denied"),
            ActionOutcome::Gate(GateStatus::Idle) => write!(f, "waiting for key phrase"),
            ActionOutcome::Moved(id) => write!(f, "moved {}", id),
            ActionOutcome::Waited(d) => write!(f, "waited {} ms", d.as_millis()),
            ActionOutcome::Refreshed => write!(f, "desktop refreshed"),
            ActionOutcome::Show => Ok(()),
            ActionOutcome::Ignored(reason) => write!(f, "ignored: {}", reason),
        }
    }
}
