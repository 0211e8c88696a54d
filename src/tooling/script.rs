//! Line-oriented action scripts

use crate::desktop::{ActionOutcome, DesktopAction, Session};
use crate::error::ApiError;

/// One executed script line
#[derive(Debug, Clone)]
pub struct ScriptStep {
    pub line_no: usize,
    pub action: String,
    pub outcome: ActionOutcome,
}

/// Parse every line first, then apply them in order.
///
/// Blank lines and `#` comments are skipped. A parse error aborts before any
/// action runs and names the offending line.
pub fn run_script(session: &mut Session, script: &str) -> Result<Vec<ScriptStep>, ApiError> {
    let mut parsed = Vec::new();
    for (idx, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: DesktopAction = line.parse().map_err(|e: ApiError| {
            ApiError::InvalidAction(format!("line {}: {}", idx + 1, e))
        })?;
        parsed.push((idx + 1, line.to_string(), action));
    }

    Ok(parsed
        .into_iter()
        .map(|(line_no, text, action)| ScriptStep {
            line_no,
            action: text,
            outcome: session.apply(action),
        })
        .collect())
}
