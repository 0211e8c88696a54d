//! Clue tracker answers
//!
//! The answers live with the session, not with the clue-tracker window, so
//! closing and reopening the tracker keeps what the player typed.

use crate::clues::{ClueId, CLUE_COUNT};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Fifteen typed answers, index `i` holding the answer for clue `i + 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSheet {
    answers: Vec<String>,
}

impl Default for AnswerSheet {
    fn default() -> Self {
        Self {
            answers: vec![String::new(); CLUE_COUNT],
        }
    }
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ClueId) -> &str {
        &self.answers[id.index()]
    }

    pub fn set(&mut self, id: ClueId, value: &str) {
        self.answers[id.index()] = value.to_string();
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn filled(&self) -> usize {
        self.answers.iter().filter(|a| !a.trim().is_empty()).count()
    }

    /// First letter of every answer in clue order, `_` for blanks
    pub fn acrostic(&self) -> String {
        self.answers
            .iter()
            .map(|a| {
                a.trim()
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().next().unwrap_or(c))
                    .unwrap_or('_')
            })
            .collect()
    }
}

/// Read/update capability over the session's answer sheet
#[derive(Debug, Clone, Default)]
pub struct AnswerHandle {
    sheet: Arc<RwLock<AnswerSheet>>,
}

impl AnswerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> AnswerSheet {
        self.sheet.read().clone()
    }

    pub fn update(&self, id: ClueId, value: &str) {
        self.sheet.write().set(id, value);
    }

    pub fn clear(&self) {
        *self.sheet.write() = AnswerSheet::new();
    }
}
