//! Interactive prompt capability.
//!
//! The session logic talks to a [`Prompter`] trait object; the production
//! implementation drives the terminal via `dialoguer`, and tests substitute
//! a scripted double. User abort (Esc, Ctrl-C) surfaces as `Ok(None)` from
//! every choice-returning method, never as a panic or a process exit.

mod term;

pub use term::TermPrompter;

use thiserror::Error;

/// Errors from the terminal prompt layer.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal interaction failed")]
    Terminal(#[from] dialoguer::Error),

    #[error("terminal write failed")]
    Io(#[from] std::io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// One selectable row of a menu or checklist.
#[derive(Debug, Clone)]
pub struct Choice {
    /// Stable identifier returned from selections.
    pub tag: String,
    /// Human-readable row text.
    pub label: String,
    /// Preselected in checklists; ignored by menus.
    pub selected: bool,
}

impl Choice {
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            selected: false,
        }
    }
}

/// Blocking terminal prompts used by the interactive session.
pub trait Prompter {
    /// Single-choice menu; returns the tag of the chosen row.
    fn menu(&self, title: &str, items: &[Choice]) -> PromptResult<Option<String>>;

    /// Multi-choice checklist; returns the tags of the selected rows.
    fn checklist(&self, title: &str, items: &[Choice]) -> PromptResult<Option<Vec<String>>>;

    /// Free-text input with an optional default.
    fn input(&self, prompt: &str, default: Option<&str>) -> PromptResult<Option<String>>;

    /// Blocking informational message.
    fn message(&self, text: &str) -> PromptResult<()>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str) -> PromptResult<Option<bool>>;
}
