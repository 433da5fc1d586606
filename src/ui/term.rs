//! `dialoguer`-backed terminal prompts.

use super::{Choice, PromptResult, Prompter};
use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use owo_colors::OwoColorize;
use std::io;

/// Production [`Prompter`] driving the controlling terminal.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn menu(&self, title: &str, items: &[Choice]) -> PromptResult<Option<String>> {
        let labels: Vec<&str> = items.iter().map(|c| c.label.as_str()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(picked.map(|i| items[i].tag.clone()))
    }

    fn checklist(&self, title: &str, items: &[Choice]) -> PromptResult<Option<Vec<String>>> {
        let labels: Vec<&str> = items.iter().map(|c| c.label.as_str()).collect();
        let defaults: Vec<bool> = items.iter().map(|c| c.selected).collect();
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(title)
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()?;
        Ok(picked.map(|indexes| indexes.into_iter().map(|i| items[i].tag.clone()).collect()))
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> PromptResult<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        match input.interact_text() {
            Ok(text) => Ok(Some(text)),
            // Ctrl-C surfaces as an interrupted read; treat it as abort
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn message(&self, text: &str) -> PromptResult<()> {
        let term = Term::stderr();
        term.write_line(text)?;
        term.write_line(&format!("{}", "press any key to continue".dimmed()))?;
        term.read_key()?;
        Ok(())
    }

    fn confirm(&self, prompt: &str) -> PromptResult<Option<bool>> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?)
    }
}
