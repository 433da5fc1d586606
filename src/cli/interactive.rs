//! Interactive share management session.
//!
//! Runs when no subcommand is given: a menu loop offering list/add/del,
//! driven entirely through the [`Prompter`] capability so tests can script
//! it. Edits accumulate in memory and are persisted once, on normal exit,
//! and only if anything actually changed. Aborting at the main menu throws
//! the whole session away.

use super::Cli;
use crate::conf::SmbConf;
use crate::ui::{Choice, Prompter, TermPrompter};
use anyhow::Result;
use std::io;

/// How a menu session ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The user chose `exit`; pending edits may be persisted.
    Finished,
    /// The user aborted at the main menu; edits are discarded.
    Aborted,
}

pub fn run(cli: &Cli) -> Result<()> {
    let mut conf = SmbConf::load(&cli.conf)?;
    let prompter = TermPrompter::new();

    if menu_loop(&mut conf, &prompter)? == Outcome::Aborted || !conf.is_dirty() {
        return Ok(());
    }

    if cli.stdout {
        conf.write_to(io::stdout().lock())?;
    } else {
        conf.save()?;
        prompter.message("Configuration updated")?;
    }
    Ok(())
}

fn menu_loop(conf: &mut SmbConf, prompter: &dyn Prompter) -> Result<Outcome> {
    let actions = [
        Choice::new("list", "List shares"),
        Choice::new("add", "Add a share"),
        Choice::new("del", "Delete shares"),
        Choice::new("exit", "Exit"),
    ];

    loop {
        let Some(action) = prompter.menu("Samba shares", &actions)? else {
            return Ok(Outcome::Aborted);
        };

        let completed = match action.as_str() {
            "list" => list_shares(conf, prompter)?,
            "add" => add_share(conf, prompter)?,
            "del" => delete_shares(conf, prompter)?,
            "exit" => return Ok(Outcome::Finished),
            other => unreachable!("unknown menu tag `{other}`"),
        };

        if completed.is_none() {
            prompter.message("Action aborted")?;
        }
    }
}

/// Shares rendered as checklist rows: name tag, `path [comment]` label.
fn share_choices(conf: &SmbConf) -> Vec<Choice> {
    conf.shares()
        .map(|s| Choice::new(s.name(), format!("{} [{}]", s.path(), s.comment())))
        .collect()
}

/// Display-only checklist of the current shares.
fn list_shares(conf: &SmbConf, prompter: &dyn Prompter) -> Result<Option<()>> {
    let shares = share_choices(conf);
    if shares.is_empty() {
        prompter.message("No active shares")?;
        return Ok(Some(()));
    }
    Ok(prompter.checklist("Current shares", &shares)?.map(|_| ()))
}

/// Prompt for path, name and comment, then append the new share.
///
/// The path must be non-empty; the name must be non-empty, at most 12
/// characters and not collide with an existing section. Each violation
/// re-prompts. Interactive adds are never writeable.
fn add_share(conf: &mut SmbConf, prompter: &dyn Prompter) -> Result<Option<()>> {
    let path = loop {
        let Some(path) = prompter.input("Directory that is exported", None)? else {
            return Ok(None);
        };
        if !path.is_empty() {
            break path;
        }
        prompter.message("Enter a valid path")?;
    };

    let name = loop {
        let Some(name) = prompter.input("Name of the share", None)? else {
            return Ok(None);
        };
        if conf.has_section(&name) {
            prompter.message("A share with that name already exists")?;
        } else if name.is_empty() || name.len() > 12 {
            prompter.message("You need to enter a name with at most 12 characters")?;
        } else {
            break name;
        }
    };

    let Some(comment) = prompter.input("Comment", None)? else {
        return Ok(None);
    };
    let comment = (!comment.is_empty()).then_some(comment);

    conf.add_section(&name, &path, comment.as_deref(), false);
    Ok(Some(()))
}

fn delete_shares(conf: &mut SmbConf, prompter: &dyn Prompter) -> Result<Option<()>> {
    let shares = share_choices(conf);
    if shares.is_empty() {
        prompter.message("No active shares")?;
        return Ok(Some(()));
    }

    let Some(selection) = prompter.checklist("Select shares to delete", &shares)? else {
        return Ok(None);
    };
    if selection.is_empty() {
        return Ok(Some(()));
    }

    let question = format!("Delete {} selected share(s)?", selection.len());
    let Some(confirmed) = prompter.confirm(&question)? else {
        return Ok(None);
    };
    if !confirmed {
        return Ok(Some(()));
    }

    for name in &selection {
        conf.delete_section(name)?;
    }
    Ok(Some(()))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptResult;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
[global]
   workgroup = HOME
[public]
   path = /srv/public
   comment = Public files
";

    /// Replays canned answers and records every message shown.
    #[derive(Default)]
    struct ScriptedPrompter {
        menu_answers: RefCell<VecDeque<Option<String>>>,
        checklist_answers: RefCell<VecDeque<Option<Vec<String>>>>,
        input_answers: RefCell<VecDeque<Option<String>>>,
        confirm_answers: RefCell<VecDeque<Option<bool>>>,
        messages: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn on_menu(self, answers: &[Option<&str>]) -> Self {
            self.menu_answers
                .borrow_mut()
                .extend(answers.iter().map(|a| a.map(String::from)));
            self
        }

        fn on_checklist(self, answers: &[Option<&[&str]>]) -> Self {
            self.checklist_answers.borrow_mut().extend(
                answers
                    .iter()
                    .map(|a| a.map(|tags| tags.iter().map(|t| t.to_string()).collect())),
            );
            self
        }

        fn on_input(self, answers: &[Option<&str>]) -> Self {
            self.input_answers
                .borrow_mut()
                .extend(answers.iter().map(|a| a.map(String::from)));
            self
        }

        fn on_confirm(self, answers: &[Option<bool>]) -> Self {
            self.confirm_answers.borrow_mut().extend(answers.iter().copied());
            self
        }

        fn saw_message(&self, text: &str) -> bool {
            self.messages.borrow().iter().any(|m| m == text)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn menu(&self, _title: &str, _items: &[Choice]) -> PromptResult<Option<String>> {
            Ok(self.menu_answers.borrow_mut().pop_front().unwrap_or(None))
        }

        fn checklist(&self, _title: &str, _items: &[Choice]) -> PromptResult<Option<Vec<String>>> {
            Ok(self
                .checklist_answers
                .borrow_mut()
                .pop_front()
                .unwrap_or(None))
        }

        fn input(&self, _prompt: &str, _default: Option<&str>) -> PromptResult<Option<String>> {
            Ok(self.input_answers.borrow_mut().pop_front().unwrap_or(None))
        }

        fn message(&self, text: &str) -> PromptResult<()> {
            self.messages.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn confirm(&self, _prompt: &str) -> PromptResult<Option<bool>> {
            // unscripted confirms default to yes
            Ok(self
                .confirm_answers
                .borrow_mut()
                .pop_front()
                .unwrap_or(Some(true)))
        }
    }

    fn load_sample(dir: &TempDir, content: &str) -> SmbConf {
        let path = dir.path().join("smb.conf");
        std::fs::write(&path, content).unwrap();
        SmbConf::load(path).unwrap()
    }

    #[test]
    fn add_flow_validates_path_and_name() {
        let dir = TempDir::new().unwrap();
        let mut conf = load_sample(&dir, SAMPLE);

        let prompter = ScriptedPrompter::default()
            .on_menu(&[Some("add"), Some("exit")])
            .on_input(&[
                Some(""),                 // empty path rejected
                Some("/srv/films"),       // valid path
                Some("public"),           // duplicate name rejected
                Some("a-name-that-is-too-long"), // too long
                Some("films"),            // valid name
                Some(""),                 // empty comment -> defaults to path
            ]);

        let outcome = menu_loop(&mut conf, &prompter).unwrap();
        assert_eq!(outcome, Outcome::Finished);
        assert!(prompter.saw_message("Enter a valid path"));
        assert!(prompter.saw_message("A share with that name already exists"));
        assert!(prompter.saw_message("You need to enter a name with at most 12 characters"));

        assert!(conf.is_dirty());
        let added = conf.sections().last().unwrap();
        assert_eq!(added.name(), "films");
        assert_eq!(added.path(), "/srv/films");
        assert_eq!(added.comment(), "/srv/films");
        assert!(added.lines().concat().contains("writeable = no"));
    }

    #[test]
    fn aborting_an_action_returns_to_the_menu() {
        let dir = TempDir::new().unwrap();
        let mut conf = load_sample(&dir, SAMPLE);

        // enter add, abort at the path prompt, then abort the whole menu
        let prompter = ScriptedPrompter::default()
            .on_menu(&[Some("add"), None])
            .on_input(&[None]);

        let outcome = menu_loop(&mut conf, &prompter).unwrap();
        assert_eq!(outcome, Outcome::Aborted);
        assert!(prompter.saw_message("Action aborted"));
        assert!(!conf.is_dirty());
        assert_eq!(conf.sections().len(), 2);
    }

    #[test]
    fn delete_flow_removes_selected_shares() {
        let dir = TempDir::new().unwrap();
        let mut conf = load_sample(&dir, SAMPLE);

        let prompter = ScriptedPrompter::default()
            .on_menu(&[Some("del"), Some("exit")])
            .on_checklist(&[Some(&["public"])]);

        let outcome = menu_loop(&mut conf, &prompter).unwrap();
        assert_eq!(outcome, Outcome::Finished);
        assert!(!conf.has_section("public"));
        assert!(conf.is_dirty());
    }

    #[test]
    fn declined_confirmation_deletes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut conf = load_sample(&dir, SAMPLE);

        let prompter = ScriptedPrompter::default()
            .on_menu(&[Some("del"), Some("exit")])
            .on_checklist(&[Some(&["public"])])
            .on_confirm(&[Some(false)]);

        let outcome = menu_loop(&mut conf, &prompter).unwrap();
        assert_eq!(outcome, Outcome::Finished);
        assert!(conf.has_section("public"));
        assert!(!conf.is_dirty());
    }

    #[test]
    fn listing_without_shares_shows_a_notice() {
        let dir = TempDir::new().unwrap();
        let mut conf = load_sample(&dir, "[global]\n   workgroup = HOME\n");

        let prompter = ScriptedPrompter::default().on_menu(&[Some("list"), Some("exit")]);

        let outcome = menu_loop(&mut conf, &prompter).unwrap();
        assert_eq!(outcome, Outcome::Finished);
        assert!(prompter.saw_message("No active shares"));
        // a look-only session leaves nothing to persist
        assert!(!conf.is_dirty());
    }

    #[test]
    fn reserved_sections_never_show_up_as_shares() {
        let dir = TempDir::new().unwrap();
        let conf = load_sample(&dir, "[global]\n[printers]\n[homes]\n[public]\n   path = /p\n");
        let tags: Vec<_> = share_choices(&conf).into_iter().map(|c| c.tag).collect();
        assert_eq!(tags, ["public"]);
    }
}
