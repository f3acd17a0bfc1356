//! # Option Menus
//!
//! A menu is an ordered slice of `MenuOption`s rendered as
//!
//! ```text
//! 1) Greet
//! 2) Quit
//!
//! ```
//!
//! followed by a range prompt over `[1, options.len()]`. Display order is
//! selection order; names need not be unique.

use std::fmt;
use std::io::{BufRead, Write};

use log::debug;

use super::session::{PromptError, Session};

/// A named menu entry and the action to run when it is chosen.
pub struct MenuOption<'a> {
    name: String,
    action: Box<dyn FnMut() + 'a>,
}

impl<'a> MenuOption<'a> {
    pub fn new(name: impl Into<String>, action: impl FnMut() + 'a) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&mut self) {
        (self.action)()
    }
}

impl fmt::Debug for MenuOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Prints the numbered menu and returns the 1-based choice.
    ///
    /// The menu is written again on every call, but not again on retries
    /// within the call.
    pub fn choose_option(
        &mut self,
        options: &[MenuOption<'_>],
        prompt: &str,
    ) -> Result<usize, PromptError> {
        let out = self.writer_mut();
        for (index, option) in options.iter().enumerate() {
            writeln!(out, "{}) {}", index + 1, option.name).map_err(PromptError::Write)?;
        }
        writeln!(out).map_err(PromptError::Write)?;

        self.choose_number_from_range(options.len(), prompt)
    }

    /// Shows the menu, optionally clears the screen, then runs the chosen action.
    pub fn choose_and_run_option(
        &mut self,
        options: &mut [MenuOption<'_>],
        prompt: &str,
        clear: bool,
    ) -> Result<(), PromptError> {
        let choice = self.choose_option(options, prompt)?;
        if clear {
            self.clear_screen();
        }

        let option = &mut options[choice - 1];
        debug!("Running option {choice}: {}", option.name);
        option.run();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingScreen, output, scripted};
    use std::cell::Cell;

    fn named(names: &[&str]) -> Vec<MenuOption<'static>> {
        names.iter().map(|n| MenuOption::new(*n, || {})).collect()
    }

    // ==========================================================================
    // choose_option
    // ==========================================================================

    #[test]
    fn choose_option_prints_menu_then_prompts() {
        let mut session = scripted("2\n");
        let options = named(&["Alpha", "Beta"]);
        assert_eq!(session.choose_option(&options, "Choice: ").unwrap(), 2);
        assert_eq!(output(&session), "1) Alpha\n2) Beta\n\nChoice: ");
    }

    #[test]
    fn choose_option_prints_menu_once_across_retries() {
        let mut session = scripted("3\n1\n");
        let options = named(&["Only", "Other"]);
        assert_eq!(session.choose_option(&options, "> ").unwrap(), 1);
        assert_eq!(output(&session), "1) Only\n2) Other\n\n> > ");
        assert_eq!(session.rejected_inputs(), 1);
    }

    #[test]
    fn choose_option_reprints_on_each_call() {
        let mut session = scripted("1\n1\n");
        let options = named(&["A"]);
        session.choose_option(&options, "").unwrap();
        session.choose_option(&options, "").unwrap();
        assert_eq!(output(&session), "1) A\n\n1) A\n\n");
    }

    #[test]
    fn choose_option_allows_duplicate_names() {
        let mut session = scripted("2\n");
        let options = named(&["Same", "Same"]);
        assert_eq!(session.choose_option(&options, "").unwrap(), 2);
    }

    #[test]
    fn choose_option_empty_menu_is_empty_range() {
        let mut session = scripted("1\n");
        assert!(matches!(
            session.choose_option(&[], ""),
            Err(PromptError::EmptyRange)
        ));
        assert_eq!(output(&session), "\n");
    }

    // ==========================================================================
    // choose_and_run_option
    // ==========================================================================

    #[test]
    fn run_option_invokes_chosen_action_once() {
        let hits = Cell::new(0);
        let (screen, clears) = RecordingScreen::new();
        let mut session = scripted("1\n").with_screen(screen);
        let mut options = vec![MenuOption::new("A", || hits.set(hits.get() + 1))];

        session
            .choose_and_run_option(&mut options, "> ", false)
            .unwrap();

        assert_eq!(hits.get(), 1);
        assert_eq!(clears.get(), 0);
    }

    #[test]
    fn run_option_clears_before_running() {
        let (screen, clears) = RecordingScreen::new();
        let cleared_first = Cell::new(false);
        let mut session = scripted("2\n").with_screen(screen);
        let probe = clears.clone();
        let mut options = vec![
            MenuOption::new("First", || panic!("wrong option")),
            MenuOption::new("Second", || cleared_first.set(probe.get() == 1)),
        ];

        session
            .choose_and_run_option(&mut options, "> ", true)
            .unwrap();

        assert!(cleared_first.get());
        assert_eq!(clears.get(), 1);
    }

    #[test]
    fn run_option_with_mutable_capture() {
        let mut log = Vec::new();
        {
            let mut session = scripted("1\n");
            let mut options = vec![
                MenuOption::new("one", || log.push("one")),
                MenuOption::new("two", || {}),
            ];
            session
                .choose_and_run_option(&mut options, "", false)
                .unwrap();
        }
        assert_eq!(log, vec!["one"]);
    }

    #[test]
    fn run_option_runs_nothing_on_failure() {
        let ran = Cell::new(false);
        let (screen, clears) = RecordingScreen::new();
        let mut session = scripted("9\n").with_screen(screen).with_max_attempts(1);
        let mut options = vec![MenuOption::new("A", || ran.set(true))];

        assert!(session.choose_and_run_option(&mut options, "", true).is_err());
        assert!(!ran.get());
        assert_eq!(clears.get(), 0);
    }

    #[test]
    fn menu_option_debug_shows_name() {
        let option = MenuOption::new("Greet", || {});
        assert!(format!("{option:?}").contains("Greet"));
        assert_eq!(option.name(), "Greet");
    }
}
