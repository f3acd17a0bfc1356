//! # termprompt
//!
//! Line-based terminal prompts: read a trimmed line, pick a number in a
//! range, choose from a numbered menu of actions, confirm yes/no, and
//! clear the screen.
//!
//! ```rust,no_run
//! use termprompt::{MenuOption, StdioSession};
//!
//! let mut session = StdioSession::stdio();
//! let mut greeted = false;
//! let mut options = vec![
//!     MenuOption::new("Say hello", || greeted = true),
//!     MenuOption::new("Do nothing", || {}),
//! ];
//! session.choose_and_run_option(&mut options, "Choice: ", true)?;
//! # Ok::<(), termprompt::PromptError>(())
//! ```
//!
//! Validation and read failures are reported through the `log` facade;
//! install a logger in the host to see them.

pub mod core;

#[cfg(test)]
pub mod test_support;

pub use crate::core::choice::parse_confirmation;
pub use crate::core::menu::MenuOption;
pub use crate::core::screen::{ClearCommand, NoopScreen, Screen, SystemScreen};
pub use crate::core::session::{PromptError, Session, SessionOptions, StdioSession};
pub use crate::core::text::capitalize_word;
