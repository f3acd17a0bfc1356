//! # Core Prompting Logic
//!
//! Everything here is line-based: write a prompt, read one line, decide.
//!
//! ```text
//!     ┌──────────────────────────────────────────┐
//!     │                 Session                  │
//!     │  reader (BufRead)   writer (Write)       │
//!     │  screen (Screen)    options (retries)    │
//!     └───────┬───────────────┬──────────────────┘
//!             │               │
//!      ┌──────▼─────┐  ┌──────▼──────┐   ┌────────────┐
//!      │   menu     │─►│   choice    │   │   text     │
//!      │ (options)  │  │ (range/y-n) │   │ (helpers)  │
//!      └────────────┘  └─────────────┘   └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`]: The `Session` struct and raw `prompt`/`input`
//! - [`choice`]: Number-in-range and yes/no retry loops
//! - [`menu`]: `MenuOption` and the numbered menu / dispatcher
//! - [`screen`]: Clearing the terminal via the platform command
//! - [`text`]: Small string helpers

pub mod choice;
pub mod menu;
pub mod screen;
pub mod session;
pub mod text;
