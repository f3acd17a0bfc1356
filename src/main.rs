mod config;

use std::cell::Cell;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use config::{CliOverrides, ResolvedConfig};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use termprompt::{MenuOption, PromptError, Session, StdioSession, capitalize_word};

#[derive(Parser)]
#[command(name = "termprompt", about = "Interactive demo of line-based terminal menus")]
struct Args {
    /// Config file (defaults to ~/.termprompt/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Give up after this many invalid answers (default: never)
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Never clear the screen before running a menu action
    #[arg(long)]
    no_clear: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_attempts: self.max_attempts,
            no_clear: self.no_clear,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn init_logging(resolved: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(path) = &resolved.log_file {
        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
                return;
            }
            Err(e) => eprintln!("Could not open log file {}: {e}", path.display()),
        }
    }

    // Validation messages go to stderr so they never mix with menus on stdout
    let _ = TermLogger::init(
        resolved.log_level,
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(&file_config, &args.overrides());
    init_logging(&resolved);

    log::info!("termprompt starting with {:?}", resolved);

    let mut session = StdioSession::stdio().with_options(resolved.session_options());

    // Giving up is still a failure for scripted callers: exit non-zero
    if let Err(e) = run(&mut session, resolved.clear_screen) {
        log::error!("Stopping: {e}");
        return Err(e.into());
    }
    Ok(())
}

/// Main menu loop. Actions that need input set a pending request that is
/// handled after the menu returns, while the session is free again.
fn run<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    clear: bool,
) -> Result<(), PromptError> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Next {
        Menu,
        Greet,
        Capitalize,
        Clear,
        Quit,
    }

    loop {
        let next = Cell::new(Next::Menu);
        let mut options = vec![
            MenuOption::new("Greet", || next.set(Next::Greet)),
            MenuOption::new("Capitalize a word", || next.set(Next::Capitalize)),
            MenuOption::new("Clear screen", || next.set(Next::Clear)),
            MenuOption::new("Quit", || next.set(Next::Quit)),
        ];
        session.choose_and_run_option(&mut options, "Choose an option: ", clear)?;

        match next.get() {
            Next::Menu => {}
            Next::Greet => {
                let name = session.prompt("Your name: ")?;
                writeln!(session.writer_mut(), "Hello, {}!\n", capitalize_word(&name))
                    .map_err(PromptError::Write)?;
            }
            Next::Capitalize => {
                let word = session.prompt("Word: ")?;
                writeln!(session.writer_mut(), "{}\n", capitalize_word(&word))
                    .map_err(PromptError::Write)?;
            }
            Next::Clear => session.clear_screen(),
            Next::Quit => {
                if session.confirm("Really quit? [y/n] ")? {
                    log::info!("Bye");
                    return Ok(());
                }
            }
        }
    }
}
