//! # Configuration
//!
//! Settings for the `termprompt` binary, with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.termprompt/config.toml` unless `--config` points
//! elsewhere. A missing default file is not an error; nothing is written.
//! The library itself reads no configuration: hosts hand the resolved
//! values to `Session` explicitly.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use termprompt::SessionOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub max_attempts: Option<u32>,
    pub clear_screen: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CLEAR_SCREEN: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub max_attempts: Option<u32>,
    pub clear_screen: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            max_attempts: self.max_attempts,
        }
    }
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub max_attempts: Option<u32>,
    pub no_clear: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.termprompt/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termprompt").join("config.toml"))
}

/// Load config from `explicit`, or from the default path when `None`.
///
/// An explicit path must exist. A missing default file yields
/// `PromptConfig::default()`. Malformed TOML is `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<PromptConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(p) => {
                debug!("No config file at {}, using defaults", p.display());
                return Ok(PromptConfig::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(PromptConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PromptConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
pub fn resolve(config: &PromptConfig, cli: &CliOverrides) -> ResolvedConfig {
    let max_attempts = cli.max_attempts.or(config.session.max_attempts);

    // --no-clear only ever turns clearing off
    let clear_screen =
        !cli.no_clear && config.session.clear_screen.unwrap_or(DEFAULT_CLEAR_SCREEN);

    let log_level = cli
        .log_level
        .as_deref()
        .or(config.logging.level.as_deref())
        .map(parse_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());

    ResolvedConfig {
        max_attempts,
        clear_screen,
        log_level,
        log_file,
    }
}

/// Parses a level name (`"debug"`, `"WARN"`, `"off"`...), falling back to the default.
fn parse_level(level: &str) -> LevelFilter {
    match level.trim().parse::<LevelFilter>() {
        Ok(filter) => filter,
        Err(_) => {
            warn!("Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}");
            DEFAULT_LOG_LEVEL
        }
    }
}
