//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DOMAINS_CHECKED, DEFAULT_REQUIRED_AVAILABLE, DEFAULT_TLD,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and search configuration.
///
/// Generated by `clap` from the field attributes; `Default` supports
/// programmatic use from library callers.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// domain_scout "a fitness tracking app with social sharing"
///
/// # A different TLD, fewer rounds
/// domain_scout "indie game studio" --tld io --max-attempts 3
///
/// # No registrar credentials needed
/// domain_scout "recipe box" --offline
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_scout",
    about = "Finds available domain names for an application description."
)]
pub struct Config {
    /// Free-text description of the application to name
    #[arg(value_parser)]
    pub description: String,

    /// Target TLD (bare label, e.g. "com", "io")
    #[arg(long, default_value = DEFAULT_TLD)]
    pub tld: String,

    /// Stop once this many available names have been found
    #[arg(long = "required", default_value_t = DEFAULT_REQUIRED_AVAILABLE)]
    pub required_available: usize,

    /// Safety bound on generation rounds
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Safety bound on domains checked across the session
    #[arg(long, default_value_t = DEFAULT_MAX_DOMAINS_CHECKED)]
    pub max_domains_checked: usize,

    /// Skip real providers and use the deterministic mock checker
    ///
    /// Useful for demos and development without registrar credentials or
    /// network access. Results are synthetic.
    #[arg(long)]
    pub offline: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description: String::new(),
            tld: DEFAULT_TLD.to_string(),
            required_available: DEFAULT_REQUIRED_AVAILABLE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_domains_checked: DEFAULT_MAX_DOMAINS_CHECKED,
            offline: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Checks that a TLD is a bare label: lowercase alphanumeric, no dots.
///
/// The engine appends the TLD itself, so "com" is valid and ".com" or
/// "co.uk" are rejected.
pub fn is_valid_tld(tld: &str) -> bool {
    !tld.is_empty()
        && tld
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
