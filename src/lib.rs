//! KVCONF - Client Configuration for Redis-compatible Stores
//!
//! Filters user-supplied connection options against a per-variant
//! whitelist, merges in defaults, and hands the client engine an
//! immutable configuration value.

pub mod config;
pub mod error;

pub use config::{
    build, get_default_config, BaseClient, ClientVariant, Configuration, ConfigurationBuilder,
    OptionKey, OptionValue, Options, StandaloneClient,
};
pub use error::{ConfigError, Result};

/// Log directives used when `RUST_LOG` is unset or blank
pub const DEFAULT_LOG_DIRECTIVES: &str = "kvconf=info";

/// Pick the log filter directives: `RUST_LOG` when given, otherwise
/// [`DEFAULT_LOG_DIRECTIVES`].
pub fn log_directives(rust_log: Option<&str>) -> &str {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => DEFAULT_LOG_DIRECTIVES,
    }
}

/// Parse a `key=value` pair. Values are trimmed and typed by key, see
/// [`OptionValue::parse_for`].
pub fn parse_option(text: &str) -> Result<(String, OptionValue)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidOption(format!("expected key=value, got '{}'", text)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::InvalidOption(format!("empty key in '{}'", text)));
    }
    let value = OptionValue::parse_for(OptionKey::from_name(key), value);
    Ok((key.to_string(), value))
}
