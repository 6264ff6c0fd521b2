//! Configuration Errors
//!
//! The builder itself never fails. These errors come from reading a
//! resolved value with the wrong type, or from parsing `key=value` text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option '{key}' is not set")]
    Missing { key: &'static str },

    #[error("option '{key}' expected {expected}, found {found}")]
    Type {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("option '{key}' out of range: {value}")]
    OutOfRange { key: &'static str, value: i64 },

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
