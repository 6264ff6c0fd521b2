//! Client Configuration
//!
//! Turns caller-supplied options into an immutable, per-variant
//! configuration for the client engine.

mod builder;
mod configuration;
mod defaults;
mod keys;
mod value;
mod variant;

pub use builder::{build, get_default_config, ConfigurationBuilder, Options};
pub use configuration::Configuration;
pub use defaults::{
    default_options, default_value, DEFAULTED_KEYS, DEFAULT_CONNECTION_TIMEOUT_SECS, DEFAULT_DB,
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TLS_ENABLED,
};
pub use keys::{AllowedKeySet, OptionKey, BASE_ALLOWED_KEYS};
pub use value::OptionValue;
pub use variant::{BaseClient, ClientVariant, StandaloneClient};
