//! Client Variants
//!
//! Each client flavour declares which keys it accepts on top of the shared
//! connection-level set, and how to produce its default configuration.

use super::builder::get_default_config;
use super::configuration::Configuration;
use super::keys::{AllowedKeySet, OptionKey, BASE_ALLOWED_KEYS};

pub trait ClientVariant {
    fn name(&self) -> &'static str;

    /// Keys accepted by this variant in addition to the base set
    fn extension_keys(&self) -> &'static [OptionKey];

    fn allowed_keys(&self) -> AllowedKeySet {
        AllowedKeySet::union(BASE_ALLOWED_KEYS, self.extension_keys())
    }

    fn default_configuration(&self) -> Configuration;
}

/// Client with only the shared connection options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseClient;

impl ClientVariant for BaseClient {
    fn name(&self) -> &'static str {
        "base"
    }

    fn extension_keys(&self) -> &'static [OptionKey] {
        &[]
    }

    fn default_configuration(&self) -> Configuration {
        get_default_config(self)
    }
}

/// Single-node client that can select a database index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandaloneClient;

impl StandaloneClient {
    pub const EXTENSION_KEYS: &'static [OptionKey] = &[OptionKey::Db];
}

impl ClientVariant for StandaloneClient {
    fn name(&self) -> &'static str {
        "standalone"
    }

    fn extension_keys(&self) -> &'static [OptionKey] {
        Self::EXTENSION_KEYS
    }

    fn default_configuration(&self) -> Configuration {
        get_default_config(self)
    }
}
