//! Configuration Builder
//!
//! Filters candidate options against a variant's whitelist and fills in
//! defaults. Unknown keys are dropped without error; building never fails.

use super::configuration::{Configuration, Redacted};
use super::defaults::{default_options, default_value};
use super::keys::{AllowedKeySet, OptionKey};
use super::value::OptionValue;
use super::variant::ClientVariant;
use hashbrown::HashMap;
use tracing::{debug, trace};

/// Candidate options keyed by name
pub type Options = HashMap<String, OptionValue>;

/// Fluent builder for a variant's configuration
pub struct ConfigurationBuilder<'a, V: ClientVariant + ?Sized> {
    variant: &'a V,
    options: Options,
}

impl<'a, V: ClientVariant + ?Sized> ConfigurationBuilder<'a, V> {
    /// Start an empty builder for `variant`
    pub fn new(variant: &'a V) -> Self {
        Self {
            variant,
            options: Options::new(),
        }
    }

    /// Add one option. A later value for the same name replaces an earlier one.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Add several options, later names replacing earlier ones
    pub fn options<I, K, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<OptionValue>,
    {
        self.options
            .extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set the host
    pub fn with_host(self, host: impl Into<String>) -> Self {
        self.option(OptionKey::Host.name(), host.into())
    }

    /// Set the port
    pub fn with_port(self, port: u16) -> Self {
        self.option(OptionKey::Port.name(), port)
    }

    /// Enable or disable TLS
    pub fn with_tls(self, enabled: bool) -> Self {
        self.option(OptionKey::TlsEnabled.name(), enabled)
    }

    /// Set user and password
    pub fn with_credentials(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.option(OptionKey::User.name(), user.into())
            .option(OptionKey::Password.name(), password.into())
    }

    /// Filter, apply defaults, and freeze the result
    pub fn build(self) -> Configuration {
        let allowed = self.variant.allowed_keys();
        let mut config = Configuration::default();
        let (accepted, dropped) = partition(self.options, allowed);

        for (key, value) in accepted {
            debug!(key = %key, value = %Redacted(key, &value), "Accepted option");
            config.set(key, value);
        }
        for name in &dropped {
            trace!(key = %name, variant = self.variant.name(), "Dropped option");
        }
        let dropped = dropped.len();

        let supplied = config.len();
        for key in allowed.iter() {
            if config.value(key).is_none() {
                if let Some(value) = default_value(key) {
                    config.set(key, value);
                }
            }
        }

        debug!(
            variant = self.variant.name(),
            supplied,
            defaulted = config.len() - supplied,
            dropped,
            "Configuration built"
        );

        config
    }
}

/// Split options into allowed pairs, in canonical key order, and the
/// sorted names of everything else.
fn partition(mut options: Options, allowed: AllowedKeySet) -> (Vec<(OptionKey, OptionValue)>, Vec<String>) {
    let accepted = allowed
        .iter()
        .filter_map(|key| options.remove(key.name()).map(|value| (key, value)))
        .collect();

    let mut dropped: Vec<String> = options.into_keys().collect();
    dropped.sort_unstable();

    (accepted, dropped)
}

/// Build a configuration for `variant` from arbitrary candidate options
pub fn build<V, I, K, T>(options: I, variant: &V) -> Configuration
where
    V: ClientVariant + ?Sized,
    I: IntoIterator<Item = (K, T)>,
    K: Into<String>,
    T: Into<OptionValue>,
{
    ConfigurationBuilder::new(variant).options(options).build()
}

/// Configuration populated entirely from defaults
pub fn get_default_config<V: ClientVariant + ?Sized>(variant: &V) -> Configuration {
    build(default_options(), variant)
}
