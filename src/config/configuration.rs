//! Resolved Configuration
//!
//! Immutable result of a build. Values are stored as supplied; the typed
//! accessors are where a wrong type or range first becomes an error.

use super::keys::OptionKey;
use super::value::OptionValue;
use crate::error::{ConfigError, Result};
use std::fmt;
use std::time::Duration;

/// Client configuration consumed by a client constructor
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    host: Option<OptionValue>,
    port: Option<OptionValue>,
    tls_enabled: Option<OptionValue>,
    user: Option<OptionValue>,
    password: Option<OptionValue>,
    retry: Option<OptionValue>,
    connection_timeout: Option<OptionValue>,
    db: Option<OptionValue>,
}

impl Configuration {
    fn slot(&self, key: OptionKey) -> &Option<OptionValue> {
        match key {
            OptionKey::Host => &self.host,
            OptionKey::Port => &self.port,
            OptionKey::TlsEnabled => &self.tls_enabled,
            OptionKey::User => &self.user,
            OptionKey::Password => &self.password,
            OptionKey::Retry => &self.retry,
            OptionKey::ConnectionTimeout => &self.connection_timeout,
            OptionKey::Db => &self.db,
        }
    }

    // Only the builder writes; a finished value has no setters.
    pub(super) fn set(&mut self, key: OptionKey, value: OptionValue) {
        let slot = match key {
            OptionKey::Host => &mut self.host,
            OptionKey::Port => &mut self.port,
            OptionKey::TlsEnabled => &mut self.tls_enabled,
            OptionKey::User => &mut self.user,
            OptionKey::Password => &mut self.password,
            OptionKey::Retry => &mut self.retry,
            OptionKey::ConnectionTimeout => &mut self.connection_timeout,
            OptionKey::Db => &mut self.db,
        };
        *slot = Some(value);
    }

    /// Value for a key, if set
    pub fn value(&self, key: OptionKey) -> Option<&OptionValue> {
        self.slot(key).as_ref()
    }

    /// Value by option name. Unknown names return `None`.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        OptionKey::from_name(name).and_then(|k| self.value(k))
    }

    /// Whether `name` is set
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set keys and their values, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> + '_ {
        OptionKey::ALL
            .into_iter()
            .filter_map(move |k| self.value(k).map(|v| (k, v)))
    }

    /// Number of set keys
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether nothing is set
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw `host` value
    pub fn host(&self) -> Option<&OptionValue> {
        self.host.as_ref()
    }

    /// Raw `port` value
    pub fn port(&self) -> Option<&OptionValue> {
        self.port.as_ref()
    }

    /// Raw `tls_enabled` value
    pub fn tls_enabled(&self) -> Option<&OptionValue> {
        self.tls_enabled.as_ref()
    }

    /// Raw `user` value
    pub fn user(&self) -> Option<&OptionValue> {
        self.user.as_ref()
    }

    /// Raw `password` value
    pub fn password(&self) -> Option<&OptionValue> {
        self.password.as_ref()
    }

    /// Raw `retry` value
    pub fn retry(&self) -> Option<&OptionValue> {
        self.retry.as_ref()
    }

    /// Raw `connection_timeout` value, in seconds
    pub fn connection_timeout(&self) -> Option<&OptionValue> {
        self.connection_timeout.as_ref()
    }

    /// Raw `db` value
    pub fn db(&self) -> Option<&OptionValue> {
        self.db.as_ref()
    }

    fn require(&self, key: OptionKey) -> Result<&OptionValue> {
        self.value(key)
            .ok_or(ConfigError::Missing { key: key.name() })
    }

    fn typed_str(&self, key: OptionKey) -> Result<Option<&str>> {
        match self.value(key) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| type_error(key, "string", v)),
        }
    }

    fn typed_int(&self, key: OptionKey) -> Result<Option<i64>> {
        match self.value(key) {
            None => Ok(None),
            Some(v) => v.as_int().map(Some).ok_or_else(|| type_error(key, "integer", v)),
        }
    }

    /// Host name as a string
    pub fn host_name(&self) -> Result<&str> {
        let v = self.require(OptionKey::Host)?;
        v.as_str()
            .ok_or_else(|| type_error(OptionKey::Host, "string", v))
    }

    /// Port as a TCP port number
    pub fn port_number(&self) -> Result<u16> {
        let v = self.require(OptionKey::Port)?;
        let port = v
            .as_int()
            .ok_or_else(|| type_error(OptionKey::Port, "integer", v))?;
        u16::try_from(port).map_err(|_| ConfigError::OutOfRange {
            key: OptionKey::Port.name(),
            value: port,
        })
    }

    /// `host:port` address for the client engine
    pub fn address(&self) -> Result<String> {
        Ok(format!("{}:{}", self.host_name()?, self.port_number()?))
    }

    /// Whether TLS is requested. Unset means disabled.
    pub fn tls(&self) -> Result<bool> {
        match self.value(OptionKey::TlsEnabled) {
            None => Ok(false),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| type_error(OptionKey::TlsEnabled, "boolean", v)),
        }
    }

    /// Connection timeout, stored in whole seconds
    pub fn connection_timeout_duration(&self) -> Result<Option<Duration>> {
        match self.typed_int(OptionKey::ConnectionTimeout)? {
            None => Ok(None),
            Some(secs) => u64::try_from(secs)
                .map(|s| Some(Duration::from_secs(s)))
                .map_err(|_| ConfigError::OutOfRange {
                    key: OptionKey::ConnectionTimeout.name(),
                    value: secs,
                }),
        }
    }

    /// Database index, for variants that select one
    pub fn database(&self) -> Result<Option<i64>> {
        match self.typed_int(OptionKey::Db)? {
            Some(db) if db < 0 => Err(ConfigError::OutOfRange {
                key: OptionKey::Db.name(),
                value: db,
            }),
            other => Ok(other),
        }
    }

    /// Retry count. The policy itself belongs to the client engine.
    pub fn retry_attempts(&self) -> Result<Option<u32>> {
        match self.typed_int(OptionKey::Retry)? {
            None => Ok(None),
            Some(n) => u32::try_from(n)
                .map(Some)
                .map_err(|_| ConfigError::OutOfRange {
                    key: OptionKey::Retry.name(),
                    value: n,
                }),
        }
    }

    /// User name, if set
    pub fn username(&self) -> Result<Option<&str>> {
        self.typed_str(OptionKey::User)
    }

    /// Password, if set
    pub fn password_value(&self) -> Result<Option<&str>> {
        self.typed_str(OptionKey::Password)
    }

    /// Render one `key = value` line per set key, with secrets redacted
    pub fn display_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(k, v)| format!("{} = {}", k, Redacted(k, v)))
            .collect()
    }
}

fn type_error(key: OptionKey, expected: &'static str, found: &OptionValue) -> ConfigError {
    ConfigError::Type {
        key: key.name(),
        expected,
        found: found.type_name(),
    }
}

/// Display wrapper that hides secret values
pub(crate) struct Redacted<'a>(pub OptionKey, pub &'a OptionValue);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_secret() {
            f.write_str("***")
        } else {
            write!(f, "{}", self.1)
        }
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(&k.name(), &Redacted(k, v));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(pairs: &[(OptionKey, OptionValue)]) -> Configuration {
        let mut config = Configuration::default();
        for (k, v) in pairs {
            config.set(*k, v.clone());
        }
        config
    }

    #[test]
    fn test_named_access() {
        let config = config_with(&[
            (OptionKey::Host, OptionValue::from("10.0.0.1")),
            (OptionKey::Port, OptionValue::from(7000)),
        ]);

        assert_eq!(config.get("host"), Some(&OptionValue::from("10.0.0.1")));
        assert_eq!(config.port(), Some(&OptionValue::Int(7000)));
        assert!(config.db().is_none());
        assert!(!config.contains("bogus"));
        assert_eq!(config.len(), 2);
        assert_eq!(config.address().unwrap(), "10.0.0.1:7000");
    }

    #[test]
    fn test_type_mismatch_surfaces_on_read() {
        let config = config_with(&[
            (OptionKey::Host, OptionValue::from("localhost")),
            (OptionKey::Port, OptionValue::from("not-a-port")),
            (OptionKey::TlsEnabled, OptionValue::Int(1)),
        ]);

        assert_eq!(
            config.port_number(),
            Err(ConfigError::Type {
                key: "port",
                expected: "integer",
                found: "string",
            })
        );
        assert!(config.address().is_err());
        assert!(config.tls().is_err());
    }

    #[test]
    fn test_range_checks() {
        let config = config_with(&[
            (OptionKey::Port, OptionValue::Int(70000)),
            (OptionKey::ConnectionTimeout, OptionValue::Int(-5)),
            (OptionKey::Db, OptionValue::Int(-1)),
            (OptionKey::Retry, OptionValue::Int(3)),
        ]);

        assert_eq!(
            config.port_number(),
            Err(ConfigError::OutOfRange { key: "port", value: 70000 })
        );
        assert!(config.connection_timeout_duration().is_err());
        assert!(config.database().is_err());
        assert_eq!(config.retry_attempts(), Ok(Some(3)));
    }

    #[test]
    fn test_missing_values() {
        let config = Configuration::default();
        assert!(config.is_empty());
        assert_eq!(config.host_name(), Err(ConfigError::Missing { key: "host" }));
        assert_eq!(config.tls(), Ok(false));
        assert_eq!(config.connection_timeout_duration(), Ok(None));
        assert_eq!(config.username(), Ok(None));
    }

    #[test]
    fn test_password_redacted() {
        let config = config_with(&[
            (OptionKey::User, OptionValue::from("admin")),
            (OptionKey::Password, OptionValue::from("hunter2")),
        ]);

        let debug = format!("{:?}", config);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
        assert_eq!(config.display_lines(), vec!["user = admin", "password = ***"]);
        assert_eq!(config.password_value(), Ok(Some("hunter2")));
    }
}
