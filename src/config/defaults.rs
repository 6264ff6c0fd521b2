//! Default Values
//!
//! Values substituted for keys the caller leaves out.

use super::keys::OptionKey;
use super::value::OptionValue;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_DB: i64 = 0;
pub const DEFAULT_TLS_ENABLED: bool = false;
/// Connection timeout in seconds
pub const DEFAULT_CONNECTION_TIMEOUT_SECS: i64 = 1;

/// Keys that carry a default, in canonical order
pub const DEFAULTED_KEYS: &[OptionKey] = &[
    OptionKey::Host,
    OptionKey::Port,
    OptionKey::TlsEnabled,
    OptionKey::ConnectionTimeout,
    OptionKey::Db,
];

/// Default for a key, if it has one
pub fn default_value(key: OptionKey) -> Option<OptionValue> {
    match key {
        OptionKey::Host => Some(OptionValue::from(DEFAULT_HOST)),
        OptionKey::Port => Some(OptionValue::from(DEFAULT_PORT)),
        OptionKey::TlsEnabled => Some(OptionValue::Bool(DEFAULT_TLS_ENABLED)),
        OptionKey::ConnectionTimeout => Some(OptionValue::Int(DEFAULT_CONNECTION_TIMEOUT_SECS)),
        OptionKey::Db => Some(OptionValue::Int(DEFAULT_DB)),
        OptionKey::User | OptionKey::Password | OptionKey::Retry => None,
    }
}

/// The full default mapping, keyed by option name.
///
/// Includes `db` even though not every variant accepts it.
pub fn default_options() -> impl Iterator<Item = (&'static str, OptionValue)> {
    DEFAULTED_KEYS
        .iter()
        .filter_map(|k| default_value(*k).map(|v| (k.name(), v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaulted_keys_match_lookup() {
        for key in OptionKey::ALL {
            assert_eq!(
                default_value(key).is_some(),
                DEFAULTED_KEYS.contains(&key),
                "mismatch for {}",
                key
            );
        }
    }

    #[test]
    fn test_default_options() {
        let defaults: Vec<_> = default_options().collect();
        assert_eq!(defaults.len(), 5);
        assert!(defaults.contains(&("host", OptionValue::from("localhost"))));
        assert!(defaults.contains(&("port", OptionValue::Int(6379))));
        assert!(defaults.contains(&("db", OptionValue::Int(0))));
        assert!(defaults.contains(&("tls_enabled", OptionValue::Bool(false))));
        assert!(defaults.contains(&("connection_timeout", OptionValue::Int(1))));
    }
}
