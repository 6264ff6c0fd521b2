//! Option Keys
//!
//! The fixed key vocabulary and the per-variant whitelist built from it.

use std::fmt;

/// A recognised configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    Host,
    Port,
    TlsEnabled,
    User,
    Password,
    Retry,
    ConnectionTimeout,
    /// Database index selection
    Db,
}

impl OptionKey {
    /// Every key in the vocabulary, in canonical order
    pub const ALL: [OptionKey; 8] = [
        OptionKey::Host,
        OptionKey::Port,
        OptionKey::TlsEnabled,
        OptionKey::User,
        OptionKey::Password,
        OptionKey::Retry,
        OptionKey::ConnectionTimeout,
        OptionKey::Db,
    ];

    /// Option name as callers spell it
    pub const fn name(self) -> &'static str {
        match self {
            OptionKey::Host => "host",
            OptionKey::Port => "port",
            OptionKey::TlsEnabled => "tls_enabled",
            OptionKey::User => "user",
            OptionKey::Password => "password",
            OptionKey::Retry => "retry",
            OptionKey::ConnectionTimeout => "connection_timeout",
            OptionKey::Db => "db",
        }
    }

    /// Look up a key by name. Names outside the vocabulary return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Keys whose values are always strings
    pub fn is_textual(self) -> bool {
        matches!(self, OptionKey::Host | OptionKey::User | OptionKey::Password)
    }

    /// Whether the value should be hidden from logs and debug output
    pub fn is_secret(self) -> bool {
        matches!(self, OptionKey::Password)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Connection-level keys shared by every client variant
pub const BASE_ALLOWED_KEYS: &[OptionKey] = &[
    OptionKey::Host,
    OptionKey::Port,
    OptionKey::TlsEnabled,
    OptionKey::User,
    OptionKey::Password,
    OptionKey::Retry,
    OptionKey::ConnectionTimeout,
];

/// Whitelist of keys a variant accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedKeySet {
    bits: u16,
}

impl AllowedKeySet {
    /// Set with no members
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Set holding exactly `keys`
    pub const fn from_keys(keys: &[OptionKey]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < keys.len() {
            bits |= keys[i].bit();
            i += 1;
        }
        Self { bits }
    }

    /// Base keys plus a variant's extension keys
    pub const fn union(base: &[OptionKey], extension: &[OptionKey]) -> Self {
        Self {
            bits: Self::from_keys(base).bits | Self::from_keys(extension).bits,
        }
    }

    /// Whether `key` is allowed
    pub const fn contains(&self, key: OptionKey) -> bool {
        self.bits & key.bit() != 0
    }

    /// Whether `name` is a known key and allowed. Unknown names are not.
    pub fn contains_name(&self, name: &str) -> bool {
        OptionKey::from_name(name).is_some_and(|k| self.contains(k))
    }

    /// Number of allowed keys
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether no key is allowed
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate members in canonical order
    pub fn iter(&self) -> impl Iterator<Item = OptionKey> + '_ {
        OptionKey::ALL
            .into_iter()
            .filter(move |k| self.contains(*k))
    }
}
