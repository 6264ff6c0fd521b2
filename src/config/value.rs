//! Option Values
//!
//! Loosely typed values carried by configuration options.

use super::keys::OptionKey;
use std::fmt;

/// A single option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl OptionValue {
    /// Parse text into the narrowest matching value.
    ///
    /// `true`/`false` (any case) become booleans, decimal integers become
    /// integers, and everything else is kept as a string.
    pub fn parse_loose(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        match trimmed.parse::<i64>() {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Str(trimmed.to_string()),
        }
    }

    /// Parse text for a known key. String-only keys never become numbers
    /// or booleans; other and unknown keys go through [`Self::parse_loose`].
    pub fn parse_for(key: Option<OptionKey>, text: &str) -> Self {
        match key {
            Some(k) if k.is_textual() => Self::Str(text.trim().to_string()),
            _ => Self::parse_loose(text),
        }
    }

    /// String contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer contents, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean contents, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the carried type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OptionValue {
                fn from(i: $t) -> Self {
                    Self::Int(i as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loose() {
        assert_eq!(OptionValue::parse_loose("TRUE"), OptionValue::Bool(true));
        assert_eq!(OptionValue::parse_loose("false"), OptionValue::Bool(false));
        assert_eq!(OptionValue::parse_loose("7000"), OptionValue::Int(7000));
        assert_eq!(OptionValue::parse_loose("-1"), OptionValue::Int(-1));
        assert_eq!(
            OptionValue::parse_loose("10.0.0.1"),
            OptionValue::Str("10.0.0.1".to_string())
        );
    }

    #[test]
    fn test_parse_trims_strings() {
        assert_eq!(
            OptionValue::parse_loose("  10.0.0.1 "),
            OptionValue::Str("10.0.0.1".to_string())
        );
    }

    #[test]
    fn test_parse_for_textual_keys() {
        assert_eq!(
            OptionValue::parse_for(Some(OptionKey::Password), "123456"),
            OptionValue::Str("123456".to_string())
        );
        assert_eq!(
            OptionValue::parse_for(Some(OptionKey::User), " true "),
            OptionValue::Str("true".to_string())
        );
        assert_eq!(
            OptionValue::parse_for(Some(OptionKey::Host), "10"),
            OptionValue::Str("10".to_string())
        );
        assert_eq!(OptionValue::parse_for(Some(OptionKey::Port), "7000"), OptionValue::Int(7000));
        assert_eq!(OptionValue::parse_for(None, "false"), OptionValue::Bool(false));
    }

    #[test]
    fn test_typed_views() {
        let v = OptionValue::from(6379u16);
        assert_eq!(v.as_int(), Some(6379));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.type_name(), "integer");

        let v = OptionValue::from("localhost");
        assert_eq!(v.as_str(), Some("localhost"));
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.to_string(), "localhost");
    }
}
