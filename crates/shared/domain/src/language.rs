//! Language keys.
//!
//! A [`LanguageKey`] names a translation bundle (`en`, `pt-br`, `zh-Hant`). The locale
//! stream carries `Option<LanguageKey>`, where `None` means no language was selected yet.

use crate::constants::MAX_LANGUAGE_KEY_LEN;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

/// A validated, opaque language identifier.
///
/// Keys are non-empty ASCII alphanumeric segments joined by `-` or `_`, at most
/// [`MAX_LANGUAGE_KEY_LEN`] bytes long. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageKey(Cow<'static, str>);

impl LanguageKey {
    pub const ENGLISH: Self = Self(Cow::Borrowed("en"));
    pub const FRENCH: Self = Self(Cow::Borrowed("fr"));
    pub const GERMAN: Self = Self(Cow::Borrowed("de"));

    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidLanguageKey`] for empty or overlong keys, keys with
    /// characters outside `[A-Za-z0-9_-]`, or keys with empty segments (`en-`, `-us`).
    pub fn parse(raw: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading segment, e.g. `pt` for `pt-br`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or_default()
    }
}

fn validate(raw: &str) -> Result<(), DomainError> {
    let invalid = |message: &'static str| DomainError::InvalidLanguageKey {
        message: message.into(),
        context: Some(format!("{raw:?}").into()),
    };

    if raw.is_empty() {
        return Err(invalid("language key cannot be empty"));
    }
    if raw.len() > MAX_LANGUAGE_KEY_LEN {
        return Err(invalid("language key is too long"));
    }
    if !raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
        return Err(invalid("language key may only contain ASCII letters, digits, '-' and '_'"));
    }
    if raw.split(['-', '_']).any(str::is_empty) {
        return Err(invalid("language key has an empty segment"));
    }
    Ok(())
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.to_owned())
    }
}

impl TryFrom<String> for LanguageKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&'static str> for LanguageKey {
    type Error = DomainError;

    fn try_from(value: &'static str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LanguageKey> for String {
    fn from(key: LanguageKey) -> Self {
        key.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_tags() {
        for raw in ["en", "fr", "pt-br", "zh-Hant", "sr_Latn", "de-CH-1996"] {
            let key = LanguageKey::parse(raw).unwrap();
            assert_eq!(key.as_str(), raw);
        }
    }

    #[test]
    fn rejects_malformed_keys() {
        for raw in ["", "en-", "-en", "en--us", "en us", "fr/ca", "é"] {
            assert!(
                matches!(LanguageKey::parse(raw), Err(DomainError::InvalidLanguageKey { .. })),
                "{raw:?} should be rejected"
            );
        }
        assert!(LanguageKey::parse("a".repeat(MAX_LANGUAGE_KEY_LEN + 1)).is_err());
    }

    #[test]
    fn primary_segment() {
        assert_eq!("pt-br".parse::<LanguageKey>().unwrap().primary(), "pt");
        assert_eq!(LanguageKey::ENGLISH.primary(), "en");
    }

    #[test]
    fn constants_are_valid() {
        for key in [LanguageKey::ENGLISH, LanguageKey::FRENCH, LanguageKey::GERMAN] {
            assert!(LanguageKey::parse(key.to_string()).is_ok());
        }
    }
}
