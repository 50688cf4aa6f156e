//! Self-validating wrappers for the primitive values scraped off a page.
//!
//! Construction is the only validation gate: every constructor returns a
//! `Result`, and there is no way to hold a [`ValidUrl`] or [`Price`] that
//! failed its checks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::error::CoreError;

/// An absolute URL with a non-empty scheme and network location.
///
/// The input string is kept verbatim and is what [`fmt::Display`]
/// and serialization produce; [`ValidUrl::as_url`] exposes the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidUrl {
    raw: String,
    parsed: Url,
}

impl ValidUrl {
    /// Validates `input` as `scheme://host[...]`.
    ///
    /// Scheme-only forms such as `mailto:someone@example.com` or
    /// `http:example.com` are rejected because they carry no `//authority`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidUrl`] when the input does not parse or
    /// lacks either component.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidUrl {
            input: input.to_owned(),
            reason,
        };

        let parsed = Url::parse(input).map_err(|e| invalid(e.to_string()))?;

        let has_authority = input
            .split_once(':')
            .is_some_and(|(scheme, rest)| {
                scheme.eq_ignore_ascii_case(parsed.scheme()) && rest.starts_with("//")
            });
        if !has_authority {
            return Err(invalid("missing scheme or network location".to_owned()));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing network location".to_owned()));
        }

        Ok(Self {
            raw: input.to_owned(),
            parsed,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.parsed
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ValidUrl {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ValidUrl {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A non-negative whole-number price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPrice`] when `value` is negative.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| CoreError::InvalidPrice(value.into()))
    }

    /// Parses a decimal integer string, ignoring surrounding whitespace.
    ///
    /// A leading sign is accepted, so `"-3"` converts and then fails the
    /// non-negative check rather than the conversion. Any digit string that
    /// fits in a `u64` succeeds.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Conversion`] if `input` is not an integer.
    /// - [`CoreError::InvalidPrice`] if the integer is negative.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let conversion = || CoreError::Conversion {
            input: input.to_owned(),
        };

        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(conversion());
        }

        let magnitude = digits.parse::<u64>().map_err(|_| conversion())?;
        if negative && magnitude != 0 {
            return Err(CoreError::InvalidPrice(-i128::from(magnitude)));
        }
        Ok(Self(magnitude))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Price {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price as it appears on an item page.
///
/// Integer text is validated through [`Price`]; display text that is not an
/// integer (`"$10"`, `"Free"`, `"US $4.99"`) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PriceField {
    Amount(Price),
    Text(String),
}

impl PriceField {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPrice`] when `raw` is a negative integer.
    pub fn from_raw(raw: &str) -> Result<Self, CoreError> {
        match Price::parse(raw) {
            Ok(price) => Ok(Self::Amount(price)),
            Err(CoreError::Conversion { .. }) => Ok(Self::Text(raw.to_owned())),
            Err(e) => Err(e),
        }
    }

    /// The validated amount, when the page carried a bare integer.
    #[must_use]
    pub fn amount(&self) -> Option<Price> {
        match self {
            Self::Amount(price) => Some(*price),
            Self::Text(_) => None,
        }
    }
}

impl From<Price> for PriceField {
    fn from(price: Price) -> Self {
        Self::Amount(price)
    }
}

impl From<&PriceField> for serde_json::Value {
    fn from(field: &PriceField) -> Self {
        match field {
            PriceField::Amount(price) => Self::from(price.get()),
            PriceField::Text(text) => Self::String(text.clone()),
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(price) => write!(f, "{price}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
#[path = "values_test.rs"]
mod tests;
