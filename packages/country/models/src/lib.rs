#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical country code type shared across the envelope workspace.
//!
//! A [`CountryCode`] is always a two-letter ISO 3166-1 alpha-2 code taken
//! from the static lookup tables in `envelope_country`. It is the only
//! internal representation of "country": raw user input never flows past
//! the resolver.

use serde::{Serialize, Serializer};

/// A canonical two-letter ISO 3166-1 alpha-2 country code.
///
/// Values borrow from static tables, so the type is `Copy` and comparing
/// two codes is a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(&'static str);

impl CountryCode {
    /// United States. The default home country and the fallback origin for
    /// country name translation.
    pub const US: Self = Self("US");

    /// Wraps a code taken from a canonical lookup table.
    ///
    /// This does not validate `code`. Outside of the table crate, obtain
    /// codes through `envelope_country::lookup_country_iso`.
    #[must_use]
    pub const fn from_table(code: &'static str) -> Self {
        Self(code)
    }

    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::US
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_us() {
        assert_eq!(CountryCode::default(), CountryCode::US);
    }

    #[test]
    fn displays_as_code() {
        assert_eq!(CountryCode::from_table("JP").to_string(), "JP");
    }

    #[test]
    fn compares_with_str() {
        assert_eq!(CountryCode::from_table("FR"), "FR");
        assert_ne!(CountryCode::from_table("FR"), "DE");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&CountryCode::from_table("LV")).unwrap();
        assert_eq!(json, "\"LV\"");
    }
}
