#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City line layouts.
//!
//! Every postal system orders city, region, and postal code differently.
//! This crate holds one ordered table, [`rules::LAYOUT_RULES`], mapping
//! groups of country codes to a formatting function, plus
//! [`rules::DEFAULT_LAYOUT`] for everything else. Supporting a new country
//! means appending a rule; the dispatch in [`city_line`] never changes.
//!
//! Layouts are based on a sampling of city line formats and are not an
//! exhaustive statement of postal conventions.

pub mod rules;

use envelope_country_models::CountryCode;

pub use rules::{DEFAULT_LAYOUT, LAYOUT_RULES, LayoutRule};

/// The three values a city line is built from.
///
/// Values are trimmed; blank values are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityFields<'a> {
    /// City, town, or locality.
    pub city: &'a str,
    /// State, province, or other first-level subdivision.
    pub region: &'a str,
    /// Postal or ZIP code.
    pub postal_code: &'a str,
}

impl<'a> CityFields<'a> {
    /// Builds fields from optional values.
    #[must_use]
    pub fn new(city: Option<&'a str>, region: Option<&'a str>, postal_code: Option<&'a str>) -> Self {
        Self {
            city: city.map_or("", str::trim),
            region: region.map_or("", str::trim),
            postal_code: postal_code.map_or("", str::trim),
        }
    }
}

/// Returns the layout rule used for `code`.
///
/// An absent code uses the domestic rule shared with `US`, `CA`, and
/// `AU`. Codes with no rule use [`DEFAULT_LAYOUT`].
#[must_use]
pub fn layout_for(code: Option<CountryCode>) -> &'static LayoutRule {
    let key = code.map_or("", CountryCode::as_str);
    LAYOUT_RULES
        .iter()
        .find(|rule| rule.codes.contains(&key))
        .unwrap_or(&DEFAULT_LAYOUT)
}

/// Formats the city, region, and postal code for a destination country.
///
/// The result may span several lines separated by `\n`. It never ends
/// with a separator, and a missing value takes its own separator, brackets,
/// and prefix with it.
#[must_use]
pub fn city_line(
    code: Option<CountryCode>,
    city: Option<&str>,
    region: Option<&str>,
    postal_code: Option<&str>,
) -> String {
    let fields = CityFields::new(city, region, postal_code);
    (layout_for(code).format)(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_country::resolve;

    fn line(country: &str, city: &str, region: &str, postal: &str) -> String {
        city_line(resolve(country), Some(city), Some(region), Some(postal))
    }

    #[test]
    fn formats_japan_on_two_lines() {
        assert_eq!(
            line("JP", "Tokyo", "Tokyo-to", "100-0001"),
            "Tokyo, Tokyo-to\n100-0001"
        );
    }

    #[test]
    fn formats_us_with_double_space_before_zip() {
        assert_eq!(
            line("US", "Springfield", "IL", "62701"),
            "Springfield IL  62701"
        );
    }

    #[test]
    fn formats_latvia_with_prefixed_postal_code() {
        assert_eq!(
            city_line(resolve("LV"), Some("Riga"), None, Some("1010")),
            "Riga, LV-1010"
        );
    }

    #[test]
    fn absent_code_uses_domestic_layout() {
        assert_eq!(
            city_line(None, Some("Springfield"), Some("IL"), Some("62701")),
            "Springfield IL  62701"
        );
    }

    #[test]
    fn unlisted_code_uses_default_layout() {
        assert_eq!(line("AR", "Rosario", "Santa Fe", "S2000"), "Rosario Santa Fe S2000");
        assert!(std::ptr::eq(layout_for(resolve("AR")), &DEFAULT_LAYOUT));
    }

    #[test]
    fn all_fields_absent_is_empty() {
        assert_eq!(city_line(None, None, None, None), "");
        assert_eq!(city_line(resolve("ZZZ"), None, None, None), "");
    }

    #[test]
    fn is_deterministic() {
        let first = line("CZ", "Praha", "Praha 1", "110 00");
        for _ in 0..10 {
            assert_eq!(line("CZ", "Praha", "Praha 1", "110 00"), first);
        }
    }

    #[test]
    fn blank_values_count_as_absent() {
        assert_eq!(line("US", "Springfield", "  ", "62701"), "Springfield  62701");
    }
}
