#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Country code resolution.
//!
//! Maps free-form country input (alpha-2 codes, alpha-3 codes, retired
//! codes, English names) onto a canonical [`CountryCode`]. Resolution is
//! total: input that matches nothing yields `None` rather than an error,
//! so a malformed address still renders with default formatting.
//!
//! Lookup order after uppercasing:
//!
//! 1. [`iso3166::ALPHA2`] (already canonical)
//! 2. [`iso3166::ALPHA2_EXCEPTIONS`] (irregular codes and names)
//! 3. [`iso3166::ALPHA3_TO_ALPHA2`]

pub mod iso3166;

pub use envelope_country_models::CountryCode;

/// Resolves optional country input to a canonical code.
///
/// Returns `None` for absent, empty, or unrecognized input.
#[must_use]
pub fn lookup_country_iso(input: Option<&str>) -> Option<CountryCode> {
    input.and_then(resolve)
}

/// Resolves country input to a canonical code.
///
/// Surrounding whitespace is ignored and matching is case-insensitive.
#[must_use]
pub fn resolve(input: &str) -> Option<CountryCode> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();

    if let Some((alpha2, _)) = iso3166::ALPHA2.get_key_value(upper.as_str()) {
        return Some(CountryCode::from_table(alpha2));
    }
    if let Some(code) = iso3166::ALPHA2_EXCEPTIONS.get(&upper) {
        return Some(*code);
    }
    if let Some(code) = iso3166::ALPHA3_TO_ALPHA2.get(upper.as_str()) {
        return Some(*code);
    }

    log::debug!("Unrecognized country input {input:?}");
    None
}

/// Returns the English short name for a canonical code.
#[must_use]
pub fn country_name(code: CountryCode) -> Option<&'static str> {
    iso3166::ALPHA2.get(code.as_str()).copied()
}
