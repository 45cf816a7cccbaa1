#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The address entity.
//!
//! An [`Address`] holds free-text fields as entered plus two derived
//! country codes: the destination (`country_code`, re-resolved every time
//! `country` is set) and an optional explicit origin. When no origin is
//! set, reads fall back to whatever home country the caller supplies at
//! that moment; nothing is copied in at construction.

pub mod field;

use std::str::FromStr;

use envelope_country::{CountryCode, lookup_country_iso};
use serde::Serialize;
use thiserror::Error;

pub use field::AddressField;

/// Errors from building an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// A configuration key matched no field or alias.
    #[error("Unknown address attribute: {name}")]
    UnknownAttribute {
        /// The unrecognized key.
        name: String,
    },
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_1: Option<String>,
    /// Second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_2: Option<String>,
    /// City, town, or locality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<CountryCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<CountryCode>,
}

impl Address {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address from `(key, value)` pairs.
    ///
    /// Keys may be canonical field names or aliases (see
    /// [`AddressField`]). Later pairs overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::UnknownAttribute`] for the first key that is
    /// not a field or alias.
    pub fn from_attributes<I, K, V>(attributes: I) -> Result<Self, AddressError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut address = Self::new();
        for (key, value) in attributes {
            address.set_attribute(key.as_ref(), value)?;
        }
        Ok(address)
    }

    /// Sets a field by name or alias.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::UnknownAttribute`] if `key` is not a field
    /// or alias.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) -> Result<(), AddressError> {
        let field = AddressField::from_str(key).map_err(|_| AddressError::UnknownAttribute {
            name: key.to_string(),
        })?;
        self.set(field, value);
        Ok(())
    }

    /// Sets a field.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AddressField::Name => self.name = Some(value),
            AddressField::Line1 => self.line_1 = Some(value),
            AddressField::Line2 => self.line_2 = Some(value),
            AddressField::City => self.city = Some(value),
            AddressField::Region => self.region = Some(value),
            AddressField::PostalCode => self.postal_code = Some(value),
            AddressField::Country => self.set_country(value),
            AddressField::Origin => self.set_origin(&value),
        }
    }

    /// Returns a field's current value.
    ///
    /// For [`AddressField::Origin`] this is the explicit origin code, if
    /// any.
    #[must_use]
    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Name => self.name.as_deref(),
            AddressField::Line1 => self.line_1.as_deref(),
            AddressField::Line2 => self.line_2.as_deref(),
            AddressField::City => self.city.as_deref(),
            AddressField::Region => self.region.as_deref(),
            AddressField::PostalCode => self.postal_code.as_deref(),
            AddressField::Country => self.country.as_deref(),
            AddressField::Origin => self.origin.map(CountryCode::as_str),
        }
    }

    /// Sets the destination country and re-resolves its code.
    ///
    /// Unrecognized input is kept as entered and leaves the code absent.
    pub fn set_country(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.country_code = lookup_country_iso(Some(&value));
        self.country = Some(value);
    }

    /// Clears the destination country and its code.
    pub fn clear_country(&mut self) {
        self.country = None;
        self.country_code = None;
    }

    /// The destination country as entered.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// The resolved destination code, if `country` was recognized.
    #[must_use]
    pub const fn country_code(&self) -> Option<CountryCode> {
        self.country_code
    }

    /// Sets the origin country.
    ///
    /// Unrecognized input clears the origin, so reads fall back to the
    /// home country.
    pub fn set_origin(&mut self, value: &str) {
        self.origin = lookup_country_iso(Some(value));
    }

    /// Clears the origin so reads fall back to the home country.
    pub const fn clear_origin(&mut self) {
        self.origin = None;
    }

    /// The explicitly set origin, if any.
    #[must_use]
    pub const fn explicit_origin(&self) -> Option<CountryCode> {
        self.origin
    }

    /// Where the mail is sent from: the explicit origin, or `home`.
    #[must_use]
    pub fn origin(&self, home: CountryCode) -> CountryCode {
        self.origin.unwrap_or(home)
    }

    /// Whether the destination is a recognized country other than the
    /// origin.
    #[must_use]
    pub fn is_international(&self, home: CountryCode) -> bool {
        self.country_code
            .is_some_and(|code| code != self.origin(home))
    }
}
