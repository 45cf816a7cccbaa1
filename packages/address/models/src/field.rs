//! Address field names and their accepted aliases.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A settable address field.
///
/// Parsing accepts the canonical name and every alias, so configuration
/// maps written for other address schemas (`zip`, `street_1`, `province`,
/// ...) populate the same fields.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
pub enum AddressField {
    /// Recipient name.
    #[strum(to_string = "name", serialize = "full_name")]
    Name,
    /// First street line.
    #[strum(
        to_string = "line_1",
        serialize = "street",
        serialize = "street_1",
        serialize = "street1"
    )]
    Line1,
    /// Second street line.
    #[strum(to_string = "line_2", serialize = "street_2", serialize = "street2")]
    Line2,
    /// City, town, or locality.
    #[strum(to_string = "city", serialize = "town", serialize = "locality")]
    City,
    /// State, province, or region.
    #[strum(to_string = "region", serialize = "state", serialize = "province")]
    Region,
    /// Postal or ZIP code.
    #[strum(
        to_string = "postal_code",
        serialize = "zip",
        serialize = "zip_code",
        serialize = "postcode"
    )]
    PostalCode,
    /// Destination country, as entered.
    #[strum(to_string = "country")]
    Country,
    /// Country the mail is sent from.
    #[strum(to_string = "origin")]
    Origin,
}
