//! Compile-time registry of embedded country name tables.
//!
//! Each origin's table lives in `assets/<ORIGIN>.toml` as flat
//! `CODE = "Localized name"` pairs. Adding an origin is a matter of adding
//! a file and listing it below.

/// Name tables embedded at compile time, keyed by origin code.
const NAME_TOMLS: &[(&str, &str)] = &[
    ("DE", include_str!("../assets/DE.toml")),
    ("FR", include_str!("../assets/FR.toml")),
    ("US", include_str!("../assets/US.toml")),
];

/// Returns the raw TOML for an embedded origin table, if one ships.
#[must_use]
pub fn embedded_table(origin: &str) -> Option<&'static str> {
    NAME_TOMLS
        .iter()
        .find(|(code, _)| *code == origin)
        .map(|(_, toml_str)| *toml_str)
}

/// Origins with an embedded table, in alphabetical order.
#[must_use]
pub fn embedded_origins() -> Vec<&'static str> {
    NAME_TOMLS.iter().map(|(code, _)| *code).collect()
}
