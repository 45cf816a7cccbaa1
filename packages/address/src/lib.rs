#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Mailable address rendering.
//!
//! Ties the pieces together: an [`Address`] is checked against the
//! configured home country to decide whether it is international, its
//! city line is laid out by `envelope_layout`, and international addresses
//! get a country line named in the sender's language by
//! `envelope_translation`.
//!
//! [`Renderer`] is the main entry point. [`to_text`] and [`to_html`] cover
//! the common case of embedded name tables.

pub mod config;
pub mod html;
pub mod render;

use std::sync::LazyLock;

use envelope_translation::CountryNameTranslator;

pub use config::{AddressConfig, ConfigError};
pub use envelope_address_models::{Address, AddressError, AddressField};
pub use envelope_country::CountryCode;
pub use render::Renderer;

/// Shared translator over the embedded name tables.
static EMBEDDED_NAMES: LazyLock<CountryNameTranslator> =
    LazyLock::new(CountryNameTranslator::embedded);

/// Renders `address` as text using the embedded name tables.
///
/// See [`Renderer::render`].
#[must_use]
pub fn to_text(address: &Address, config: &AddressConfig, with_country: Option<bool>) -> String {
    Renderer::new(config, &*EMBEDDED_NAMES).render(address, with_country)
}

/// Renders `address` as escaped markup using the embedded name tables.
///
/// See [`Renderer::render_html`].
#[must_use]
pub fn to_html(address: &Address, config: &AddressConfig, with_country: Option<bool>) -> String {
    Renderer::new(config, &*EMBEDDED_NAMES).render_html(address, with_country)
}
