//! Address rendering.
//!
//! A rendered address is, in order: name, street lines, the
//! country-specific city line, and a country line for international mail.
//! Blank pieces are dropped rather than printed as empty lines.

use envelope_address_models::Address;
use envelope_country::CountryCode;
use envelope_translation::{CountryNames, FALLBACK_ORIGIN};

use crate::config::AddressConfig;
use crate::html::text_to_html;

/// Renders addresses against a home country and a country name source.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    home_country: CountryCode,
    names: &'a dyn CountryNames,
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("home_country", &self.home_country)
            .finish_non_exhaustive()
    }
}

impl<'a> Renderer<'a> {
    /// Creates a renderer for `config`'s home country.
    #[must_use]
    pub fn new(config: &AddressConfig, names: &'a dyn CountryNames) -> Self {
        Self {
            home_country: config.home_country,
            names,
        }
    }

    /// The home country addresses without an origin are sent from.
    #[must_use]
    pub const fn home_country(&self) -> CountryCode {
        self.home_country
    }

    /// Where `address` is sent from.
    #[must_use]
    pub fn origin(&self, address: &Address) -> CountryCode {
        address.origin(self.home_country)
    }

    /// Whether `address` goes to a recognized country other than its
    /// origin.
    #[must_use]
    pub fn is_international(&self, address: &Address) -> bool {
        address.is_international(self.home_country)
    }

    /// The country-specific city, region, and postal code segment.
    #[must_use]
    pub fn city_line(&self, address: &Address) -> String {
        envelope_layout::city_line(
            address.country_code(),
            address.city.as_deref(),
            address.region.as_deref(),
            address.postal_code.as_deref(),
        )
    }

    /// The destination country as it should be printed.
    ///
    /// Unrecognized countries print as entered. Recognized ones are named
    /// in the origin's language, then in US English, then as entered.
    #[must_use]
    pub fn country_line(&self, address: &Address) -> Option<String> {
        let Some(code) = address.country_code() else {
            return address.country().map(ToString::to_string);
        };

        self.translated_country(self.origin(address), code)
            .or_else(|| address.country().map(ToString::to_string))
    }

    fn translated_country(&self, origin: CountryCode, code: CountryCode) -> Option<String> {
        match self.names.translate(origin, code) {
            Ok(Some(name)) => return Some(name),
            Ok(None) => log::debug!("No name for {code} in the {origin} table"),
            Err(e) if e.is_missing_resource() => log::debug!("{e}"),
            Err(e) => log::warn!("{e}"),
        }

        if origin == FALLBACK_ORIGIN {
            return None;
        }

        log::debug!("Falling back to {FALLBACK_ORIGIN} names for {code}");
        match self.names.translate(FALLBACK_ORIGIN, code) {
            Ok(name) => name,
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    /// Renders `address` as `\n`-separated text.
    ///
    /// `with_country` forces the country line on or off; when `None` it is
    /// included only for international addresses.
    #[must_use]
    pub fn render(&self, address: &Address, with_country: Option<bool>) -> String {
        let with_country = with_country.unwrap_or_else(|| self.is_international(address));

        let city_line = self.city_line(address);
        let country_line = if with_country {
            self.country_line(address)
        } else {
            None
        };

        [
            address.name.as_deref(),
            address.line_1.as_deref(),
            address.line_2.as_deref(),
            Some(city_line.as_str()),
            country_line.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Renders `address` as escaped markup with `<br />` line breaks.
    #[must_use]
    pub fn render_html(&self, address: &Address, with_country: Option<bool>) -> String {
        text_to_html(&self.render(address, with_country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_country::resolve;
    use envelope_translation::{CountryNameTranslator, TranslationError};
    use std::collections::BTreeMap;

    fn code(input: &str) -> CountryCode {
        resolve(input).unwrap()
    }

    fn address(attributes: &[(&str, &str)]) -> Address {
        Address::from_attributes(attributes.iter().copied()).unwrap()
    }

    /// Name tables held in memory: origin → (target → name).
    #[derive(Default)]
    struct FakeNames {
        tables: BTreeMap<&'static str, BTreeMap<&'static str, &'static str>>,
    }

    impl FakeNames {
        fn with(mut self, origin: &'static str, target: &'static str, name: &'static str) -> Self {
            self.tables.entry(origin).or_default().insert(target, name);
            self
        }
    }

    impl CountryNames for FakeNames {
        fn translate(
            &self,
            origin: CountryCode,
            target: CountryCode,
        ) -> Result<Option<String>, TranslationError> {
            let table = self
                .tables
                .get(origin.as_str())
                .ok_or(TranslationError::MissingResource { origin })?;
            Ok(table.get(target.as_str()).map(ToString::to_string))
        }
    }

    #[test]
    fn renders_international_japanese_address() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[
            ("city", "Tokyo"),
            ("region", "Tokyo-to"),
            ("postal_code", "100-0001"),
            ("country", "Japan"),
        ]);

        assert!(renderer.is_international(&address));
        assert_eq!(renderer.city_line(&address), "Tokyo, Tokyo-to\n100-0001");
        assert_eq!(
            renderer.render(&address, None),
            "Tokyo, Tokyo-to\n100-0001\nJapan"
        );
    }

    #[test]
    fn renders_domestic_address_without_country_line() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[
            ("name", "Homer Simpson"),
            ("line_1", "742 Evergreen Terrace"),
            ("city", "Springfield"),
            ("region", "IL"),
            ("postal_code", "62701"),
            ("country", "US"),
        ]);

        assert!(!renderer.is_international(&address));
        assert_eq!(
            renderer.render(&address, None),
            "Homer Simpson\n742 Evergreen Terrace\nSpringfield IL  62701"
        );
    }

    #[test]
    fn renders_latvian_city_line() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[("city", "Riga"), ("postal_code", "1010"), ("country", "LV")]);
        assert_eq!(renderer.city_line(&address), "Riga, LV-1010");
    }

    #[test]
    fn unresolvable_country_prints_as_entered() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[("country", "Qux")]);

        assert_eq!(address.country_code(), None);
        assert!(!renderer.is_international(&address));
        assert_eq!(renderer.render(&address, None), "");
        assert_eq!(renderer.render(&address, Some(true)), "Qux");
    }

    #[test]
    fn explicit_with_country_overrides_default() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let international = address(&[("city", "Paris"), ("postal_code", "75001"), ("country", "FR")]);
        let domestic = address(&[("city", "Boston"), ("region", "MA"), ("country", "US")]);

        assert_eq!(renderer.render(&international, Some(false)), "75001 Paris");
        assert_eq!(
            renderer.render(&domestic, Some(true)),
            "Boston MA\nUnited States"
        );
    }

    #[test]
    fn origin_decides_internationality() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let mut address = address(&[("city", "Paris"), ("postal_code", "75001"), ("country", "FR")]);
        assert!(renderer.is_international(&address));

        address.set_origin("FR");
        assert!(!renderer.is_international(&address));
        assert_eq!(renderer.render(&address, None), "75001 Paris");
    }

    #[test]
    fn home_country_is_read_at_render_time() {
        let names = CountryNameTranslator::embedded();
        let address = address(&[("city", "Berlin"), ("postal_code", "10115"), ("country", "DE")]);

        let us = Renderer::new(&AddressConfig::default(), &names);
        let de = Renderer::new(&AddressConfig::default().with_home_country("DE"), &names);
        assert!(us.is_international(&address));
        assert!(!de.is_international(&address));
    }

    #[test]
    fn country_line_uses_origin_language() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default().with_home_country("DE"), &names);
        let address = address(&[("city", "Paris"), ("postal_code", "75001"), ("country", "France")]);
        assert_eq!(renderer.render(&address, None), "75001 Paris\nFrankreich");
    }

    #[test]
    fn missing_origin_table_falls_back_to_us() {
        let names = FakeNames::default().with("US", "FR", "France");
        let renderer = Renderer::new(&AddressConfig::default().with_home_country("JP"), &names);
        let address = address(&[("country", "fra")]);
        assert_eq!(renderer.country_line(&address), Some("France".to_string()));
    }

    #[test]
    fn missing_entry_falls_back_to_us() {
        let names = FakeNames::default()
            .with("DE", "JP", "Japan")
            .with("US", "FR", "France");
        let renderer = Renderer::new(&AddressConfig::default().with_home_country("DE"), &names);
        let address = address(&[("country", "FR")]);
        assert_eq!(renderer.country_line(&address), Some("France".to_string()));
    }

    #[test]
    fn no_translation_prints_country_as_entered() {
        let names = FakeNames::default();
        let renderer = Renderer::new(&AddressConfig::default().with_home_country("JP"), &names);
        let address = address(&[("country", "fra")]);
        assert_eq!(address.country_code(), Some(code("FR")));
        assert_eq!(renderer.country_line(&address), Some("fra".to_string()));
    }

    #[test]
    fn drops_blank_lines() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[
            ("name", "Jane Doe"),
            ("line_1", ""),
            ("line_2", "   "),
            ("city", "Springfield"),
            ("country", "US"),
        ]);
        assert_eq!(renderer.render(&address, None), "Jane Doe\nSpringfield");
    }

    #[test]
    fn renders_escaped_markup() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[
            ("name", "Tom & Jerry <Cats>"),
            ("city", "Tokyo"),
            ("region", "Tokyo-to"),
            ("postal_code", "100-0001"),
            ("country", "JP"),
        ]);

        assert_eq!(
            renderer.render_html(&address, None),
            "Tom &amp; Jerry &lt;Cats&gt;<br />Tokyo, Tokyo-to<br />100-0001<br />Japan"
        );
    }

    #[test]
    fn markup_preserves_line_content() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let address = address(&[("name", "O'Brien"), ("city", "Dublin"), ("country", "IE")]);

        let text = renderer.render(&address, None);
        let html = renderer.render_html(&address, None);
        let expected: Vec<String> = text.lines().map(crate::html::escape_html).collect();
        let actual: Vec<&str> = html.split(crate::html::LINE_BREAK).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn alias_keys_render_identically() {
        let names = CountryNameTranslator::embedded();
        let renderer = Renderer::new(&AddressConfig::default(), &names);
        let by_alias = address(&[("town", "Springfield"), ("state", "IL"), ("zip", "62701")]);
        let by_name = address(&[
            ("city", "Springfield"),
            ("region", "IL"),
            ("postal_code", "62701"),
        ]);
        assert_eq!(renderer.render(&by_alias, None), renderer.render(&by_name, None));
    }
}
