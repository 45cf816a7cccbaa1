//! Rendering configuration.
//!
//! Holds the home country that addresses without an explicit origin are
//! compared against, and where country name tables come from. Values are
//! layered: defaults, then a TOML file, then the environment, then
//! whatever the caller sets explicitly.

use std::path::{Path, PathBuf};

use envelope_country::{CountryCode, resolve};
use envelope_translation::CountryNameTranslator;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the home country.
pub const HOME_COUNTRY_ENV: &str = "ENVELOPE_HOME_COUNTRY";

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`AddressConfig`].
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Config file shape before country resolution.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    home_country: Option<String>,
    assets_dir: Option<PathBuf>,
}

/// Settings shared by every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressConfig {
    /// Origin assumed for addresses that don't set one.
    pub home_country: CountryCode,
    /// Directory of `<ORIGIN>.toml` name tables. Embedded tables are used
    /// when unset.
    pub assets_dir: Option<PathBuf>,
}

impl AddressConfig {
    /// Returns a copy with the home country set from free-form input.
    ///
    /// Input that doesn't resolve falls back to the default home country.
    #[must_use]
    pub fn with_home_country(mut self, input: &str) -> Self {
        self.home_country = resolve(input).unwrap_or_else(|| {
            log::warn!("Unrecognized home country {input:?}, using {}", CountryCode::US);
            CountryCode::US
        });
        self
    }

    /// Returns a copy reading name tables from `dir`.
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or has
    /// unknown keys.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        let mut config = Self {
            assets_dir: file.assets_dir,
            ..Self::default()
        };
        if let Some(home) = file.home_country {
            config = config.with_home_country(&home);
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Applies [`HOME_COUNTRY_ENV`] if it is set.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_home_override(std::env::var(HOME_COUNTRY_ENV).ok().as_deref())
    }

    /// Applies a home country override if one is given and non-blank.
    #[must_use]
    pub fn apply_home_override(self, home: Option<&str>) -> Self {
        match home.map(str::trim) {
            Some(home) if !home.is_empty() => self.with_home_country(home),
            _ => self,
        }
    }

    /// Creates the country name translator this config describes.
    #[must_use]
    pub fn translator(&self) -> CountryNameTranslator {
        self.assets_dir
            .as_ref()
            .map_or_else(CountryNameTranslator::embedded, CountryNameTranslator::from_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_translation::NameSource;

    #[test]
    fn defaults_to_us_and_embedded_tables() {
        let config = AddressConfig::default();
        assert_eq!(config.home_country, CountryCode::US);
        assert_eq!(config.translator().source(), &NameSource::Embedded);
    }

    #[test]
    fn resolves_home_country_input() {
        let config = AddressConfig::default().with_home_country("Germany");
        assert_eq!(config.home_country, resolve("DE").unwrap());
    }

    #[test]
    fn unrecognized_home_country_falls_back_to_us() {
        let config = AddressConfig::default()
            .with_home_country("FR")
            .with_home_country("Atlantis");
        assert_eq!(config.home_country, CountryCode::US);
    }

    #[test]
    fn parses_toml() {
        let config =
            AddressConfig::from_toml_str("home_country = \"fra\"\nassets_dir = \"names\"\n")
                .unwrap();
        assert_eq!(config.home_country, resolve("FR").unwrap());
        assert_eq!(config.assets_dir, Some(PathBuf::from("names")));
        assert_eq!(
            config.translator().source(),
            &NameSource::Directory(PathBuf::from("names"))
        );
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(AddressConfig::from_toml_str("").unwrap(), AddressConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = AddressConfig::from_toml_str("home = \"US\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "Unexpected error: {err}");
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envelope.toml");
        std::fs::write(&path, "home_country = \"JP\"\n").unwrap();
        let config = AddressConfig::load(&path).unwrap();
        assert_eq!(config.home_country, resolve("JP").unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AddressConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "Unexpected error: {err}");
    }

    #[test]
    fn override_beats_file_value() {
        let config = AddressConfig::from_toml_str("home_country = \"DE\"\n")
            .unwrap()
            .apply_home_override(Some("GB"));
        assert_eq!(config.home_country, resolve("GB").unwrap());
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = AddressConfig::default()
            .with_home_country("DE")
            .apply_home_override(Some("  "));
        assert_eq!(config.home_country, resolve("DE").unwrap());
        let config = config.apply_home_override(None);
        assert_eq!(config.home_country, resolve("DE").unwrap());
    }
}
