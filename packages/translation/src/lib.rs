#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Localized country names.
//!
//! The country line of an international address is written in the
//! language of the sender. Each origin country has its own name table
//! mapping destination codes to names. Tables come from one of two
//! sources:
//!
//! - **Embedded** (default): TOML files under `assets/`, compiled in via
//!   the [`registry`].
//! - **Directory**: `<dir>/<ORIGIN>.toml` files read from disk the first
//!   time an origin is requested.
//!
//! Either way a table is parsed once per origin and cached for the life
//! of the [`CountryNameTranslator`].

pub mod registry;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use envelope_country_models::CountryCode;
use thiserror::Error;

/// Origin retried when the sender's own table is missing.
pub const FALLBACK_ORIGIN: CountryCode = CountryCode::US;

/// Destination code to localized name.
pub type NameTable = BTreeMap<String, String>;

/// Errors from loading a country name table.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// No table exists for the requested origin.
    #[error("No country name table for origin {origin}")]
    MissingResource {
        /// The origin that was requested.
        origin: CountryCode,
    },

    /// The table file exists but could not be read.
    #[error("Failed to read country name table {}: {source}", path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The table is not a flat TOML string table.
    #[error("Malformed country name table for origin {origin}: {source}")]
    Parse {
        /// The origin whose table is malformed.
        origin: CountryCode,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

impl TranslationError {
    /// Whether this error means the origin simply has no table, as opposed
    /// to a broken one.
    #[must_use]
    pub const fn is_missing_resource(&self) -> bool {
        matches!(self, Self::MissingResource { .. })
    }
}

/// Looks up a destination country's name as written in an origin's
/// language.
pub trait CountryNames {
    /// Returns the name of `target` from `origin`'s table.
    ///
    /// `Ok(None)` means the table exists but has no entry for `target`.
    ///
    /// # Errors
    ///
    /// * [`TranslationError::MissingResource`] if `origin` has no table
    /// * [`TranslationError::Io`] or [`TranslationError::Parse`] if the
    ///   table cannot be loaded
    fn translate(
        &self,
        origin: CountryCode,
        target: CountryCode,
    ) -> Result<Option<String>, TranslationError>;
}

/// Where name tables are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// Tables compiled into the binary.
    Embedded,
    /// `<ORIGIN>.toml` files in a directory.
    Directory(PathBuf),
}

/// Country name lookup backed by per-origin tables with an in-memory
/// cache.
#[derive(Debug)]
pub struct CountryNameTranslator {
    source: NameSource,
    tables: RwLock<BTreeMap<CountryCode, Arc<NameTable>>>,
}

impl Default for CountryNameTranslator {
    fn default() -> Self {
        Self::embedded()
    }
}

impl CountryNameTranslator {
    /// Creates a translator over the tables compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(NameSource::Embedded)
    }

    /// Creates a translator that reads `<ORIGIN>.toml` files from `dir`.
    #[must_use]
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(NameSource::Directory(dir.as_ref().to_path_buf()))
    }

    /// Creates a translator over the given source.
    #[must_use]
    pub fn new(source: NameSource) -> Self {
        Self {
            source,
            tables: RwLock::new(BTreeMap::new()),
        }
    }

    /// The source tables are loaded from.
    #[must_use]
    pub const fn source(&self) -> &NameSource {
        &self.source
    }

    /// Returns the table for `origin`, loading and caching it on first
    /// use.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] if the table is missing or cannot be
    /// loaded. Failures are not cached.
    pub fn table(&self, origin: CountryCode) -> Result<Arc<NameTable>, TranslationError> {
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&origin)
        {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.load(origin)?);
        log::debug!(
            "Loaded {} country names for origin {origin}",
            table.len()
        );

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(tables.entry(origin).or_insert(table)))
    }

    fn load(&self, origin: CountryCode) -> Result<NameTable, TranslationError> {
        let toml_str = match &self.source {
            NameSource::Embedded => registry::embedded_table(origin.as_str())
                .ok_or(TranslationError::MissingResource { origin })?
                .to_string(),
            NameSource::Directory(dir) => {
                let path = dir.join(format!("{origin}.toml"));
                match std::fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        return Err(TranslationError::MissingResource { origin });
                    }
                    Err(source) => return Err(TranslationError::Io { path, source }),
                }
            }
        };

        toml::from_str(&toml_str).map_err(|source| TranslationError::Parse { origin, source })
    }
}

impl CountryNames for CountryNameTranslator {
    fn translate(
        &self,
        origin: CountryCode,
        target: CountryCode,
    ) -> Result<Option<String>, TranslationError> {
        Ok(self.table(origin)?.get(target.as_str()).cloned())
    }
}
