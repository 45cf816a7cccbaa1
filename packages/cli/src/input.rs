//! Address batch files.
//!
//! A batch is a list of field maps, read either from TOML:
//!
//! ```toml
//! [[address]]
//! name = "Jane Doe"
//! zip = "62701"
//! ```
//!
//! or, for files ending in `.json`, from a JSON array of objects. Keys may
//! be any field name or alias accepted by [`Address::from_attributes`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use envelope_address::{Address, AddressError};
use serde::Deserialize;
use thiserror::Error;

/// Field name to value.
type Record = BTreeMap<String, String>;

/// Errors from reading a batch file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the batch file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML batch is malformed.
    #[error("Invalid TOML batch: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON batch is malformed.
    #[error("Invalid JSON batch: {0}")]
    Json(#[from] serde_json::Error),

    /// A record has a key that is not an address field.
    #[error("Record {index}: {source}")]
    Record {
        /// Zero-based position of the record in the batch.
        index: usize,
        /// The attribute error.
        #[source]
        source: AddressError,
    },
}

#[derive(Debug, Deserialize)]
struct TomlBatch {
    #[serde(default)]
    address: Vec<Record>,
}

/// Reads a batch file into addresses.
///
/// # Errors
///
/// Returns [`InputError`] if the file cannot be read or parsed, or if any
/// record has an unknown key.
pub fn read_batch(path: &Path) -> Result<Vec<Address>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records = if is_json {
        parse_json(&contents)?
    } else {
        parse_toml(&contents)?
    };
    log::debug!("Read {} records from {}", records.len(), path.display());

    to_addresses(records)
}

fn parse_toml(contents: &str) -> Result<Vec<Record>, InputError> {
    let batch: TomlBatch = toml::from_str(contents)?;
    Ok(batch.address)
}

fn parse_json(contents: &str) -> Result<Vec<Record>, InputError> {
    Ok(serde_json::from_str(contents)?)
}

fn to_addresses(records: Vec<Record>) -> Result<Vec<Address>, InputError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Address::from_attributes(record).map_err(|source| InputError::Record { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_toml_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "batch.toml",
            "[[address]]\ncity = \"Riga\"\npostcode = \"1010\"\ncountry = \"LV\"\n\n\
             [[address]]\ntown = \"Springfield\"\n",
        );

        let addresses = read_batch(&path).unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].postal_code.as_deref(), Some("1010"));
        assert_eq!(addresses[1].city.as_deref(), Some("Springfield"));
    }

    #[test]
    fn reads_json_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "batch.json",
            r#"[{"city": "Tokyo", "zip_code": "100-0001", "country": "JPN"}]"#,
        );

        let addresses = read_batch(&path).unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].country_code().map(|c| c.as_str()), Some("JP"));
    }

    #[test]
    fn empty_toml_is_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "empty.toml", "");
        assert!(read_batch(&path).unwrap().is_empty());
    }

    #[test]
    fn reports_unknown_key_with_record_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "batch.json",
            r#"[{"city": "Oslo"}, {"city": "Bergen", "planet": "Earth"}]"#,
        );

        let err = read_batch(&path).unwrap_err();
        assert!(
            matches!(
                err,
                InputError::Record {
                    index: 1,
                    source: AddressError::UnknownAttribute { .. }
                }
            ),
            "Unexpected error: {err}"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_batch(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }), "Unexpected error: {err}");
    }
}
