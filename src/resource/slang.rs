//! Slang dictionary loading.
//!
//! The dictionary maps informal spellings to their standardized forms and
//! is loaded from a two-column CSV resource. Both header conventions seen
//! in the wild are accepted: `slang,formal` and `tidak_baku,kata_baku`.
//! Malformed data rows are skipped rather than failing the load; a missing
//! file or an unrecognized header is reported as a [`SapuError::Resource`],
//! which the resource layer downgrades to a warning plus an empty
//! dictionary.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ahash::AHashMap;
use csv::ReaderBuilder;

use crate::error::{Result, SapuError};

/// Accepted header names for the slang (informal) column.
const SLANG_HEADERS: &[&str] = &["slang", "tidak_baku"];

/// Accepted header names for the formal (standard) column.
const FORMAL_HEADERS: &[&str] = &["formal", "kata_baku"];

/// A mapping from informal/slang tokens to their standardized forms.
#[derive(Clone, Debug, Default)]
pub struct SlangDictionary {
    entries: AHashMap<String, String>,
}

impl SlangDictionary {
    /// Create an empty dictionary (normalization becomes a no-op).
    pub fn empty() -> Self {
        SlangDictionary {
            entries: AHashMap::new(),
        }
    }

    /// Build a dictionary from (slang, formal) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        SlangDictionary { entries }
    }

    /// Load a dictionary from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SapuError::resource(format!(
                "failed to open slang dictionary '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(file)
    }

    /// Parse a dictionary from CSV data.
    ///
    /// The header row must contain one column from each accepted naming
    /// convention pair; rows with a missing or empty cell are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| SapuError::resource(format!("failed to read dictionary headers: {e}")))?
            .clone();

        let find_column = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };
        let slang_idx = find_column(SLANG_HEADERS).ok_or_else(|| {
            SapuError::resource("slang dictionary is missing a 'slang'/'tidak_baku' column")
        })?;
        let formal_idx = find_column(FORMAL_HEADERS).ok_or_else(|| {
            SapuError::resource("slang dictionary is missing a 'formal'/'kata_baku' column")
        })?;

        let mut entries = AHashMap::new();
        for record in csv_reader.records() {
            // Skip bad lines instead of failing the whole load
            let Ok(record) = record else { continue };
            let (Some(slang), Some(formal)) = (record.get(slang_idx), record.get(formal_idx))
            else {
                continue;
            };
            if !slang.is_empty() && !formal.is_empty() {
                entries.insert(slang.to_string(), formal.to_string());
            }
        }

        Ok(SlangDictionary { entries })
    }

    /// Look up the standardized form of a token.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(|s| s.as_str())
    }

    /// Number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
