//! Raw key-value rows as they arrive from a tabular source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One input row keyed by column header.
///
/// A header that is not present means the field is absent; an empty string
/// means the field exists but is blank. Validators treat the two differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(header, value)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(header.into(), value.into());
    }

    /// Returns the trimmed value of a field, or `None` when the field is absent.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(|value| value.trim())
    }

    pub fn contains(&self, header: &str) -> bool {
        self.fields.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { fields }
    }
}
