//! Ordered property catalog and run-level validation

use crate::{Error, Result};
use std::collections::HashSet;

/// A property column and the name it is rendered under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertySpec {
    /// Column name in the dataset
    pub key: String,
    /// Canonical display name
    pub display_name: String,
}

impl PropertySpec {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
        }
    }
}

/// Properties in evaluation order
///
/// Guaranteed non-empty, with unique keys and unique display names, so the
/// key to display-name mapping is one-to-one.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCatalog {
    properties: Vec<PropertySpec>,
}

impl PropertyCatalog {
    /// Validate and wrap an ordered property list
    pub fn new(properties: Vec<PropertySpec>) -> Result<Self> {
        if properties.is_empty() {
            return Err(Error::Configuration("property list is empty".to_string()));
        }

        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        for property in &properties {
            if !keys.insert(property.key.as_str()) {
                return Err(Error::Configuration(format!(
                    "duplicate property key '{}'",
                    property.key
                )));
            }
            if !names.insert(property.display_name.as_str()) {
                return Err(Error::Configuration(format!(
                    "duplicate property display name '{}'",
                    property.display_name
                )));
            }
        }

        Ok(Self { properties })
    }

    /// Build a catalog from `(key, display name)` pairs
    pub fn from_pairs<K, N>(pairs: impl IntoIterator<Item = (K, N)>) -> Result<Self>
    where
        K: Into<String>,
        N: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(key, name)| PropertySpec::new(key, name))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertySpec> {
        self.properties.iter()
    }

    pub fn as_slice(&self) -> &[PropertySpec] {
        &self.properties
    }

    /// Display name registered for a property key
    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.display_name.as_str())
    }
}

impl<'a> IntoIterator for &'a PropertyCatalog {
    type Item = &'a PropertySpec;
    type IntoIter = std::slice::Iter<'a, PropertySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Check an ordered list of dataset names: non-empty and unique
pub fn validate_dataset_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(Error::Configuration(format!("duplicate dataset '{name}'")));
        }
    }
    if seen.is_empty() {
        return Err(Error::Configuration("dataset list is empty".to_string()));
    }
    Ok(())
}
