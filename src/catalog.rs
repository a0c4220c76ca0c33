//! Format spec configuration
//!
//! This module loads [`FormatSpec`]s from TOML. A single spec can be read from a
//! document listing any subset of its fields, and a [`SpecCatalog`] reads a document of
//! named specs sharing an optional `[base]` table.

use std::collections::BTreeMap;

use log::debug;

use crate::error::ConfigError;
use crate::types::FormatSpec;

type Result<T> = std::result::Result<T, ConfigError>;

impl FormatSpec {
    /// Read a format spec from TOML; missing fields keep their default value
    ///
    /// # Examples
    /// ```
    /// use locale_number_format::types::FormatSpec;
    ///
    /// let spec = FormatSpec::from_toml_str("maximum_fraction_digits = 2").unwrap();
    /// assert_eq!(spec.maximum_fraction_digits, 2);
    /// assert_eq!(spec.primary_grouping_size, Some(3));
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Merge `overlay` into `base`, descending into tables present on both sides
fn merge_tables(base: &mut toml::Table, overlay: &toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                merge_tables(base_table, overlay_table);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A set of named format specs
///
/// ```toml
/// [base]
/// symbols = { decimal = ",", group = "." }
///
/// [decimal]
/// maximum_fraction_digits = 2
///
/// [percent]
/// positive_pattern = "#,##0%"
/// positive_suffix = "%"
/// ```
///
/// Every entry other than `base` is layered over the `base` table, nested tables
/// included, and then read as a [`FormatSpec`].
#[derive(Debug, Clone, Default)]
pub struct SpecCatalog {
    specs: BTreeMap<String, FormatSpec>,
}

impl SpecCatalog {
    /// Parse a catalog from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(toml_str)?;

        let base = match table.get("base") {
            Some(toml::Value::Table(base)) => base.clone(),
            Some(_) => return Err(ConfigError::NotATable("base".to_string())),
            None => toml::Table::new(),
        };

        let mut specs = BTreeMap::new();
        for (name, value) in &table {
            if name == "base" {
                continue;
            }

            let entry = value
                .as_table()
                .ok_or_else(|| ConfigError::NotATable(name.clone()))?;
            let mut merged = base.clone();
            merge_tables(&mut merged, entry);

            let spec: FormatSpec = toml::Value::Table(merged).try_into().map_err(|source| {
                ConfigError::InvalidEntry {
                    name: name.clone(),
                    source,
                }
            })?;
            specs.insert(name.clone(), spec);
        }

        debug!("loaded {} format specs", specs.len());
        Ok(Self { specs })
    }

    /// Get a spec by name
    pub fn get(&self, name: &str) -> Option<&FormatSpec> {
        self.specs.get(name)
    }

    /// List the spec names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
