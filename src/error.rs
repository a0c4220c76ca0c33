//! Error types for formatting and configuration loading

use thiserror::Error;

/// Error raised while formatting a number
///
/// A [`FormatSpec`](crate::types::FormatSpec) is expected to come from a trusted
/// compiler, so only the lookups that can genuinely miss at run time are reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The `-count-other` compact pattern for the value's magnitude is absent
    #[error("Missing compact pattern for key '{key}'")]
    MissingCompactPattern { key: String },

    /// A compact pattern has no run of `0` digit placeholders
    #[error("Malformed compact pattern '{pattern}': no digit placeholders")]
    MalformedCompactPattern { pattern: String },
}

/// Error raised while loading format specs from TOML
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML, or does not describe a format spec
    #[error("Error parsing format spec: {0}")]
    Parse(#[from] toml::de::Error),

    /// A named catalog entry could not be turned into a format spec
    #[error("Invalid catalog entry '{name}': {source}")]
    InvalidEntry {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    /// A named catalog entry is not a table
    #[error("Catalog entry '{0}' is not a table")]
    NotATable(String),
}
