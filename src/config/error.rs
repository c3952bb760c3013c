//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for the configuration layer.
///
/// Everything that can go wrong between the command line, the config
/// file, and the validated form the application runs with.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Cannot read config file '{}': {source}", path.display())]
    FileRead {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Cannot parse config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The configuration template could not be written (init subcommand).
    #[error("Cannot write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required field was supplied by neither the CLI nor the file.
    #[error("Missing required field '{field}': {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// How to supply the value
        hint: &'static str,
    },

    /// A request type string outside the get/post domain.
    #[error("Invalid request type '{value}': expected get or post")]
    InvalidRequestType {
        /// The offending value
        value: String,
    },

    /// A repeatable CLI value that does not split into a pair.
    #[error("Invalid {what} '{value}': expected '{shape}'")]
    InvalidPair {
        /// What was being parsed (an endpoint, a parameter)
        what: &'static str,
        /// The offending string
        value: String,
        /// Expected shape, for the message
        shape: &'static str,
    },

    /// A file param value with no query-string representation.
    #[error("Invalid value for param '{key}': got {kind}, expected a scalar")]
    InvalidParamValue {
        /// The parameter key
        key: String,
        /// Kind of TOML value found
        kind: &'static str,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The receiver field.
    pub const RECEIVER: &str = "receiver";
}

impl ConfigError {
    /// Shorthand for a `MissingRequired` error.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
