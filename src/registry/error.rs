//! Error types for registry seeding.

use thiserror::Error;

/// Error type for registry mutation with invalid seed data.
///
/// Raised when endpoint data fed to [`set_all`] or [`merge`] does not have
/// the expected shape. Mutation is atomic: when seeding fails, the prior
/// registry content is left unchanged.
///
/// [`set_all`]: super::EndpointRegistry::set_all
/// [`merge`]: super::EndpointRegistry::merge
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The seed data was not a table of name-to-URL entries.
    #[error("Endpoint data must be a table of name-to-URL entries, got {kind}")]
    InvalidEndpoints {
        /// Kind of TOML value that was supplied instead of a table
        kind: &'static str,
    },

    /// An individual entry mapped a name to something other than a string.
    #[error("Endpoint '{name}' must map to a URL string, got {kind}")]
    InvalidEndpointUrl {
        /// Name of the offending entry
        name: String,
        /// Kind of TOML value found under the name
        kind: &'static str,
    },
}
