//! Config file schema and parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root of the configuration file.
///
/// Every field is optional so a partial file can be completed from the
/// command line.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Endpoint seed data: a table of name-to-URL entries.
    ///
    /// Deliberately an opaque TOML value here; the registry validates
    /// its shape when it is seeded.
    pub endpoints: Option<toml::Value>,

    /// Request configuration section
    #[serde(default)]
    pub request: RequestSection,
}

/// The `[request]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSection {
    /// Receiver to notify: an endpoint name or a literal URL
    pub receiver: Option<String>,

    /// Explicit request type: "get" or "post"
    pub request_type: Option<String>,

    /// Parameters serialized into the query string, in key order
    #[serde(default)]
    pub params: toml::Table,
}

impl TomlConfig {
    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileRead`] when the file cannot be read,
    /// [`ConfigError::TomlParse`] when its content does not match the
    /// schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(source) => Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TomlParse`] when the string is not valid for the
    /// schema, unknown fields included.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// The commented configuration template written by `init`.
#[must_use]
pub fn default_config_template() -> String {
    r#"# notify-out Configuration File

# Named endpoints available for receiver resolution.
# A receiver matching a name below resolves to its URL; anything else is
# treated as a literal URL.
# [endpoints]
# audio_import = "http://localhost:3001/api/v1/import_embed_audio"
# orders = "https://orders.example.com/notify"

[request]
# Receiver to notify: an endpoint name from [endpoints] or a literal URL.
# The positional CLI argument takes precedence.
# receiver = "audio_import"

# Explicit request type ("get" or "post").
# Supplying params implies POST unless "get" is forced here.
# request_type = "get"

# Parameters serialized into the query string (in key order).
# CLI --param pairs replace these entirely when given.
# [request.params]
# track = "42"
# format = "mp3"
"#
    .to_string()
}
