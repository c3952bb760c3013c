//! Merging CLI and file configuration into the validated form.
//!
//! Validation happens while the merged form is built, with one deliberate
//! exception: endpoint seed data stays opaque and is checked by the
//! registry when it is seeded.

use std::fmt;
use std::path::{Path, PathBuf};

use toml::Value;

use crate::notify::RequestKind;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// What the application actually runs with.
///
/// Built by [`load`](Self::load) (reads the config file named on the
/// command line, then merges) or [`from_raw`](Self::from_raw) (merges
/// already-parsed sources). The command line wins over the file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Receiver to notify (required): endpoint name or literal URL
    pub receiver: String,

    /// Endpoint seed data from the config file, kept opaque for the
    /// registry to validate
    pub file_endpoints: Option<Value>,

    /// Endpoints given on the command line, merged over the file's
    pub cli_endpoints: Option<Value>,

    /// Request parameters in serialization order
    pub params: Vec<(String, String)>,

    /// Explicit request type, if forced
    pub request_type: Option<RequestKind>,

    /// Verbose logging requested
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request_type = match self.request_type {
            Some(RequestKind::Get) => "get",
            Some(RequestKind::Post) => "post",
            None => "implied",
        };

        write!(
            f,
            "Config {{ receiver: {}, endpoints: {} file / {} cli, params: {}, request_type: {} }}",
            self.receiver,
            table_len(self.file_endpoints.as_ref()),
            table_len(self.cli_endpoints.as_ref()),
            self.params.len(),
            request_type,
        )
    }
}

impl ValidatedConfig {
    /// Merges already-parsed CLI and file sources, validating as it goes.
    ///
    /// # Errors
    ///
    /// Fails when the receiver is supplied by neither source, when a
    /// request type string falls outside get/post, when an `--endpoint`
    /// or `--param` value does not split into a pair, or when a file
    /// param value has no scalar query-string form.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let receiver = Self::resolve_receiver(cli, toml)?;
        let request_type = Self::resolve_request_type(cli, toml)?;
        let params = Self::resolve_params(cli, toml)?;
        let cli_endpoints = Self::parse_cli_endpoints(cli)?;
        let file_endpoints = toml.and_then(|t| t.endpoints.clone());

        Ok(Self {
            receiver,
            file_endpoints,
            cli_endpoints,
            params,
            request_type,
            verbose: cli.verbose,
        })
    }

    /// Reads the config file named by `--config` (with `~` expanded to
    /// the home directory) and merges it under the CLI arguments.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when the merged
    /// form is invalid per [`from_raw`](Self::from_raw).
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(&expand_tilde(path))?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_receiver(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.receiver
            .clone()
            .or_else(|| toml.and_then(|t| t.request.receiver.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::RECEIVER,
                    "Pass a receiver argument or set request.receiver in config file",
                )
            })
    }

    fn resolve_request_type(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<RequestKind>, ConfigError> {
        if let Some(arg) = cli.request_type {
            return Ok(Some(arg.into()));
        }

        let Some(value) = toml.and_then(|t| t.request.request_type.as_deref()) else {
            return Ok(None);
        };

        match value.to_lowercase().as_str() {
            "get" => Ok(Some(RequestKind::Get)),
            "post" => Ok(Some(RequestKind::Post)),
            _ => Err(ConfigError::InvalidRequestType {
                value: value.to_string(),
            }),
        }
    }

    fn resolve_params(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<(String, String)>, ConfigError> {
        // CLI params replace file params entirely
        if !cli.params.is_empty() {
            return cli
                .params
                .iter()
                .map(|raw| parse_pair(raw, "param", "KEY=VALUE"))
                .collect();
        }

        let Some(toml) = toml else {
            return Ok(Vec::new());
        };

        toml.request
            .params
            .iter()
            .map(|(key, value)| Ok((key.clone(), param_value_to_string(key, value)?)))
            .collect()
    }

    fn parse_cli_endpoints(cli: &Cli) -> Result<Option<Value>, ConfigError> {
        if cli.endpoints.is_empty() {
            return Ok(None);
        }

        let mut table = toml::Table::new();
        for raw in &cli.endpoints {
            let (name, url) = parse_pair(raw, "endpoint", "NAME=URL")?;
            table.insert(name, Value::String(url));
        }

        Ok(Some(Value::Table(table)))
    }
}

/// Writes the commented configuration template to `path`.
///
/// # Errors
///
/// [`ConfigError::FileWrite`] when the path cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn table_len(value: Option<&Value>) -> usize {
    value.and_then(Value::as_table).map_or(0, toml::Table::len)
}

fn parse_pair(
    raw: &str,
    what: &'static str,
    shape: &'static str,
) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidPair {
        what,
        value: raw.to_string(),
        shape,
    };

    let (name, value) = raw.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    Ok((name.to_string(), value.trim().to_string()))
}

fn param_value_to_string(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(d) => Ok(d.to_string()),
        Value::Array(_) => Err(ConfigError::InvalidParamValue {
            key: key.to_string(),
            kind: "an array",
        }),
        Value::Table(_) => Err(ConfigError::InvalidParamValue {
            key: key.to_string(),
            kind: "a table",
        }),
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    path.strip_prefix("~").map_or_else(
        |_| path.to_path_buf(),
        |stripped| {
            dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(stripped))
        },
    )
}
