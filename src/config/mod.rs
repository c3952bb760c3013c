//! Configuration layer for notify-out.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Precedence
//!
//! A value given explicitly on the command line beats the config file;
//! the receiver is required from one of the two (positional argument
//! first, then `request.receiver`).
//!
//! Two merges are deliberately not field-by-field:
//!
//! - CLI `--param` pairs replace the file's params entirely when any are
//!   given, and their command-line order is the serialization order.
//!   File params serialize in the table's key order.
//! - Endpoint data composes instead: `[endpoints]` from the file seeds
//!   the registry wholesale and `--endpoint` pairs merge on top,
//!   overwriting per name. The file's endpoint data stays opaque here;
//!   the registry validates its shape at seeding time.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, RequestTypeArg};
pub use error::{ConfigError, field};
pub use toml::{RequestSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
