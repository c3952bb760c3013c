//! Command-line interface, parsed with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::notify::RequestKind;

use super::defaults;

/// notify-out: Outbound Notification Client
///
/// Resolves a receiver against a registry of named endpoints and
/// dispatches a single HTTP GET/POST notification.
#[derive(Debug, Parser)]
#[command(name = "notify-out")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Receiver to notify: a registered endpoint name or a literal URL
    pub receiver: Option<String>,

    /// Extra endpoint as NAME=URL, layered over the config file (repeatable)
    #[arg(long = "endpoint", value_name = "NAME=URL")]
    pub endpoints: Vec<String>,

    /// Query parameter as KEY=VALUE, serialized in the order given (repeatable)
    #[arg(long = "param", value_name = "K=V")]
    pub params: Vec<String>,

    /// Force the request type (parameters imply post otherwise)
    #[arg(long = "request-type", value_enum)]
    pub request_type: Option<RequestTypeArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for notify-out
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Request type as it appears on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequestTypeArg {
    /// Force a GET request
    Get,
    /// POST with content carried in the query string
    Post,
}

impl From<RequestTypeArg> for RequestKind {
    fn from(arg: RequestTypeArg) -> Self {
        match arg {
            RequestTypeArg::Get => Self::Get,
            RequestTypeArg::Post => Self::Post,
        }
    }
}

impl Cli {
    /// Parses the real command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses from an explicit argument list; tests feed arguments here.
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// True when the init subcommand was requested.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
