//! Built-in configuration defaults.

/// File name the `init` subcommand writes when no output is given.
pub const CONFIG_FILE: &str = "notify-out.toml";
