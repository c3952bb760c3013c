//! The endpoint registry shared across notification calls.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use toml::Value;

use super::RegistryError;

/// Process-wide registry instance shared by default-constructed notifiers.
static GLOBAL: LazyLock<Arc<EndpointRegistry>> =
    LazyLock::new(|| Arc::new(EndpointRegistry::new()));

/// Mutable mapping from symbolic endpoint name to base URL string.
///
/// The registry is consulted during receiver resolution: a receiver that
/// matches a registered name resolves to its URL, anything else is treated
/// as a literal URL by the caller. Registration happens through two
/// operations with distinct semantics:
///
/// - [`set_all`](Self::set_all) replaces the entire content
/// - [`merge`](Self::merge) inserts or overwrites per key
///
/// Both take opaque TOML data and validate that it is a table of strings,
/// failing with [`RegistryError`] without touching existing entries.
///
/// Reads and writes are guarded by an [`RwLock`]; registration is expected
/// to happen during startup, not interleaved with high-frequency sends.
///
/// # Example
///
/// ```
/// use notify_out::registry::EndpointRegistry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = EndpointRegistry::new();
/// let seed = toml::from_str(r#"orders = "http://orders.example.com/notify""#)?;
///
/// registry.set_all(&seed)?;
/// assert_eq!(
///     registry.resolve("orders").as_deref(),
///     Some("http://orders.example.com/notify"),
/// );
/// assert_eq!(registry.resolve("unknown"), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    entries: RwLock<HashMap<String, String>>,
}

impl EndpointRegistry {
    /// Creates an empty registry.
    ///
    /// Use this for an independent registry (per test, per tenant) instead
    /// of mutating the shared process-wide instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide shared registry.
    ///
    /// All notifiers constructed without an explicit registry read and
    /// write through this instance.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Replaces the entire registry content with the given seed data.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if `entries` is not a TOML table or any
    /// entry value is not a string. On failure the registry is left
    /// unchanged: validation completes before the content is swapped.
    pub fn set_all(&self, entries: &Value) -> Result<(), RegistryError> {
        let parsed = parse_entries(entries)?;
        *self.write() = parsed;
        Ok(())
    }

    /// Inserts or overwrites the entry for each key in the seed data.
    ///
    /// Keys not present in `entries` are left unchanged.
    ///
    /// # Errors
    ///
    /// Same validation and atomic-failure contract as [`set_all`](Self::set_all).
    pub fn merge(&self, entries: &Value) -> Result<(), RegistryError> {
        let parsed = parse_entries(entries)?;
        self.write().extend(parsed);
        Ok(())
    }

    /// Looks up the URL registered under `name`.
    ///
    /// Pure lookup, no mutation. Returns `None` for unknown names; the
    /// caller decides how to degrade (the notifier falls back to treating
    /// the name as a literal URL).
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.read().get(name).cloned()
    }

    /// Returns the number of registered endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no endpoints are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a copy of the current registry content.
    ///
    /// Useful for diagnostics and for asserting that failed seeding left
    /// the content untouched.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Validates seed data into a concrete name-to-URL map.
///
/// Validation happens up front so a failure never leaves the registry
/// partially mutated.
fn parse_entries(entries: &Value) -> Result<HashMap<String, String>, RegistryError> {
    let Value::Table(table) = entries else {
        return Err(RegistryError::InvalidEndpoints {
            kind: value_kind(entries),
        });
    };

    table
        .iter()
        .map(|(name, value)| match value {
            Value::String(url) => Ok((name.clone(), url.clone())),
            other => Err(RegistryError::InvalidEndpointUrl {
                name: name.clone(),
                kind: value_kind(other),
            }),
        })
        .collect()
}

/// Human-readable kind of a TOML value, for error messages.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "a string",
        Value::Integer(_) => "an integer",
        Value::Float(_) => "a float",
        Value::Boolean(_) => "a boolean",
        Value::Datetime(_) => "a datetime",
        Value::Array(_) => "an array",
        Value::Table(_) => "a table",
    }
}
