//! Endpoint registry mapping symbolic receiver names to base URLs.
//!
//! This module provides:
//! - The mutable name-to-URL mapping backing receiver resolution
//!   ([`EndpointRegistry`])
//! - Registry seeding errors ([`RegistryError`])
//!
//! Seed data arrives as opaque TOML data from the configuration layer;
//! the registry validates its shape at seeding time.

mod endpoints;
mod error;

#[cfg(test)]
mod endpoints_tests;

pub use endpoints::EndpointRegistry;
pub use error::RegistryError;
