//! Notification layer for dispatching HTTP requests to resolved receivers.
//!
//! This module provides:
//! - The per-call notification builder ([`Notifier`], [`RequestOptions`])
//! - Ordered request parameters and query-string serialization ([`Params`])
//! - HTTP wire types ([`HttpRequest`], [`HttpResponse`])
//! - The transport seam ([`HttpClient`]) and its production
//!   implementation ([`ReqwestClient`])
//! - A post-dispatch hook point ([`ResponseHook`])

mod client;
mod error;
mod http;
mod notifier;
mod params;


pub use client::ReqwestClient;
pub use error::{HttpError, NotifyError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use notifier::{
    Configuration, IntoConfiguration, Notifier, Passthrough, RequestKind, RequestOptions,
    ResponseHook,
};
pub use params::Params;
