//! Error types for notification dispatch.

use thiserror::Error;

/// Error type for a single HTTP round trip.
///
/// Describes what went wrong at the transport level without dictating
/// recovery strategy. The notifier surfaces these unmodified; whether a
/// missed notification is fatal is the caller's decision.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The transport gave up waiting for the server. The notifier itself
    /// enforces no timeout; this comes from the underlying client's
    /// configuration.
    #[error("Request timed out")]
    Timeout,

    /// The transport rejected the request as unbuildable.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error type for [`send_to`](super::Notifier::send_to).
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The composed target string could not be parsed as a URL.
    ///
    /// No request is sent when composition fails.
    #[error("Malformed target URL '{url}': {source}")]
    MalformedUrl {
        /// The string that failed to parse
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The HTTP round trip failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}
