//! HTTP wire types and the client seam.

use super::HttpError;

/// A single outbound request, ready for dispatch.
///
/// Carries exactly what the notifier decided: a method, the fully
/// composed target URL, and an optional body. There is deliberately no
/// header map; any header beyond the method defaults is layered on by
/// the transport or the caller, never by the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// GET or POST for notifications
    pub method: http::Method,
    /// Composed target, query string included
    pub url: url::Url,
    /// Body bytes, when the method carries one
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A GET request for the given target.
    #[must_use]
    pub const fn get(url: url::Url) -> Self {
        Self {
            method: http::Method::GET,
            url,
            body: None,
        }
    }

    /// A POST request for the given target.
    #[must_use]
    pub const fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            body: None,
        }
    }

    /// Attaches a body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// A fully received response.
///
/// Status, headers, and buffered body exactly as the transport produced
/// them. The notifier hands this back without interpreting any of it;
/// the helpers here are conveniences for callers that do.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body, buffered in full
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Assembles a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as text, when it is valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// The transport seam.
///
/// The notifier reaches the network only through this trait, which keeps
/// dispatch testable with capturing mocks and lets callers wrap the
/// production client with concerns of their own (timeouts, logging).
pub trait HttpClient: Send + Sync {
    /// Performs one request/response round trip.
    ///
    /// Implementations send the request once and buffer the full
    /// response; they do not retry and do not decode the body.
    ///
    /// # Errors
    ///
    /// [`HttpError::Connection`] when the connection cannot be
    /// established or dies mid-request, [`HttpError::Timeout`] when the
    /// transport's own deadline elapses, and [`HttpError::InvalidRequest`]
    /// when the request cannot be built at all.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
