//! The per-call notification builder.

use std::sync::Arc;

use url::Url;

use crate::registry::{EndpointRegistry, RegistryError};

use super::{HttpClient, HttpRequest, HttpResponse, NotifyError, Params, ReqwestClient};

/// Request method for a pending notification.
///
/// The notification wire surface is exactly GET and POST; the default is
/// GET until configuration says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestKind {
    /// HTTP GET (default)
    #[default]
    Get,
    /// HTTP POST with an empty body
    Post,
}

/// Structured configuration options for [`Notifier::with`].
///
/// Both fields are optional. Supplying `params` implies a POST request
/// unless an explicit [`RequestKind::Get`] is set alongside; an explicit
/// request type without content has no effect.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    params: Option<Params>,
    request_type: Option<RequestKind>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: None,
            request_type: None,
        }
    }

    /// Sets the parameters to serialize into the query string.
    #[must_use]
    pub fn params(mut self, params: impl Into<Params>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Sets an explicit request type.
    #[must_use]
    pub const fn request_type(mut self, kind: RequestKind) -> Self {
        self.request_type = Some(kind);
        self
    }
}

/// Normalized configuration accepted by [`Notifier::with`].
///
/// Produced from [`RequestOptions`], a parameter-producing closure, or
/// both together, via [`IntoConfiguration`].
#[derive(Debug, Clone)]
pub struct Configuration {
    params: Option<Params>,
    request_type: Option<RequestKind>,
    from_producer: bool,
}

/// Conversion into a normalized [`Configuration`].
///
/// Implemented for:
/// - [`RequestOptions`] (the structured path)
/// - any `FnOnce() -> impl Into<Params>` (the producer path)
/// - `(RequestOptions, producer)` for both at once; the producer's result
///   takes precedence for content
pub trait IntoConfiguration {
    /// Performs the conversion.
    fn into_configuration(self) -> Configuration;
}

impl IntoConfiguration for Configuration {
    fn into_configuration(self) -> Self {
        self
    }
}

impl IntoConfiguration for RequestOptions {
    fn into_configuration(self) -> Configuration {
        Configuration {
            params: self.params,
            request_type: self.request_type,
            from_producer: false,
        }
    }
}

impl<F, P> IntoConfiguration for F
where
    F: FnOnce() -> P,
    P: Into<Params>,
{
    fn into_configuration(self) -> Configuration {
        Configuration {
            params: Some(self().into()),
            request_type: None,
            from_producer: true,
        }
    }
}

impl<F, P> IntoConfiguration for (RequestOptions, F)
where
    F: FnOnce() -> P,
    P: Into<Params>,
{
    fn into_configuration(self) -> Configuration {
        let (options, producer) = self;
        Configuration {
            // Producer content wins over options.params
            params: Some(producer().into()),
            request_type: options.request_type,
            from_producer: true,
        }
    }
}

/// Post-dispatch hook point.
///
/// Invoked with the raw response after a successful round trip, before it
/// is handed back to the caller. The default implementation forwards the
/// response unchanged; response interpretation or logging can be inserted
/// here without altering the dispatch contract.
pub trait ResponseHook: Send + Sync {
    /// Handles the response, returning what the caller receives.
    fn on_response(&self, response: HttpResponse) -> HttpResponse {
        response
    }
}

/// Default hook that forwards the response untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ResponseHook for Passthrough {}

/// A per-call builder for one outbound notification.
///
/// Accumulates request configuration through [`with`](Self::with), then
/// resolves a receiver through the endpoint registry, composes the target
/// URL, and dispatches a single HTTP request. The registry is consulted
/// only inside resolution; the notifier holds no network state between
/// calls.
///
/// An instance models exactly one pending notification. A second
/// [`send_to`](Self::send_to) on the same instance reuses whatever method
/// and content are still pending; callers needing independent requests
/// should create independent instances.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation (defaults to [`ReqwestClient`])
/// - `R`: the post-dispatch hook (defaults to [`Passthrough`])
///
/// # Example
///
/// ```no_run
/// use notify_out::notify::{Notifier, Params, RequestOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seed = toml::from_str(r#"audio_import = "http://localhost:3001/api/v1/import_audio""#)?;
///
/// let response = Notifier::from_endpoints(&seed)?
///     .with(RequestOptions::new().params(Params::from([("track", "42")])))
///     .send_to("audio_import")
///     .await?;
///
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Notifier<H = ReqwestClient, R = Passthrough> {
    registry: Arc<EndpointRegistry>,
    client: H,
    hook: R,
    method: RequestKind,
    content: Option<String>,
}

impl Notifier {
    /// Creates a notifier over the process-wide endpoint registry.
    ///
    /// The registry is left as-is; endpoints registered earlier (or
    /// later, before dispatch) are visible to this instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: EndpointRegistry::global(),
            client: ReqwestClient::new(),
            hook: Passthrough,
            method: RequestKind::Get,
            content: None,
        }
    }

    /// Creates a notifier after replacing the process-wide registry
    /// content with the given seed data.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the seed data is not a table of
    /// name-to-URL strings; the registry is left unchanged.
    pub fn from_endpoints(endpoints: &toml::Value) -> Result<Self, RegistryError> {
        let notifier = Self::new();
        notifier.registry.set_all(endpoints)?;
        Ok(notifier)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, R> Notifier<H, R> {
    /// Swaps the backing registry for an independent instance.
    ///
    /// Useful for tests and multi-tenant callers that must not touch the
    /// process-wide registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<EndpointRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Swaps the HTTP client implementation.
    #[must_use]
    pub fn with_client<H2>(self, client: H2) -> Notifier<H2, R> {
        Notifier {
            registry: self.registry,
            client,
            hook: self.hook,
            method: self.method,
            content: self.content,
        }
    }

    /// Swaps the post-dispatch hook.
    #[must_use]
    pub fn with_response_hook<R2>(self, hook: R2) -> Notifier<H, R2> {
        Notifier {
            registry: self.registry,
            client: self.client,
            hook,
            method: self.method,
            content: self.content,
        }
    }

    /// Accumulates request configuration.
    ///
    /// Accepts [`RequestOptions`], a zero-argument producer closure
    /// yielding parameters, or both as a tuple. Method selection follows
    /// a fixed precedence:
    ///
    /// - no content supplied: method and content are left untouched
    /// - `params` alone: POST
    /// - `params` with an explicit [`RequestKind::Get`]: GET
    /// - a producer: POST, and its result is the content even when
    ///   options with an explicit request type are supplied alongside
    ///
    /// Mutates only the pending method and content; no network or
    /// registry effect.
    #[must_use]
    pub fn with<C: IntoConfiguration>(mut self, configuration: C) -> Self {
        let configuration = configuration.into_configuration();

        if configuration.from_producer {
            // Producer content always posts; the two configuration paths
            // are independent and the producer's default is not overridden
            // by an explicit request type.
            self.method = RequestKind::Post;
            self.content = configuration.params.map(|p| p.to_query());
        } else if let Some(params) = configuration.params {
            self.method = match configuration.request_type {
                Some(RequestKind::Get) => RequestKind::Get,
                _ => RequestKind::Post,
            };
            self.content = Some(params.to_query());
        }

        self
    }

    /// Returns the pending request kind.
    #[must_use]
    pub const fn request_kind(&self) -> RequestKind {
        self.method
    }

    /// Returns the pending serialized content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Resolves a receiver to the full target URL for this notification.
    ///
    /// A receiver matching a registered endpoint name resolves to its URL;
    /// anything else is taken literally. Pending content is appended as a
    /// query string. Exposed for diagnostics: this is exactly the URL
    /// [`send_to`](Self::send_to) would dispatch to.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MalformedUrl`] if the composed string cannot
    /// be parsed as a URL.
    pub fn target_url(&self, receiver: &str) -> Result<Url, NotifyError> {
        let base = self
            .registry
            .resolve(receiver)
            .unwrap_or_else(|| receiver.to_owned());

        let target = match self.content.as_deref() {
            Some(content) if !content.is_empty() => format!("{base}?{content}"),
            _ => base,
        };

        Url::parse(&target).map_err(|source| NotifyError::MalformedUrl {
            url: target,
            source,
        })
    }
}

impl<H: HttpClient, R: ResponseHook> Notifier<H, R> {
    /// Resolves the receiver, dispatches the notification, and returns
    /// the raw response.
    ///
    /// The calling task is suspended for the duration of the round trip.
    /// No retry, no response decoding; the response passes through the
    /// configured [`ResponseHook`] before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when:
    /// - The composed target is not a parseable URL
    ///   ([`NotifyError::MalformedUrl`]); nothing is sent
    /// - The transport fails ([`NotifyError::Http`]); surfaced unmodified
    pub async fn send_to(&self, receiver: &str) -> Result<HttpResponse, NotifyError> {
        let url = self.target_url(receiver)?;
        let request = self.build_request(url);

        let response = self.client.request(request).await?;
        Ok(self.hook.on_response(response))
    }

    /// Builds the request for the resolved URL per the pending method.
    ///
    /// A POST carries an empty body: content lives entirely in the query
    /// string.
    fn build_request(&self, url: Url) -> HttpRequest {
        match self.method {
            RequestKind::Get => HttpRequest::get(url),
            RequestKind::Post => HttpRequest::post(url).with_body(Vec::new()),
        }
    }
}
