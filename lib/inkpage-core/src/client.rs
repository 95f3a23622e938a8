//! HTTP client traits.
//!
//! - [`HttpClient`] - Low-level HTTP execution
//! - [`LoaderClient`] - Client with a base URL, the capability handed to page loaders
//!
//! Loaders never pick a transport themselves. Implement [`LoaderClient`]
//! directly to forward cookies from an incoming page request, or to stub the
//! backend in tests.

use std::future::Future;

use url::Url;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations should be async-first and support connection pooling.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// A response is returned for every status code; only transport-level
    /// failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

/// Transport capability injected into page loaders.
///
/// Combines HTTP execution with the backend base URL, so a loader only knows
/// the path template of its resource.
///
/// # Example
///
/// ```ignore
/// use inkpage_core::{LoaderClient, Request, Response, Result};
/// use url::Url;
///
/// #[derive(Clone)]
/// struct CookieClient {
///     inner: HyperClient,
///     base_url: Url,
///     cookie: String,
/// }
///
/// impl LoaderClient for CookieClient {
///     fn execute(&self, mut request: Request) -> impl Future<Output = Result<Response>> + Send {
///         request.headers_mut().insert("Cookie".to_string(), self.cookie.clone());
///         let inner = self.inner.clone();
///         async move { inner.execute(request).await }
///     }
///
///     fn base_url(&self) -> &Url {
///         &self.base_url
///     }
/// }
/// ```
pub trait LoaderClient: Clone + Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure (network, TLS, timeout).
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;

    /// Base URL of the backend API.
    ///
    /// Loader paths are resolved relative to this URL.
    fn base_url(&self) -> &Url;
}
