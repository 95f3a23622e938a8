//! Header forwarding middleware.
//!
//! Server-side page renders call the backend on behalf of a visitor; this
//! layer attaches the visitor's headers (typically `Cookie`) to every
//! outgoing request. A header already set on the request wins.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

/// Layer that adds a fixed set of headers to requests.
///
/// # Example
///
/// ```ignore
/// use inkpage::middleware::ForwardHeadersLayer;
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(ForwardHeadersLayer::new([("Cookie", "session=abc")]))
///     .service(client);
/// ```
#[derive(Debug, Clone)]
pub struct ForwardHeadersLayer {
    headers: Arc<[(String, String)]>,
}

impl ForwardHeadersLayer {
    /// Create a new layer forwarding `headers`.
    pub fn new<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<S> Layer<S> for ForwardHeadersLayer {
    type Service = ForwardHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ForwardHeaders {
            inner,
            headers: Arc::clone(&self.headers),
        }
    }
}

/// Service that adds a fixed set of headers to requests.
#[derive(Debug, Clone)]
pub struct ForwardHeaders<S> {
    inner: S,
    headers: Arc<[(String, String)]>,
}

impl<S> Service<Request> for ForwardHeaders<S>
where
    S: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        for (name, value) in self.headers.iter() {
            let already_set = request
                .headers()
                .keys()
                .any(|existing| existing.eq_ignore_ascii_case(name));
            if !already_set {
                request.headers_mut().insert(name.clone(), value.clone());
            }
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;
    use tower::{ServiceExt, service_fn};
    use url::Url;

    use super::*;

    fn echo_headers(request: Request) -> std::future::Ready<Result<Response>> {
        let headers: HashMap<String, String> = request.headers().clone();
        std::future::ready(Ok(Response::new(200, headers, Bytes::new())))
    }

    #[tokio::test]
    async fn adds_missing_headers() {
        let service = ForwardHeadersLayer::new([("Cookie", "session=abc")])
            .layer(service_fn(echo_headers));
        let url = Url::parse("http://localhost:6060/api/posts").expect("url");

        let response = service
            .oneshot(Request::get(url).build())
            .await
            .expect("response");

        assert_eq!(response.header("Cookie"), Some("session=abc"));
    }

    #[tokio::test]
    async fn request_header_wins() {
        let service = ForwardHeadersLayer::new([("Accept", "text/html")])
            .layer(service_fn(echo_headers));
        let url = Url::parse("http://localhost:6060/api/posts").expect("url");
        let request = Request::get(url).header("accept", "application/json").build();

        let response = service.oneshot(request).await.expect("response");

        assert_eq!(response.header("accept"), Some("application/json"));
        assert_eq!(response.header("Accept"), None);
    }
}
