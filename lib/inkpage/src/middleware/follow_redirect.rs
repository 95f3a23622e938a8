//! Follow redirect middleware.
//!
//! Loaders only see the final answer: 3xx responses with a `Location` header
//! are followed, relative locations are resolved against the current URL.
//! Every hop stays a `GET`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::{Layer, Service};
use url::Url;

use crate::{Error, Request, Response, Result};

/// Default maximum number of redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Headers that are dropped when a redirect leaves the original origin.
const CREDENTIAL_HEADERS: [&str; 3] = ["cookie", "authorization", "proxy-authorization"];

/// Layer that follows HTTP redirects.
///
/// # Example
///
/// ```ignore
/// use inkpage::middleware::FollowRedirectLayer;
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(FollowRedirectLayer::new())
///     .service(client);
/// ```
#[derive(Debug, Clone)]
pub struct FollowRedirectLayer {
    max_redirects: usize,
}

impl Default for FollowRedirectLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowRedirectLayer {
    /// Follow up to [`DEFAULT_MAX_REDIRECTS`] redirects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Follow up to `max_redirects` redirects.
    #[must_use]
    pub fn with_max_redirects(max_redirects: usize) -> Self {
        Self { max_redirects }
    }
}

impl<S> Layer<S> for FollowRedirectLayer {
    type Service = FollowRedirect<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FollowRedirect {
            inner,
            max_redirects: self.max_redirects,
        }
    }
}

/// Service that follows HTTP redirects.
#[derive(Debug, Clone)]
pub struct FollowRedirect<S> {
    inner: S,
    max_redirects: usize,
}

fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("location"))
        .map(|(_, value)| value.as_str())
}

/// Resolve a `Location` value relative to the URL that answered with it.
fn resolve_redirect_url(current: &Url, location: &str) -> Result<Url> {
    current.join(location).map_err(Error::InvalidUrl)
}

/// The request for the next hop.
fn redirected(request: Request, to: Url) -> Request {
    let (from, mut headers, template) = request.into_parts();
    if from.origin() != to.origin() {
        headers.retain(|name, _| {
            !CREDENTIAL_HEADERS
                .iter()
                .any(|credential| name.eq_ignore_ascii_case(credential))
        });
    }

    let builder = Request::get(to).headers(headers);
    match template {
        Some(template) => builder.template(template).build(),
        None => builder.build(),
    }
}

impl<S> Service<Request> for FollowRedirect<S>
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

    fn call(&mut self, request: Request) -> Self::Future {
        let mut inner = self.inner.clone();
        let max_redirects = self.max_redirects;

        Box::pin(async move {
            let mut current_request = request;
            let mut redirects = 0;

            loop {
                let response = inner.call(current_request.clone()).await?;

                if !is_redirect(response.status()) {
                    return Ok(response);
                }

                if redirects >= max_redirects {
                    return Err(Error::TooManyRedirects {
                        count: redirects,
                        max: max_redirects,
                    });
                }

                let location = location(&response).ok_or_else(|| {
                    Error::InvalidRedirect(format!(
                        "{} response without a Location header",
                        response.status()
                    ))
                })?;
                let next_url = resolve_redirect_url(current_request.url(), location)?;

                current_request = redirected(current_request, next_url);
                redirects += 1;
            }
        })
    }
}
