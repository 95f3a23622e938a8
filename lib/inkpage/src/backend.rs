//! The backend API as seen by page loaders.
//!
//! [`Backend`] pairs any [`HttpClient`] with the backend base URL to form a
//! [`LoaderClient`].

use std::future::Future;

use url::Url;

use crate::{
    BackendConfig, HttpClient, HyperClient, HyperClientBuilder, LoaderClient, Request, Response,
    Result,
};

/// Backend API client: an HTTP client plus the base URL.
///
/// # Example
///
/// ```ignore
/// use inkpage::{Backend, BackendConfig, PageLoader, PostsLoader, RouteParams};
///
/// let backend = Backend::connect(BackendConfig::builder().build()?);
/// let home = PostsLoader::load(&backend, &RouteParams::new()).await?;
/// ```
#[derive(Debug)]
pub struct Backend<C> {
    client: C,
    base_url: Url,
}

impl<C: Clone> Clone for Backend<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl Backend<HyperClient> {
    /// Build the production client described by `config`.
    ///
    /// Layers, innermost first: logging (when enabled), redirects, forwarded
    /// headers. Logging sees each hop with the headers actually sent; a
    /// redirect leaving the backend origin drops forwarded credentials.
    #[must_use]
    pub fn connect(config: BackendConfig) -> Self {
        let base_url = config.base_url.clone();
        Self::new(client_builder(config).build(), base_url)
    }
}

fn client_builder(config: BackendConfig) -> HyperClientBuilder {
    let BackendConfig {
        base_url: _,
        client,
        logging,
        forwarded_headers,
        max_redirects,
    } = config;

    let builder = HyperClient::builder().config(&client);
    #[cfg(feature = "middleware-logging")]
    let builder = if logging {
        builder.with_logging()
    } else {
        builder
    };
    #[cfg(not(feature = "middleware-logging"))]
    let _ = logging;

    let builder = builder.with_follow_redirects_max(max_redirects);
    if forwarded_headers.is_empty() {
        builder
    } else {
        builder.with_forwarded_headers(forwarded_headers)
    }
}

impl<C> Backend<C> {
    /// Wrap `client` with a pre-parsed base URL.
    #[must_use]
    pub fn new(client: C, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Get a reference to the inner HTTP client.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Consume the wrapper and return the inner HTTP client.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }
}

impl<C> LoaderClient for Backend<C>
where
    C: HttpClient + Clone,
{
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send {
        self.client.execute(request)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Resolve an expanded template path below `base`.
///
/// Unlike [`Url::join`], a path prefix on the base URL is kept:
/// `http://host/backend` + `/api/posts` gives `http://host/backend/api/posts`.
#[must_use]
pub fn resolve(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    url.set_path(&format!("{prefix}/{path}"));
    url
}
