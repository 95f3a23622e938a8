//! Client and backend configuration types.

use std::time::Duration;

use url::Url;

use crate::middleware::DEFAULT_MAX_REDIRECTS;
use crate::{Error, Result};

/// Base URL of the backend API when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6060";

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout, including reading the body.
    pub timeout: Duration,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

/// Everything needed to reach the backend, passed in once at startup.
///
/// # Example
///
/// ```ignore
/// use inkpage::{Backend, BackendConfig};
///
/// let config = BackendConfig::builder()
///     .base_url("http://api.internal:6060")
///     .forward_header("Cookie", session_cookie)
///     .build()?;
/// let backend = Backend::connect(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the backend API; loader paths are resolved below it.
    pub base_url: Url,
    /// Transport settings.
    pub client: ClientConfig,
    /// Log every request with `tracing` (needs the `middleware-logging` feature).
    pub logging: bool,
    /// Headers added to every request, such as the page visitor's `Cookie`.
    pub forwarded_headers: Vec<(String, String)>,
    /// Redirects followed before giving up; `0` turns redirects into errors.
    pub max_redirects: usize,
}

impl BackendConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> BackendConfigBuilder {
        BackendConfigBuilder::default()
    }
}

/// Builder for [`BackendConfig`].
#[derive(Debug, Clone, Default)]
pub struct BackendConfigBuilder {
    base_url: Option<String>,
    client: ClientConfigBuilder,
    logging: Option<bool>,
    forwarded_headers: Vec<(String, String)>,
    max_redirects: Option<usize>,
}

impl BackendConfigBuilder {
    /// Set the backend base URL (default [`DEFAULT_BASE_URL`]).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.connect_timeout(timeout);
        self
    }

    /// Enable or disable request logging (default enabled).
    #[must_use]
    pub const fn logging(mut self, enabled: bool) -> Self {
        self.logging = Some(enabled);
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn forward_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.forwarded_headers.push((name.into(), value.into()));
        self
    }

    /// Set how many redirects are followed (default [`DEFAULT_MAX_REDIRECTS`]).
    #[must_use]
    pub const fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = Some(max_redirects);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL does not parse, or
    /// [`Error::InvalidRequest`] if it is not an `http`/`https` URL.
    pub fn build(self) -> Result<BackendConfig> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_request(format!(
                "backend base URL must be http or https, got `{base_url}`"
            )));
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(Error::invalid_request(format!(
                "backend base URL must not carry a query or fragment, got `{base_url}`"
            )));
        }

        Ok(BackendConfig {
            base_url,
            client: self.client.build(),
            logging: self.logging.unwrap_or(true),
            forwarded_headers: self.forwarded_headers,
            max_redirects: self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        check!(config.timeout == Duration::from_secs(30));
        check!(config.connect_timeout == Duration::from_secs(10));
        check!(config.pool_idle_per_host == 32);
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .pool_idle_per_host(16)
            .build();

        check!(config.timeout == Duration::from_secs(60));
        check!(config.connect_timeout == Duration::from_secs(5));
        check!(config.pool_idle_per_host == 16);
        check!(config.pool_idle_timeout == Duration::from_secs(90));
    }

    #[test]
    fn backend_defaults() {
        let config = BackendConfig::builder().build().expect("config");

        check!(config.base_url.as_str() == "http://localhost:6060/");
        check!(config.logging);
        check!(config.forwarded_headers.is_empty());
        check!(config.max_redirects == 10);
        check!(config.client == ClientConfig::default());
    }

    #[test]
    fn backend_overrides() {
        let config = BackendConfig::builder()
            .base_url("https://comics.example.com/backend/")
            .timeout(Duration::from_secs(5))
            .logging(false)
            .forward_header("Cookie", "session=abc")
            .max_redirects(0)
            .build()
            .expect("config");

        check!(config.base_url.path() == "/backend/");
        check!(config.max_redirects == 0);
        check!(config.client.timeout == Duration::from_secs(5));
        check!(!config.logging);
        check!(config.forwarded_headers == [("Cookie".to_string(), "session=abc".to_string())]);
    }

    #[test]
    fn rejects_bad_base_urls() {
        let_assert!(Err(Error::InvalidUrl(_)) = BackendConfig::builder().base_url("not a url").build());
        let_assert!(
            Err(Error::InvalidRequest(_)) = BackendConfig::builder().base_url("ftp://localhost").build()
        );
        let_assert!(
            Err(Error::InvalidRequest(_)) =
                BackendConfig::builder().base_url("http://localhost:6060/?debug=1").build()
        );
    }
}
