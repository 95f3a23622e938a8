//! Tower middleware layers for the inkpage HTTP client.
//!
//! Layers wrap the hyper transport through [`crate::HyperClientBuilder::layer`]
//! and see every loader request before it leaves the process.
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-logging` (default) | `.with_logging()` helper |
//!
//! - [`FollowRedirectLayer`] - Follows 3xx responses up to a limit
//! - [`ForwardHeadersLayer`] - Adds fixed headers (e.g. `Cookie`) to every request
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use inkpage::HyperClient;
//! use inkpage::middleware::ForwardHeadersLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(ForwardHeadersLayer::new([("Cookie", "session=abc")]))
//!     .with_logging()
//!     .build();
//! ```

mod follow_redirect;
mod forward_headers;
#[cfg(feature = "middleware-logging")]
mod logging;

pub use follow_redirect::{DEFAULT_MAX_REDIRECTS, FollowRedirect, FollowRedirectLayer};
pub use forward_headers::{ForwardHeaders, ForwardHeadersLayer};
#[cfg(feature = "middleware-logging")]
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
