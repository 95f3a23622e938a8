//! Page data loaders for the comic site front-end.
//!
//! Each page that needs backend data has a [`PageLoader`]: it issues one `GET`
//! against the backend API, checks the status, and hands the page template a
//! named, validated payload or an [`Error`].
//!
//! # Example
//!
//! ```ignore
//! use inkpage::prelude::*;
//!
//! let backend = Backend::connect(BackendConfig::builder().base_url("http://localhost:6060").build()?);
//!
//! let home = PostsLoader::load(&backend, &RouteParams::new()).await?;
//! let reader = ChapterLoader::load(&backend, &ChapterLoader::params("alice", "my-comic", 3)).await?;
//! println!("{} posts, chapter '{}'", home.posts.len(), reader.chapter.title);
//! ```

mod backend;
mod client;
mod config;
mod connector;
mod loader;
pub mod middleware;
pub mod models;
mod pages;
pub mod prelude;

pub use backend::{Backend, resolve};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{
    BackendConfig, BackendConfigBuilder, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL,
};
pub use loader::{PageLoader, fetch_json};
pub use pages::{
    ChapterData, ChapterLoader, GenresData, GenresLoader, PostsData, PostsLoader,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use inkpage_core::{
    Decoded, Error, ErrorPayload, HttpClient, LoaderClient, PathTemplate, Request,
    RequestBuilder, Response, Result, RouteParams, from_json, garde, status_text,
};

// Re-export http types for status codes and headers
pub use inkpage_core::{StatusCode, header};

pub use url;
