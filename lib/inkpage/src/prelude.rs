//! Prelude module for convenient imports.
//!
//! ```ignore
//! use inkpage::prelude::*;
//! ```

pub use crate::{
    Backend, BackendConfig, ChapterData, ChapterLoader, ClientConfig, Decoded, Error,
    GenresData, GenresLoader, HttpClient, HyperClient, LoaderClient, PageLoader, PostsData,
    PostsLoader, Request, Response, Result, RouteParams, StatusCode,
};
pub use crate::models::{Chapter, Genre, Post};
