//! Prelude module for convenient imports.
//!
//! ```ignore
//! use inkpage_core::prelude::*;
//! ```

pub use crate::{
    Decoded, Error, ErrorPayload, HttpClient, LoaderClient, PathTemplate, Request,
    RequestBuilder, Response, Result, RouteParams, from_json,
};
pub use garde::Validate;
