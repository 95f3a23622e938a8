//! Core types and traits for inkpage page data loaders.
//!
//! This crate provides the transport-agnostic building blocks used by `inkpage`:
//! - [`Request`] and [`RequestBuilder`] - outgoing GET requests
//! - [`Response`] - buffered HTTP response
//! - [`Error`] and [`Result`] - error taxonomy shared by every loader
//! - [`ErrorPayload`] - loosely-typed body of a failed response
//! - [`HttpClient`] - core client trait for HTTP execution
//! - [`LoaderClient`] - client trait with a base URL, injected into loaders
//! - [`RouteParams`] and [`PathTemplate`] - route parameter substitution
//! - [`Decoded`] - validated view of a payload that keeps the JSON it came from
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)

mod client;
mod decode;
mod error;
mod error_payload;
mod params;
mod path_template;
pub mod prelude;
mod request;
mod response;

pub use client::{HttpClient, LoaderClient};
pub use decode::{Decoded, from_json};
pub use error::{Error, Result};
pub use error_payload::{ErrorPayload, status_text};
pub use params::RouteParams;
pub use path_template::PathTemplate;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export the validation crate used by payload models
pub use garde;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
