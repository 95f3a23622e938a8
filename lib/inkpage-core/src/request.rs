//! Outgoing request building.
//!
//! Loaders only ever issue `GET`, so a [`Request`] carries a URL, headers and
//! the path template it was expanded from. There is no body.
//!
//! # Example
//!
//! ```
//! use inkpage_core::Request;
//!
//! let request = Request::get("http://localhost:6060/api/posts".parse().unwrap())
//!     .header("Accept", "application/json")
//!     .build();
//! ```

use std::collections::HashMap;

use url::Url;

use crate::PathTemplate;

/// An HTTP `GET` request with URL and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: Url,
    headers: HashMap<String, String>,
    template: Option<PathTemplate>,
}

impl Request {
    /// Creates a [`RequestBuilder`] for a `GET` to `url`.
    #[must_use]
    pub fn get(url: Url) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Path template the URL was expanded from, if any.
    #[must_use]
    pub const fn template(&self) -> Option<&PathTemplate> {
        self.template.as_ref()
    }

    /// Consume into (url, headers, template).
    #[must_use]
    pub fn into_parts(self) -> (Url, HashMap<String, String>, Option<PathTemplate>) {
        (self.url, self.headers, self.template)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: Url,
    headers: HashMap<String, String>,
    template: Option<PathTemplate>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
            template: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Records the path template, for logging.
    #[must_use]
    pub const fn template(mut self, template: PathTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            url: self.url,
            headers: self.headers,
            template: self.template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_basic() {
        let url = Url::parse("http://localhost:6060/api/posts").expect("valid URL");
        let request = Request::get(url)
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.url().as_str(), "http://localhost:6060/api/posts");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.template().is_none());
    }

    #[test]
    fn request_builder_headers_and_template() {
        let url = Url::parse("http://localhost:6060/api/v1/comics/genres").expect("valid URL");
        let request = Request::get(url)
            .headers([("Cookie".to_string(), "session=abc".to_string())])
            .template(PathTemplate::new("/api/v1/comics/genres"))
            .build();

        assert_eq!(request.header("Cookie"), Some("session=abc"));
        assert_eq!(
            request.template().map(PathTemplate::as_str),
            Some("/api/v1/comics/genres")
        );

        let (url, headers, template) = request.into_parts();
        assert_eq!(url.path(), "/api/v1/comics/genres");
        assert_eq!(headers.len(), 1);
        assert!(template.is_some());
    }

    #[test]
    fn headers_mut_overrides() {
        let url = Url::parse("http://localhost:6060/").expect("valid URL");
        let mut request = Request::get(url).header("Accept", "text/html").build();
        request
            .headers_mut()
            .insert("Accept".to_string(), "application/json".to_string());

        assert_eq!(request.header("Accept"), Some("application/json"));
    }
}
