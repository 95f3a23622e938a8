//! The resource loader shared by every page.
//!
//! A load is exactly one `GET`: expand the template, resolve it below the
//! backend base URL, send, then either decode and validate a `200 OK` body or
//! turn anything else into [`Error::Http`].

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::resolve;
use crate::{Decoded, Error, LoaderClient, PathTemplate, Request, Result, RouteParams};

/// Data loader for one page.
///
/// Implementors are stateless: two loads with the same parameters against the
/// same backend answer produce the same result.
pub trait PageLoader {
    /// Backend path this page reads from.
    const TEMPLATE: PathTemplate;

    /// What the page template renders, serialized under a named field.
    type Data: Serialize + Send;

    /// Load the page data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] if `params` do not fill the template
    /// - [`Error::Http`] if the backend answers with anything but `200 OK`
    /// - [`Error::MalformedPayload`] if the `200 OK` body cannot be trusted
    /// - transport errors from `client`
    fn load<C: LoaderClient>(
        client: &C,
        params: &RouteParams,
    ) -> impl Future<Output = Result<Self::Data>> + Send;
}

/// Fetch `template` and decode the `200 OK` body as a validated `T`.
///
/// # Errors
///
/// See [`PageLoader::load`].
pub async fn fetch_json<C, T>(
    client: &C,
    template: PathTemplate,
    params: &RouteParams,
) -> Result<Decoded<T>>
where
    C: LoaderClient,
    T: DeserializeOwned + garde::Validate,
    T::Context: Default,
{
    let path = template.expand(params)?;
    let url = resolve(client.base_url(), &path);
    debug!(%template, %url, "loading page data");

    let request = Request::get(url)
        .header("Accept", "application/json")
        .template(template)
        .build();
    let response = client.execute(request).await?;

    if !response.is_ok() {
        let err = Error::from_response(response.status(), response.body());
        warn!(%template, status = response.status(), error = %err, "backend refused page data");
        return Err(err);
    }

    Decoded::from_slice(response.body()).inspect_err(|err| {
        warn!(%template, error = %err, "backend sent a malformed payload");
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use bytes::Bytes;
    use serde::Deserialize;
    use url::Url;

    use super::*;
    use crate::Response;

    #[derive(Clone)]
    struct Canned {
        base_url: Url,
        status: u16,
        body: &'static str,
        seen: Arc<Mutex<Vec<Request>>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                base_url: Url::parse("http://localhost:6060").expect("url"),
                status,
                body,
                seen: Arc::default(),
            }
        }
    }

    impl LoaderClient for Canned {
        async fn execute(&self, request: Request) -> Result<Response> {
            self.seen.lock().expect("lock").push(request);
            Ok(Response::new(
                self.status,
                HashMap::new(),
                Bytes::from_static(self.body.as_bytes()),
            ))
        }

        fn base_url(&self) -> &Url {
            &self.base_url
        }
    }

    #[derive(Debug, PartialEq, Deserialize, garde::Validate)]
    struct Item {
        #[garde(range(min = 1))]
        id: u32,
    }

    const ITEMS: PathTemplate = PathTemplate::new("/api/items/{kind}");

    #[tokio::test]
    async fn sends_one_json_get() {
        let client = Canned::new(200, r#"[{"id": 1}, {"id": 3}]"#);
        let params = RouteParams::new().with("kind", "odd");

        let items: Decoded<Vec<Item>> = fetch_json(&client, ITEMS, &params).await.expect("load");
        assert_eq!(*items, [Item { id: 1 }, Item { id: 3 }]);

        let seen = client.seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        let request = seen.first().expect("request");
        assert_eq!(request.url().as_str(), "http://localhost:6060/api/items/odd");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.template(), Some(&ITEMS));
    }

    #[tokio::test]
    async fn non_200_success_codes_are_failures() {
        let client = Canned::new(204, "");
        let params = RouteParams::new().with("kind", "odd");

        let err = fetch_json::<_, Vec<Item>>(&client, ITEMS, &params)
            .await
            .expect_err("204 is not 200");
        assert_eq!(err.status(), Some(204));
        assert_eq!(err.message(), "No Content");
    }

    #[tokio::test]
    async fn bad_params_fail_before_io() {
        let client = Canned::new(200, "[]");

        let err = fetch_json::<_, Vec<Item>>(&client, ITEMS, &RouteParams::new())
            .await
            .expect_err("missing kind");
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(client.seen.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn invalid_items_are_malformed() {
        let client = Canned::new(200, r#"[{"id": 1}, {"id": 0}]"#);
        let params = RouteParams::new().with("kind", "odd");

        let err = fetch_json::<_, Vec<Item>>(&client, ITEMS, &params)
            .await
            .expect_err("id 0 is out of range");
        assert!(matches!(err, Error::MalformedPayload { ref path, .. } if path == "[1].id"));
    }
}
