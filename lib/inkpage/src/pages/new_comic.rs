use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loader::{PageLoader, fetch_json};
use crate::models::Genre;
use crate::{Decoded, LoaderClient, PathTemplate, Result, RouteParams};

/// "New comic" form: the genres an author can pick from.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenresLoader;

/// Data rendered by the "new comic" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenresData {
    /// Genres in backend order.
    pub genres: Decoded<Vec<Genre>>,
}

impl PageLoader for GenresLoader {
    const TEMPLATE: PathTemplate = PathTemplate::new("/api/v1/comics/genres");

    type Data = GenresData;

    async fn load<C: LoaderClient>(client: &C, params: &RouteParams) -> Result<GenresData> {
        let genres: Decoded<Vec<Genre>> = fetch_json(client, Self::TEMPLATE, params).await?;
        debug!(count = genres.len(), "loaded genres");
        Ok(GenresData { genres })
    }
}
