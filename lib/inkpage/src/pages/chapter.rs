use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loader::{PageLoader, fetch_json};
use crate::models::Chapter;
use crate::{Decoded, LoaderClient, PathTemplate, Result, RouteParams};

/// Chapter reader page, addressed by owner, comic slug and chapter number.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterLoader;

impl ChapterLoader {
    /// Route parameters for one chapter.
    ///
    /// ```
    /// use inkpage::ChapterLoader;
    ///
    /// let params = ChapterLoader::params("alice", "my-comic", 3);
    /// assert_eq!(params.get("chapter_number"), Some("3"));
    /// ```
    #[must_use]
    pub fn params(
        owner: impl Into<String>,
        comic: impl Into<String>,
        chapter_number: impl ToString,
    ) -> RouteParams {
        RouteParams::new()
            .with("username", owner)
            .with("comic_slug", comic)
            .with("chapter_number", chapter_number.to_string())
    }
}

/// Data rendered by the chapter reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterData {
    /// The requested chapter.
    pub chapter: Decoded<Chapter>,
}

impl PageLoader for ChapterLoader {
    const TEMPLATE: PathTemplate =
        PathTemplate::new("/api/v1/comics/chapters/by_slug/{username}/{comic_slug}/{chapter_number}/");

    type Data = ChapterData;

    async fn load<C: LoaderClient>(client: &C, params: &RouteParams) -> Result<ChapterData> {
        let chapter: Decoded<Chapter> = fetch_json(client, Self::TEMPLATE, params).await?;
        debug!(id = %chapter.id, pages = chapter.pages.len(), "loaded chapter");
        Ok(ChapterData { chapter })
    }
}
