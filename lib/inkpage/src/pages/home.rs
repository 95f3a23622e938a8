use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loader::{PageLoader, fetch_json};
use crate::models::Post;
use crate::{LoaderClient, PathTemplate, Result, RouteParams};

/// Home page: the latest posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostsLoader;

/// Data rendered by the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsData {
    /// Posts in backend order.
    pub posts: Vec<Post>,
}

impl PageLoader for PostsLoader {
    const TEMPLATE: PathTemplate = PathTemplate::new("/api/posts");

    type Data = PostsData;

    async fn load<C: LoaderClient>(client: &C, params: &RouteParams) -> Result<PostsData> {
        let posts = fetch_json::<_, Vec<Post>>(client, Self::TEMPLATE, params)
            .await?
            .into_inner();
        debug!(count = posts.len(), "loaded posts");
        Ok(PostsData { posts })
    }
}
