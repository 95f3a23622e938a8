use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::not_blank;

/// A published comic chapter with its pages, as served to the reader page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, garde::Validate)]
pub struct Chapter {
    /// Chapter id.
    #[garde(skip)]
    pub id: Uuid,
    /// Id of the user who published the comic.
    #[garde(skip)]
    pub author_id: Uuid,
    /// Id of the comic the chapter belongs to.
    #[garde(skip)]
    pub comic_id: Uuid,
    /// Chapter title.
    #[garde(custom(not_blank))]
    pub title: String,
    /// Average reader rating, `0.0..=10.0`; `None` until someone rates it.
    #[garde(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    /// Chapter number within the comic.
    #[garde(skip)]
    pub number: i32,
    /// Optional blurb.
    #[serde(default)]
    #[garde(skip)]
    pub description: Option<String>,
    /// Pages in reading order.
    #[garde(dive, custom(unique_page_numbers))]
    pub pages: Vec<ChapterPage>,
    /// Creation timestamp as sent by the backend (RFC 3339).
    #[garde(skip)]
    pub created_at: String,
}

/// One page of a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, garde::Validate)]
pub struct ChapterPage {
    /// Page id.
    #[garde(skip)]
    pub id: Uuid,
    /// Page number within the chapter.
    #[garde(skip)]
    pub number: i32,
    /// Optional caption.
    #[serde(default)]
    #[garde(skip)]
    pub description: Option<String>,
    /// Where the page image lives.
    #[garde(dive)]
    pub image: ImageMetadata,
}

/// Stored image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, garde::Validate)]
pub struct ImageMetadata {
    /// MIME type, e.g. `image/png`.
    #[garde(custom(not_blank))]
    pub content_type: String,
    /// Storage path of the image.
    #[garde(custom(not_blank))]
    pub path: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn unique_page_numbers(pages: &[ChapterPage], _ctx: &()) -> garde::Result {
    let mut seen = HashSet::with_capacity(pages.len());
    match pages.iter().find(|page| !seen.insert(page.number)) {
        Some(page) => Err(garde::Error::new(format!(
            "duplicate page number {}",
            page.number
        ))),
        None => Ok(()),
    }
}
