//! Payloads returned by the backend API.
//!
//! Models are typed views used for validation and for page code; page data
//! keeps the JSON the backend sent (see [`crate::Decoded`]).

mod chapter;
mod genre;
mod post;

pub use chapter::{Chapter, ChapterPage, ImageMetadata};
pub use genre::Genre;
pub use post::Post;

/// Rejects empty and whitespace-only text.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn not_blank(value: &str, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        Err(garde::Error::new("must not be blank"))
    } else {
        Ok(())
    }
}
