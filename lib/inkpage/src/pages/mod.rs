//! One loader per page that needs backend data.

mod chapter;
mod home;
mod new_comic;

pub use chapter::{ChapterData, ChapterLoader};
pub use home::{PostsData, PostsLoader};
pub use new_comic::{GenresData, GenresLoader};
