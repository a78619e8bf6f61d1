//! Content models: posts, rich text, and reading time

pub mod post;
pub mod readtime;
pub mod richtext;

pub use post::{ContentBlock, PostDetail, PostSummary};
pub use richtext::RichText;
