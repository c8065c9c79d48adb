//! Content module - front-matter parsing and post loading

mod frontmatter;
pub mod loader;
mod summary;

pub use frontmatter::FrontMatter;
pub use summary::{ContentError, PostSummary};
