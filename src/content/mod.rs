//! Content module - front-matter parsing, post loading, markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{extract_body, Metadata, Value};
pub use loader::{Fetch, FetchError, HttpFetcher, ManifestEntry, PostLoader};
pub use markdown::MarkdownRenderer;
pub use post::{parse_date_string, Post};
