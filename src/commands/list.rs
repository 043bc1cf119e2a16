//! List posts, optionally filtered by tag and title search

use anyhow::Result;

use crate::content::HttpFetcher;
use crate::view::{NullCarousel, Session};
use crate::Reader;

pub async fn run(reader: &Reader, tag: Option<&str>, search: Option<&str>, json: bool) -> Result<()> {
    let fetcher = HttpFetcher::new();
    let posts = reader.load_posts(&fetcher).await?;

    let mut session = Session::start(
        posts,
        &reader.config.base_url,
        Box::new(NullCarousel),
        "#list",
    );
    session.set_filters(tag.unwrap_or(""), search.unwrap_or(""));
    let filtered = session.filtered();

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!("Total: {} posts", filtered.len());
    if filtered.is_empty() {
        println!("No blog posts found.");
        return Ok(());
    }

    for post in filtered {
        let tags = if post.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", post.tags.join(", "))
        };
        println!(
            "  {} - {}{}",
            post.date.format("%Y-%m-%d"),
            post.title,
            tags
        );
    }

    Ok(())
}
