//! Show a single post: metadata header, media, rendered body

use anyhow::{bail, Result};

use crate::content::{extract_body, HttpFetcher, MarkdownRenderer};
use crate::view::{Session, TextCarousel, View};
use crate::Reader;

pub async fn run(reader: &Reader, target: &str) -> Result<()> {
    let fetcher = HttpFetcher::new();
    let posts = reader.load_posts(&fetcher).await?;

    let source = match View::from_fragment(target, &posts) {
        View::Post(source) => source,
        // The router falls back to the about view for unknown fragments
        _ => bail!("no post matches '{}'", target),
    };

    let mut session = Session::start(
        posts,
        &reader.config.base_url,
        Box::new(TextCarousel),
        "#list",
    );

    let (title, date, tags, raw) = {
        let post = match session.find_post(&source) {
            Some(post) => post,
            None => bail!("no post matches '{}'", target),
        };
        (
            post.title.clone(),
            post.date,
            post.tags.clone(),
            post.raw.clone(),
        )
    };

    println!("{}", title);
    println!("Date: {}", date.format("%Y-%m-%d"));
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }
    println!();

    // Entering the post view mounts the carousel, which prints the
    // resolved media URLs.
    session.navigate(View::Post(source));

    let renderer = MarkdownRenderer::new();
    let body = extract_body(&raw);
    println!("{}", renderer.render_or_fallback(&body));

    Ok(())
}
