//! Verify the blog index manifest is reachable and well-formed

use anyhow::Result;

use crate::content::{HttpFetcher, PostLoader};
use crate::Reader;

pub async fn run(reader: &Reader) -> Result<()> {
    let fetcher = HttpFetcher::new();
    let loader = PostLoader::new(&reader.config, &fetcher);

    let manifest = loader.fetch_manifest().await?;
    println!(
        "Blog index at {} is reachable ({} entries)",
        loader.index_url(),
        manifest.len()
    );

    Ok(())
}
