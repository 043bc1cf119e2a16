//! List the tag vocabulary with usage counts

use anyhow::Result;

use crate::content::HttpFetcher;
use crate::filter;
use crate::Reader;

pub async fn run(reader: &Reader) -> Result<()> {
    let fetcher = HttpFetcher::new();
    let posts = reader.load_posts(&fetcher).await?;

    let counts = filter::tag_counts(&posts);
    println!("Tags ({}):", counts.len());
    for (tag, count) in counts {
        println!("  {} ({})", tag, count);
    }

    Ok(())
}
