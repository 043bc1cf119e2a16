//! Tag and title filtering over the loaded post collection

use std::collections::{BTreeSet, HashMap};

use crate::content::Post;

/// The distinct tag vocabulary of a post collection: flattened,
/// deduplicated, empty tags dropped, sorted lexicographically.
pub fn vocabulary(posts: &[Post]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for post in posts {
        for tag in &post.tags {
            if !tag.is_empty() {
                tags.insert(tag.clone());
            }
        }
    }
    tags.into_iter().collect()
}

/// Indices of the posts matching a tag and a free-text title query.
///
/// An empty tag or query matches everything; the query is compared
/// case-insensitively as a substring of the title. Input order is preserved.
pub fn select(posts: &[Post], tag: &str, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| {
            let matches_tag = tag.is_empty() || post.tags.iter().any(|t| t == tag);
            let matches_query = query.is_empty() || post.title.to_lowercase().contains(&query);
            matches_tag && matches_query
        })
        .map(|(i, _)| i)
        .collect()
}

/// Tag usage counts, most used first
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            if !tag.is_empty() {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
