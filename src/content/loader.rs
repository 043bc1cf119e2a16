//! Post loader - fetches the blog index and post sources from remote storage

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::{frontmatter::Metadata, post::parse_date_string, Post};
use crate::config::ReaderConfig;

/// One entry of the blog index manifest (`bloglist.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub folder: String,
    pub file: String,
}

/// Transport-level fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url}: HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("{url}: {message}")]
    Transport { url: String, message: String },
}

/// Fetches text resources by URL
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetch`] implementation over a reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Loads posts listed in the remote index manifest
pub struct PostLoader<'a> {
    config: &'a ReaderConfig,
    fetcher: &'a dyn Fetch,
}

impl<'a> PostLoader<'a> {
    pub fn new(config: &'a ReaderConfig, fetcher: &'a dyn Fetch) -> Self {
        Self { config, fetcher }
    }

    /// URL of the index manifest
    pub fn index_url(&self) -> String {
        format!("{}/{}", self.base(), self.config.index_file)
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn post_url(&self, entry: &ManifestEntry) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base(),
            self.config.posts_dir,
            entry.folder,
            entry.file
        )
    }

    fn source_path(&self, entry: &ManifestEntry) -> String {
        format!("{}/{}", self.config.posts_dir, entry.folder)
    }

    /// Fetch and decode the index manifest. Failure here is fatal to the
    /// whole load.
    pub async fn fetch_manifest(&self) -> Result<Vec<ManifestEntry>> {
        let url = self.index_url();
        let text = self
            .fetcher
            .fetch_text(&url)
            .await
            .with_context(|| format!("failed to load blog index from {url}"))?;
        serde_json::from_str(&text).with_context(|| format!("blog index at {url} is not valid JSON"))
    }

    /// Load all posts, newest first.
    ///
    /// Posts are fetched sequentially in manifest order. A failed fetch or a
    /// post without a usable title and date is skipped, never aborting the
    /// rest of the load.
    pub async fn load_all(&self) -> Result<Vec<Post>> {
        let manifest = self.fetch_manifest().await?;

        let mut posts = Vec::new();
        for entry in &manifest {
            let url = self.post_url(entry);
            let raw = match self.fetcher.fetch_text(&url).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("could not load {}: {}", url, e);
                    continue;
                }
            };

            match self.build_post(entry, raw) {
                Some(post) => posts.push(post),
                None => {
                    tracing::warn!(
                        "skipping {}/{}: missing title or parseable date",
                        entry.folder,
                        entry.file
                    );
                }
            }
        }

        // Sort by date descending (newest first); the sort is stable so
        // equal dates keep manifest order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Build a post record if the text satisfies the inclusion invariant:
    /// a non-empty title and a parseable publish date.
    fn build_post(&self, entry: &ManifestEntry, raw: String) -> Option<Post> {
        let meta = Metadata::parse(&raw);

        let title = meta.title()?.trim().to_string();
        if title.is_empty() {
            return None;
        }
        let date = meta.date().and_then(parse_date_string)?;

        Some(Post {
            title,
            date,
            tags: meta.tags(),
            media: meta.media(),
            source: self.source_path(entry),
            folder: entry.folder.clone(),
            file: entry.file.clone(),
            raw,
        })
    }
}
