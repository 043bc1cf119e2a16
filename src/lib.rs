//! blogreader: a command-line reader for remotely hosted markdown blogs
//!
//! Fetches a JSON index of posts and their markdown sources from remote
//! storage, parses the front-matter, and drives list and single-post views
//! with tag and title filtering.

pub mod commands;
pub mod config;
pub mod content;
pub mod filter;
pub mod view;

use anyhow::{bail, Result};
use std::path::Path;

use config::{ReaderConfig, CONFIG_FILE};
use content::{Fetch, Post, PostLoader};

/// The reader application
pub struct Reader {
    pub config: ReaderConfig,
}

impl Reader {
    pub fn new(config: ReaderConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            bail!("no base URL configured; pass --base-url or set base_url in {CONFIG_FILE}");
        }
        Ok(Self { config })
    }

    /// Build a reader from an optional config file plus CLI overrides.
    ///
    /// With no explicit path, `blogreader.toml` in the current directory is
    /// used when present.
    pub fn discover(config_path: Option<&Path>, base_url: Option<&str>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => ReaderConfig::load(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    ReaderConfig::load(default_path)?
                } else {
                    ReaderConfig::default()
                }
            }
        };
        if let Some(url) = base_url {
            config.base_url = url.to_string();
        }
        Self::new(config)
    }

    /// Load all posts through the given fetcher
    pub async fn load_posts(&self, fetcher: &dyn Fetch) -> Result<Vec<Post>> {
        PostLoader::new(&self.config, fetcher).load_all().await
    }
}
