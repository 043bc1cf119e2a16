//! Reader configuration (blogreader.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "blogreader.toml";

/// Reader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Base URL of the remote storage hosting the blog
    pub base_url: String,

    /// Name of the JSON index manifest under the base URL
    pub index_file: String,

    /// Subdirectory holding the per-post folders
    pub posts_dir: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            index_file: "bloglist.json".to_string(),
            posts_dir: "blogs".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("invalid config file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.index_file, "bloglist.json");
        assert_eq!(config.posts_dir, "blogs");
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://example.com/blog\"").unwrap();

        let config = ReaderConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url, "https://example.com/blog");
        // Unset fields keep their defaults
        assert_eq!(config.index_file, "bloglist.json");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        assert!(ReaderConfig::load(file.path()).is_err());
    }
}
