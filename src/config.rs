//! Bootstrap configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Settings resolved at bootstrap time, before any download starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Pointer resource whose body is the URL of the latest launcher binary.
    pub latest_url: Url,
    /// Directory receiving `<millis>.jar.pack` artifacts and their
    /// transient `.tmp` siblings. Must live on the same volume as the
    /// temp files so the final rename stays atomic.
    pub binaries_dir: PathBuf,
    /// Product name shown in status lines.
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

fn default_product_name() -> String {
    "Launcher".to_string()
}

impl BootstrapConfig {
    /// Read the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
