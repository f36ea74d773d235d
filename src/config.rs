//! Server configuration
//!
//! Values come from environment variables, optionally layered over a YAML
//! file. The per-connection core never reads this directly; it receives a
//! [`Site`] built from it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

use crate::http::resource::Site;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ROOT: &str = ".";

/// Resource served for a request target of exactly `/`.
pub const DEFAULT_FILE: &str = "text.html";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory request targets are resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_file")]
    pub default_file: String,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            root: default_root(),
            default_file: default_file(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `LISTEN`, `WEB_ROOT` and `DEFAULT_FILE`.
    pub fn load() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Invalid YAML configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var("LISTEN") {
            self.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("WEB_ROOT") {
            self.root = PathBuf::from(root);
        }
        if let Ok(file) = std::env::var("DEFAULT_FILE") {
            self.default_file = file;
        }
        self
    }

    /// Builds the site the connections resolve against.
    ///
    /// `default_file` must be a non-empty path relative to `root`.
    pub fn site(&self) -> Result<Site> {
        let default_file = Path::new(&self.default_file);
        let relative = default_file
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if self.default_file.is_empty() || !relative {
            anyhow::bail!(
                "default_file must be a relative path inside the document root, got {:?}",
                self.default_file
            );
        }

        Ok(Site::new(self.root.clone(), self.default_file.clone()))
    }
}
