//! Resource resolution
//!
//! A request target is mapped onto a file under the site root and checked
//! exactly once. The resulting [`Resource`] is an immutable value handed to
//! both the header writer and the content streamer, so they always agree on
//! whether the file was found.

use std::path::{Component, Path, PathBuf};

use crate::http::request::Request;

/// Where request targets are resolved.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    /// File served for a target of exactly `/`
    pub default_file: String,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>, default_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_file: default_file.into(),
        }
    }

    /// Maps a request target to a path under the root.
    ///
    /// Returns `None` for targets that would climb out of the root.
    pub fn map_target(&self, target: &str) -> Option<PathBuf> {
        let relative = if target == "/" {
            self.default_file.as_str()
        } else {
            target.trim_start_matches('/')
        };

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }

        Some(self.root.join(relative))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    /// Exists and is a regular file
    Found,
    /// Missing, not a regular file, or never requested
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Resolved path, if a GET target was recognized and allowed
    pub path: Option<PathBuf>,
    pub status: ResourceStatus,
}

impl Resource {
    pub fn missing() -> Self {
        Self {
            path: None,
            status: ResourceStatus::Missing,
        }
    }

    /// Resolves the request against the site and checks the file once.
    pub async fn resolve(request: Option<&Request>, site: &Site) -> Self {
        let Some(request) = request else {
            tracing::debug!("No GET request recognized");
            return Self::missing();
        };

        let Some(path) = site.map_target(&request.path) else {
            tracing::warn!(path = %request.path, "Rejected target outside document root");
            return Self::missing();
        };

        let status = match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => ResourceStatus::Found,
            Ok(_) => ResourceStatus::Missing,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Resource not available");
                ResourceStatus::Missing
            }
        };

        tracing::debug!(path = %path.display(), status = ?status, "Resolved resource");

        Self {
            path: Some(path),
            status,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == ResourceStatus::Found
    }
}
