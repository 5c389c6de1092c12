//! App manifest parsing.
//!
//! The configuration repository describes the environment in a
//! `configuration.toml` at its root:
//!
//! ```toml
//! [[apps]]
//! name = "frontend"
//! repo = "git@example.com:org/frontend.git"
//! branch = "develop"
//! ```
//!
//! `branch` is optional and defaults to `master`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::repos::DEFAULT_BRANCH;

/// Parsed `configuration.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// App repositories to clone and keep updated.
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// One app repository listed in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct AppEntry {
    /// Directory name the app is cloned under.
    pub name: String,
    /// Clone source accepted by `git clone`.
    pub repo: String,
    /// Branch the working copy must be on.
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read app manifest: {}", path.display()))?;

        let manifest: Manifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse app manifest: {}", path.display()))?;

        Ok(manifest)
    }
}
