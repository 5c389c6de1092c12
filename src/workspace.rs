//! Workspace path layout.
//!
//! All state lives underneath a single root directory supplied by the
//! caller; nothing is derived from process-global locations.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File recording which configuration repository this workspace uses.
const CONTEXT_FILE: &str = ".dev-env-context";

/// Directory the configuration repository is checked out into.
const PROJECT_DIR: &str = "dev-env-project";

/// App manifest inside the configuration repository.
const MANIFEST_FILE: &str = "configuration.toml";

/// Assembled compose file inside the configuration repository.
const COMPOSE_FILE: &str = "docker-compose.yml";

/// Directory app repositories are cloned into.
const APPS_DIR: &str = "apps";

/// Filesystem layout of one dev-env workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace { root: root.into() }
    }

    /// Build a workspace from a user-supplied root argument, expanding a
    /// leading tilde.
    pub fn from_arg(raw: &str) -> Result<Self> {
        Ok(Workspace::new(expand_tilde(raw)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the configuration repository choice is persisted.
    pub fn context_file(&self) -> PathBuf {
        self.root.join(CONTEXT_FILE)
    }

    /// Checkout of the configuration repository.
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    /// App manifest inside the configuration checkout.
    pub fn manifest_file(&self) -> PathBuf {
        self.project_dir().join(MANIFEST_FILE)
    }

    /// Compose file driving the container lifecycle commands.
    pub fn compose_file(&self) -> PathBuf {
        self.project_dir().join(COMPOSE_FILE)
    }

    /// Directory that app working copies are cloned into.
    pub fn apps_dir(&self) -> PathBuf {
        self.root.join(APPS_DIR)
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> Result<PathBuf> {
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        if path == "~" {
            Ok(home)
        } else {
            Ok(home.join(&path[2..]))
        }
    } else {
        Ok(PathBuf::from(path))
    }
}
