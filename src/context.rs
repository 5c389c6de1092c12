//! Persisted configuration-repository choice.
//!
//! The context file holds the raw clone source string, so provisioning only
//! prompts once per workspace.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The provisioned configuration repository for a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevEnvContext {
    /// Clone source of the configuration repository (URL or local path).
    pub config_repo_url: String,
}

impl DevEnvContext {
    pub fn new(config_repo_url: impl Into<String>) -> Self {
        DevEnvContext {
            config_repo_url: config_repo_url.into().trim().to_string(),
        }
    }

    /// Load the context, returning `None` when the workspace has not been
    /// provisioned yet.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file: {}", path.display()))?;

        Ok(Some(DevEnvContext::new(content)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.config_repo_url)
            .with_context(|| format!("Failed to write context file: {}", path.display()))?;
        Ok(())
    }

    /// Remove the context file if present.
    pub fn delete(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to delete context file: {}", path.display()))?;
        }
        Ok(())
    }
}
