//! Cloning and updating of app repositories.
//!
//! The decision procedure: an absent path is cloned and switched onto the
//! required branch; a present path is fetched when it is already on the
//! required branch, and deliberately left alone when it is not. Local
//! divergence is never overwritten.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::runner::CommandRunner;

/// Branch assumed when an app does not name one.
pub const DEFAULT_BRANCH: &str = "master";

/// A remote repository and where its working copy lives.
#[derive(Debug, Clone)]
pub struct RepoRef {
    /// Clone source accepted by `git clone` (URL or local path).
    pub url: String,
    /// Working copy location.
    pub local_path: PathBuf,
    /// Branch the working copy is expected to be on.
    pub branch: String,
}

impl RepoRef {
    pub fn new(url: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        Self::with_branch(url, local_path, DEFAULT_BRANCH)
    }

    pub fn with_branch(
        url: impl Into<String>,
        local_path: impl Into<PathBuf>,
        branch: impl Into<String>,
    ) -> Self {
        RepoRef {
            url: url.into(),
            local_path: local_path.into(),
            branch: branch.into(),
        }
    }
}

/// Which decision [`ensure_synced`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Fresh clone, checked out on the required branch.
    Cloned,
    /// Existing working copy on the required branch; remote refs updated.
    Fetched,
    /// Working copy is on a different branch and was not touched.
    LeftUntouched,
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncAction::Cloned => write!(f, "cloned"),
            SyncAction::Fetched => write!(f, "fetched"),
            SyncAction::LeftUntouched => write!(f, "left untouched"),
        }
    }
}

/// Ensure `repo.local_path` holds a working copy of `repo.url`.
///
/// Any subprocess failure surfaces as an error; there are no retries and no
/// distinction between failure causes. A path that exists but is not a git
/// working copy is not handled specially; the branch query simply fails.
pub fn ensure_synced(runner: &dyn CommandRunner, repo: &RepoRef) -> Result<SyncAction> {
    if !repo.local_path.exists() {
        clone_and_track(runner, repo)?;
        return Ok(SyncAction::Cloned);
    }

    let current = current_branch(runner, &repo.local_path)?;
    if current != repo.branch {
        log::warn!(
            "current branch '{}' differs from required branch '{}' in {}, not updating",
            current,
            repo.branch,
            repo.local_path.display()
        );
        return Ok(SyncAction::LeftUntouched);
    }

    fetch_updates(runner, &repo.local_path)?;
    Ok(SyncAction::Fetched)
}

/// Clone `repo.url` and make sure the checkout is on the required branch,
/// creating a tracking branch when the clone's default differs. A failed
/// clone returns immediately without inspecting the checkout.
fn clone_and_track(runner: &dyn CommandRunner, repo: &RepoRef) -> Result<()> {
    let path = repo.local_path.to_string_lossy();

    let clone = runner.run("git", &["clone", &repo.url, &path], None)?;
    if !clone.success {
        bail!("'git clone {}' failed", repo.url);
    }

    let current = current_branch(runner, &repo.local_path)?;
    if current != repo.branch {
        let track = format!("origin/{}", repo.branch);
        let checkout = runner.run("git", &["-C", &path, "checkout", "--track", &track], None)?;
        if !checkout.success {
            bail!(
                "failed to check out tracking branch '{}' in {}",
                track,
                repo.local_path.display()
            );
        }
    }

    Ok(())
}

/// Name of the branch currently checked out at `path`.
fn current_branch(runner: &dyn CommandRunner, path: &Path) -> Result<String> {
    let path_arg = path.to_string_lossy();
    let output = runner.run(
        "git",
        &["-C", &path_arg, "rev-parse", "--abbrev-ref", "HEAD"],
        None,
    )?;
    if !output.success {
        bail!("failed to read current branch in {}", path.display());
    }
    Ok(output.stdout.trim().to_string())
}

/// Update remote-tracking refs for `origin` without moving the local branch.
fn fetch_updates(runner: &dyn CommandRunner, path: &Path) -> Result<()> {
    let path_arg = path.to_string_lossy();
    let fetch = runner.run("git", &["-C", &path_arg, "fetch", "origin"], None)?;
    if !fetch.success {
        bail!("'git fetch origin' failed in {}", path.display());
    }
    Ok(())
}
