//! Container lifecycle commands via `docker-compose`.
//!
//! The compose file is an input produced by the configuration repository;
//! this module only drives it.

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::runner::CommandRunner;

/// Driver for one compose file.
pub struct ComposeDriver<'a> {
    runner: &'a dyn CommandRunner,
    compose_file: PathBuf,
}

impl<'a> ComposeDriver<'a> {
    pub fn new(runner: &'a dyn CommandRunner, compose_file: impl Into<PathBuf>) -> Self {
        ComposeDriver {
            runner,
            compose_file: compose_file.into(),
        }
    }

    pub fn compose_file(&self) -> &Path {
        &self.compose_file
    }

    /// Whether the compose file exists and defines anything at all. An empty
    /// file means provisioning never produced services to run.
    pub fn has_services(&self) -> bool {
        fs::metadata(&self.compose_file).map_or(false, |meta| meta.len() > 0)
    }

    /// Build all images. Tries `--parallel` first and falls back to a plain
    /// build for compose versions that do not support the flag.
    pub fn build(&self) -> Result<()> {
        if self.invoke(&["build", "--parallel"])? {
            return Ok(());
        }

        log::warn!("Build command failed. Trying without --parallel");
        if !self.invoke(&["build"])? {
            bail!("docker-compose build failed");
        }
        Ok(())
    }

    /// Start (or recreate) all containers in the background.
    pub fn up(&self) -> Result<()> {
        if !self.invoke(&["up", "--remove-orphans", "-d", "--force-recreate"])? {
            bail!("docker-compose up failed");
        }
        Ok(())
    }

    /// Stop running containers without removing them.
    pub fn stop(&self) -> Result<()> {
        if !self.invoke(&["stop"])? {
            bail!("docker-compose stop failed");
        }
        Ok(())
    }

    /// Tear everything down: containers, images, volumes and orphans.
    pub fn down(&self) -> Result<()> {
        if !self.invoke(&["down", "--rmi", "all", "--volumes", "--remove-orphans"])? {
            bail!("docker-compose down failed");
        }
        Ok(())
    }

    fn invoke(&self, args: &[&str]) -> Result<bool> {
        let file = self.compose_file.to_string_lossy();
        let mut full_args = vec!["-f", &*file];
        full_args.extend_from_slice(args);
        self.runner.run_streaming("docker-compose", &full_args, None)
    }
}
