//! Container lifecycle commands: `start`, `stop` and `reset`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

use crate::compose::ComposeDriver;
use crate::context::DevEnvContext;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::workspace::Workspace;

/// Build all images and start the containers.
pub fn handle_start(workspace: &Workspace, runner: &dyn CommandRunner) -> Result<()> {
    let compose = ComposeDriver::new(runner, workspace.compose_file());
    if !compose.has_services() {
        println!("{}", "Nothing to start!".red());
        return Ok(());
    }

    println!("{}", "Building images...".cyan());
    compose
        .build()
        .context("Something went wrong when creating your app images or containers")?;

    println!("{}", "Starting containers...".cyan());
    compose
        .up()
        .context("Something went wrong when creating your app images or containers")?;

    println!("{}", "All done, environment is ready for use".green().bold());
    Ok(())
}

/// Stop running containers. A workspace that never started anything is a
/// quiet no-op.
pub fn handle_stop(workspace: &Workspace, runner: &dyn CommandRunner) -> Result<()> {
    let compose = ComposeDriver::new(runner, workspace.compose_file());
    if compose.has_services() {
        println!("{}", "Stopping apps:".cyan());
        compose.stop()?;
    }
    Ok(())
}

/// Tear down containers, images and volumes, optionally forgetting the
/// configuration repository choice.
pub fn handle_reset(
    workspace: &Workspace,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
) -> Result<()> {
    let keep_config =
        prompter.confirm("Would you like to KEEP your dev-env configuration files?", true)?;

    let compose = ComposeDriver::new(runner, workspace.compose_file());
    if compose.compose_file().exists() {
        compose.down()?;
    } else {
        log::info!(
            "No compose file at {}, skipping container teardown",
            compose.compose_file().display()
        );
    }

    if !keep_config {
        DevEnvContext::delete(&workspace.context_file())?;
        let project_dir = workspace.project_dir();
        if project_dir.exists() {
            fs::remove_dir_all(&project_dir)
                .with_context(|| format!("Failed to remove {}", project_dir.display()))?;
        }
    }

    println!("{}", "Environment reset".green());
    Ok(())
}
