//! The `prep` command: provision or refresh the whole workspace.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;

use crate::context::DevEnvContext;
use crate::manifest::Manifest;
use crate::prompt::Prompter;
use crate::repos::{ensure_synced, RepoRef};
use crate::runner::CommandRunner;
use crate::workspace::Workspace;

/// Ensure the context exists, retrieve the configuration repository, then
/// clone or update every app it lists.
pub fn handle_prep(
    workspace: &Workspace,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
) -> Result<()> {
    let context = obtain_context(workspace, prompter)?;
    retrieve_config_repo(workspace, runner, &context)?;
    update_apps(workspace, runner)?;
    Ok(())
}

/// Load the persisted configuration-repository choice, prompting for it on
/// first use.
fn obtain_context(workspace: &Workspace, prompter: &dyn Prompter) -> Result<DevEnvContext> {
    let context_file = workspace.context_file();

    if let Some(context) = DevEnvContext::load(&context_file)? {
        println!();
        println!(
            "{}",
            format!(
                "This dev env has been provisioned to run for the repo: {}",
                context.config_repo_url
            )
            .green()
        );
        return Ok(context);
    }

    let answer =
        prompter.text("Please enter the (Git) url of your dev env configuration repository:")?;
    let context = DevEnvContext::new(answer);
    if context.config_repo_url.is_empty() {
        bail!("No configuration repository was provided");
    }

    context.save(&context_file)?;
    Ok(context)
}

/// Clone the configuration repository, or pull it when already present.
fn retrieve_config_repo(
    workspace: &Workspace,
    runner: &dyn CommandRunner,
    context: &DevEnvContext,
) -> Result<()> {
    println!("{}", "Retrieving custom configuration repo files:".cyan());

    let project_dir = workspace.project_dir();
    let new_project = !project_dir.exists();

    let succeeded = if new_project {
        runner.run_streaming(
            "git",
            &["clone", &context.config_repo_url, &project_dir.to_string_lossy()],
            None,
        )?
    } else {
        runner.run_streaming("git", &["-C", &project_dir.to_string_lossy(), "pull"], None)?
    };

    if !succeeded {
        if new_project {
            // A bad first answer must not wedge the workspace: forget the
            // context and any half-finished clone so the next run re-prompts.
            DevEnvContext::delete(&workspace.context_file())?;
            if project_dir.exists() {
                fs::remove_dir_all(&project_dir).with_context(|| {
                    format!("Failed to remove {}", project_dir.display())
                })?;
            }
        }
        bail!("Failed to retrieve the dev env configuration repository");
    }

    Ok(())
}

/// Clone or update every app listed in the manifest. All apps are attempted;
/// failures are reported together at the end.
fn update_apps(workspace: &Workspace, runner: &dyn CommandRunner) -> Result<()> {
    println!("{}", "Updating apps:".cyan());

    let manifest = Manifest::load(&workspace.manifest_file())?;
    if manifest.apps.is_empty() {
        println!("  {}", "The configuration repository lists no apps".yellow());
        return Ok(());
    }

    let apps_dir = workspace.apps_dir();
    fs::create_dir_all(&apps_dir)
        .with_context(|| format!("Failed to create apps directory: {}", apps_dir.display()))?;

    let mut failed = Vec::new();
    for app in &manifest.apps {
        let repo = RepoRef::with_branch(&app.repo, apps_dir.join(&app.name), &app.branch);
        match ensure_synced(runner, &repo) {
            Ok(action) => {
                println!("  {} {}", app.name.green(), action);
            }
            Err(err) => {
                log::error!("{}: {err:#}", app.name);
                println!("  {} failed to sync", app.name.red());
                failed.push(app.name.clone());
            }
        }
    }

    if !failed.is_empty() {
        bail!("Failed to sync {} app(s): {}", failed.len(), failed.join(", "));
    }

    Ok(())
}
