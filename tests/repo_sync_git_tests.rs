//! Repository synchronization tests against real local git repositories.
//!
//! Local paths are used as clone sources so no network access is needed.
//! Tests skip when git is not installed.

use dev_env::repos::{ensure_synced, RepoRef, SyncAction};
use dev_env::runner::SystemRunner;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a repository with one commit and return its checked-out branch
/// name (master or main depending on the git version).
fn init_origin(dir: &Path) -> String {
    git(dir, &["init"]);
    git(dir, &["config", "user.name", "Dev Env Tests"]);
    git(dir, &["config", "user.email", "dev-env@tests.local"]);
    fs::write(dir.join("README.md"), "origin").unwrap();
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-m", "initial"]);
    git_stdout(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

#[test]
fn absent_path_is_cloned_onto_required_branch() {
    if !git_available() {
        eprintln!("Skipping: git not installed");
        return;
    }

    let origin = TempDir::new().unwrap();
    let branch = init_origin(origin.path());

    let work = TempDir::new().unwrap();
    let target = work.path().join("app");
    let repo = RepoRef::with_branch(origin.path().to_string_lossy(), &target, &branch);

    let action = ensure_synced(&SystemRunner, &repo).unwrap();

    assert_eq!(action, SyncAction::Cloned);
    assert!(target.join(".git").exists());
    assert_eq!(git_stdout(&target, &["rev-parse", "--abbrev-ref", "HEAD"]), branch);
}

#[test]
fn clone_switches_to_tracking_branch_when_default_differs() {
    if !git_available() {
        eprintln!("Skipping: git not installed");
        return;
    }

    let origin = TempDir::new().unwrap();
    init_origin(origin.path());
    git(origin.path(), &["branch", "feature"]);

    let work = TempDir::new().unwrap();
    let target = work.path().join("app");
    let repo = RepoRef::with_branch(origin.path().to_string_lossy(), &target, "feature");

    let action = ensure_synced(&SystemRunner, &repo).unwrap();

    assert_eq!(action, SyncAction::Cloned);
    assert_eq!(git_stdout(&target, &["rev-parse", "--abbrev-ref", "HEAD"]), "feature");
    // The new branch tracks its remote counterpart.
    assert_eq!(
        git_stdout(&target, &["config", "branch.feature.merge"]),
        "refs/heads/feature"
    );
}

#[test]
fn existing_checkout_on_required_branch_fetches_updates() {
    if !git_available() {
        eprintln!("Skipping: git not installed");
        return;
    }

    let origin = TempDir::new().unwrap();
    let branch = init_origin(origin.path());

    let work = TempDir::new().unwrap();
    let target = work.path().join("app");
    let repo = RepoRef::with_branch(origin.path().to_string_lossy(), &target, &branch);

    assert_eq!(ensure_synced(&SystemRunner, &repo).unwrap(), SyncAction::Cloned);

    // Advance the origin after the clone.
    fs::write(origin.path().join("update.txt"), "update").unwrap();
    git(origin.path(), &["add", "-A"]);
    git(origin.path(), &["commit", "-m", "update"]);
    let origin_head = git_stdout(origin.path(), &["rev-parse", "HEAD"]);

    let action = ensure_synced(&SystemRunner, &repo).unwrap();

    assert_eq!(action, SyncAction::Fetched);
    // The remote-tracking ref advanced; the local branch did not move.
    let remote_ref = format!("origin/{branch}");
    assert_eq!(git_stdout(&target, &["rev-parse", &remote_ref]), origin_head);
    assert_ne!(git_stdout(&target, &["rev-parse", "HEAD"]), origin_head);
}

#[test]
fn divergent_checkout_is_left_untouched() {
    if !git_available() {
        eprintln!("Skipping: git not installed");
        return;
    }

    let origin = TempDir::new().unwrap();
    let branch = init_origin(origin.path());

    let work = TempDir::new().unwrap();
    let target = work.path().join("app");
    let repo = RepoRef::with_branch(origin.path().to_string_lossy(), &target, &branch);
    ensure_synced(&SystemRunner, &repo).unwrap();

    // Someone switched the working copy to a local branch.
    git(&target, &["checkout", "-b", "local-work"]);

    let action = ensure_synced(&SystemRunner, &repo).unwrap();

    assert_eq!(action, SyncAction::LeftUntouched);
    assert_eq!(
        git_stdout(&target, &["rev-parse", "--abbrev-ref", "HEAD"]),
        "local-work"
    );
}

#[test]
fn clone_from_nonexistent_source_fails() {
    if !git_available() {
        eprintln!("Skipping: git not installed");
        return;
    }

    let work = TempDir::new().unwrap();
    let target = work.path().join("app");
    let repo = RepoRef::new(
        work.path().join("no-such-origin").to_string_lossy(),
        &target,
    );

    assert!(ensure_synced(&SystemRunner, &repo).is_err());
}
