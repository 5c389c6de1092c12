//! External command execution.
//!
//! Every interaction with `git` and `docker-compose` goes through the
//! [`CommandRunner`] trait so that command dispatch can be exercised in tests
//! with a scripted fake instead of a live toolchain.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of a single subprocess invocation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
}

/// Abstraction over invoking external tools.
pub trait CommandRunner {
    /// Run a command and capture its stdout. Stderr is left attached to the
    /// terminal so progress output (clone/fetch counters) stays visible.
    fn run(&self, program: &str, args: &[&str], dir: Option<&Path>) -> Result<RunOutput>;

    /// Run a command with stdout and stderr streamed straight through to the
    /// terminal. Used for long-running commands whose output the user should
    /// watch (image builds, container startup).
    fn run_streaming(&self, program: &str, args: &[&str], dir: Option<&Path>) -> Result<bool>;
}

/// Runner backed by real subprocesses.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], dir: Option<&Path>) -> Result<RunOutput> {
        let mut command = Command::new(program);
        command.args(args).stderr(Stdio::inherit());
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .with_context(|| format!("Failed to run '{} {}'", program, args.join(" ")))?;

        Ok(RunOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }

    fn run_streaming(&self, program: &str, args: &[&str], dir: Option<&Path>) -> Result<bool> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run '{} {}'", program, args.join(" ")))?;

        Ok(status.success())
    }
}
