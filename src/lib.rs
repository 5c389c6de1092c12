//! # dev-env
//!
//! A command-line tool that bootstraps a local, Docker Compose based
//! development environment from a git-hosted configuration repository.
//!
//! ## Overview
//!
//! A workspace remembers which configuration repository it was provisioned
//! from (`.dev-env-context`). `dev-env prep` clones or updates that
//! repository, then clones or updates every app repository listed in its
//! `configuration.toml`. The remaining commands (`start`, `stop`, `reset`)
//! drive the container lifecycle through `docker-compose` against the
//! compose file shipped by the configuration repository.
//!
//! ## Architecture
//!
//! - Path layout and persisted choices ([`workspace`], [`context`])
//! - External tool invocation ([`runner`])
//! - Repository synchronization ([`repos`])
//! - Manifest parsing ([`manifest`])
//! - Container lifecycle ([`compose`])
//! - User interaction and commands ([`prompt`], [`handlers`], [`logger`])

/// Container lifecycle operations driven through `docker-compose`.
pub mod compose;

/// The persisted configuration-repository choice for a workspace.
pub mod context;

/// Command handlers, one per subcommand.
pub mod handlers;

/// Logging configuration.
pub mod logger;

/// Parsing of the app manifest shipped by the configuration repository.
pub mod manifest;

/// Interactive prompting behind an injectable provider, so automation and
/// tests never touch the terminal.
pub mod prompt;

/// Cloning and updating of app repositories.
///
/// An absent working copy is cloned and switched onto its required branch; a
/// present one is fetched when already on that branch and deliberately left
/// alone when it has diverged onto another branch.
pub mod repos;

/// External command execution, abstracted for testability.
pub mod runner;

/// Filesystem layout of a dev-env workspace.
pub mod workspace;
