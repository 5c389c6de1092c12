use anyhow::Result;
use clap::{Parser, Subcommand};

use dev_env::handlers;
use dev_env::logger;
use dev_env::prompt::TerminalPrompter;
use dev_env::runner::SystemRunner;
use dev_env::workspace::Workspace;

#[derive(Parser)]
#[command(name = "dev-env")]
#[command(about = "Bootstrap a local Docker Compose development environment", long_about = None)]
#[command(version)]
struct Cli {
    /// Workspace root holding the dev-env checkout
    #[arg(long, default_value = ".")]
    root: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone or update the configuration repository and all of its apps
    Prep,

    /// Build images and start all containers
    Start,

    /// Stop running containers
    Stop,

    /// Tear down containers and optionally forget the configuration
    Reset,
}

fn main() -> Result<()> {
    logger::init_logger();

    let cli = Cli::parse();
    let workspace = Workspace::from_arg(&cli.root)?;
    let runner = SystemRunner;
    let prompter = TerminalPrompter;

    match cli.command {
        Commands::Prep => handlers::handle_prep(&workspace, &runner, &prompter)?,
        Commands::Start => handlers::handle_start(&workspace, &runner)?,
        Commands::Stop => handlers::handle_stop(&workspace, &runner)?,
        Commands::Reset => handlers::handle_reset(&workspace, &runner, &prompter)?,
    }

    Ok(())
}
