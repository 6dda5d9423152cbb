//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Manage distrobox containers from the command line
#[derive(Parser)]
#[command(
    name = "boxbuddy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logs and extra detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List boxes
    List,

    /// Create a box
    Create(commands::CreateArgs),

    /// Remove a box
    Delete(commands::DeleteArgs),

    /// Open a terminal inside a box
    Enter(commands::BoxArgs),

    /// Upgrade a box's packages in a terminal
    Upgrade(commands::BoxArgs),

    /// Manage applications installed in a box
    #[command(subcommand)]
    Apps(commands::apps::AppsCommand),

    /// List base images available for new boxes
    Images(commands::ImagesArgs),

    /// Diagnose issues
    Doctor,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose,
            command,
        } = self;

        let yes = matches!(&command, Command::Delete(args) if args.yes);
        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
                verbose,
            },
            behaviour: BehaviourFlags { yes },
        });

        match command {
            Command::List => commands::list::run(&app).await,
            Command::Create(args) => commands::create::run(&app, &args).await,
            Command::Delete(args) => commands::delete::run(&app, &args).await,
            Command::Enter(args) => commands::enter::run(&app, &args).await,
            Command::Upgrade(args) => commands::upgrade::run(&app, &args).await,
            Command::Apps(cmd) => commands::apps::run(&app, cmd).await,
            Command::Images(args) => commands::images::run(&app, &args).await,
            Command::Doctor => commands::doctor::run(&app).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => {
                commands::version::run(json);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
