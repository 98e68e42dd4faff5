//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use nightvolt_core::logging::WorkerGuard;
use nightvolt_core::{Role, config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "nightvolt")]
#[command(version)]
#[command(about = "NIGHTVOLT artist portal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Authentication endpoint (overrides `auth_url` from config)
    #[arg(long, env = "NIGHTVOLT_AUTH_URL", value_name = "URL", global = true)]
    auth_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in without the interactive client
    Login {
        /// Portal role to sign in as (artist, admin)
        #[arg(long, default_value = "artist")]
        role: Role,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "NIGHTVOLT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and remove the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, auth_url } = cli;

    match command {
        None => {
            let (config, _log_guard) = load_config(auth_url)?;
            commands::interactive::run(&config)
        }
        Some(Commands::Login {
            role,
            email,
            password,
        }) => {
            let (config, _log_guard) = load_config(auth_url)?;
            commands::session::login(&config, role, email, password).await
        }
        Some(Commands::Logout) => {
            let _log_guard = load_config(auth_url)?.1;
            commands::session::logout()
        }
        Some(Commands::Whoami) => {
            let _log_guard = load_config(auth_url)?.1;
            commands::session::whoami();
            Ok(())
        }
        // Config commands never read the config file.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Loads config, applies CLI overrides and starts file logging.
///
/// Keep the returned guard alive until exit so buffered log lines are
/// flushed.
fn load_config(auth_url: Option<String>) -> Result<(config::Config, Option<WorkerGuard>)> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = auth_url {
        config.auth_url = url;
    }

    let guard = match logging::init(&config.log_filter) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };
    Ok((config, guard))
}
