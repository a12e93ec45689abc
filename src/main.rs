use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::probe::ProbeArgs;

#[derive(Parser)]
#[command(name = "kambio-ops")]
#[command(about = "Deployment and API validation tooling for the Kambio conversion service")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push KEY=VALUE pairs from a local env file to the Railway project
    Vars {
        /// Path to the env file
        #[arg(long, default_value = ".env.railway")]
        file: PathBuf,

        /// Railway CLI binary to invoke
        #[arg(long, default_value = "railway")]
        railway_bin: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Run the validation battery against the conversion API
    Probe {
        /// Base URL of the API under test
        #[arg(long, default_value = "http://localhost:3000/api/v1")]
        base_url: String,

        /// Login email used to obtain the bearer token
        #[arg(long, default_value = "demo@example.com")]
        email: String,

        /// Login password
        #[arg(long, default_value = "demo")]
        password: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,

        /// Maximum characters of an unparsable response body to report
        #[arg(long, default_value_t = 100)]
        body_preview: usize,

        /// TOML file with scenarios to run instead of the built-in battery
        #[arg(long)]
        scenarios: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Vars {
            file,
            railway_bin,
            yes,
        } => {
            cli::vars::vars_command(&file, &railway_bin, yes)?;
        }
        Commands::Probe {
            base_url,
            email,
            password,
            timeout_secs,
            body_preview,
            scenarios,
        } => {
            cli::probe::probe_command(ProbeArgs {
                base_url,
                email,
                password,
                timeout_secs,
                body_preview,
                scenarios,
            })?;
        }
    }

    Ok(())
}
