use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use oncoscan_cli::commands::{self, SubmitArgs};
use oncoscan_cli::config;

/// Submit medical cases to the oncoscan prediction service
#[derive(Parser)]
#[command(name = "oncoscan")]
#[command(version)]
struct Cli {
    /// Prediction service endpoint, overriding the saved one
    #[arg(long, env = "ONCOSCAN_ENDPOINT")]
    endpoint: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new case for analysis
    Submit(SubmitArgs),

    /// Store a session token
    Login {
        #[arg(long, env = "ONCOSCAN_SESSION_TOKEN")]
        token: String,
    },

    /// Forget the stored session token
    Logout,

    /// Inspect or change the saved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the configuration (session token redacted)
    Show,

    /// Change saved settings
    Set {
        /// Prediction service endpoint to save
        #[arg(long)]
        endpoint: Option<String>,

        /// Request timeout in seconds; 0 disables it
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let dir = config::config_dir()?;

    match cli.command {
        Commands::Submit(args) => {
            let mut config = config::load_or_default(&dir)?;
            if let Some(endpoint) = cli.endpoint {
                config.endpoint = endpoint;
            }
            commands::submit(&config, args).await?;
        }
        Commands::Login { token } => commands::login(&dir, token)?,
        Commands::Logout => commands::logout(&dir)?,
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let mut config = config::load_or_default(&dir)?;
                if let Some(endpoint) = cli.endpoint {
                    config.endpoint = endpoint;
                }
                commands::show_config(&config)?;
            }
            ConfigCommands::Set {
                endpoint,
                timeout_secs,
            } => {
                let config = commands::set_config(&dir, endpoint, timeout_secs)?;
                commands::show_config(&config)?;
            }
            ConfigCommands::Reset => commands::reset_config(&dir)?,
        },
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
