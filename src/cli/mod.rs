use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api;
use crate::core::AppConfig;

pub mod messages;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port, overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the guestbook messages as JSON
    Messages {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Load .env if present
    let _ = dotenvy::dotenv();
    api::init_tracing();
    let config = AppConfig::from_env()?;

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Messages {}) => {
            messages::run(config).await?;
        }
        // Hosting platforms start the binary with no arguments
        None => {
            serve::run(String::from("0.0.0.0"), None, config).await?;
        }
    }

    Ok(())
}
