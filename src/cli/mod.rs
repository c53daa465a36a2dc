use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod clear;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the chat relay server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "3000")]
        port: String,
    },
    /// Reset the persisted conversation transcript
    Clear {},
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

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Clear {}) => {
            clear::run().await?;
        }
        None => {}
    }

    Ok(())
}
