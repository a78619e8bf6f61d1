//! CLI entry point for stellar-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stellar-rs")]
#[command(version = "0.1.0")]
#[command(about = "A static blog generator backed by a headless content API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files from the content service
    #[command(alias = "g")]
    Generate,

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts known to the content service
    List,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "stellar_rs=debug,info"
    } else {
        "stellar_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let stellar = stellar_rs::Stellar::new(&base_dir)?;
            tracing::info!("Generating static files...");
            stellar.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let stellar = stellar_rs::Stellar::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            stellar.generate().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            stellar_rs::server::start(&stellar, &ip, port).await?;
        }

        Commands::List => {
            let stellar = stellar_rs::Stellar::new(&base_dir)?;
            stellar_rs::commands::list::run(&stellar).await?;
        }

        Commands::Clean => {
            let stellar = stellar_rs::Stellar::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            stellar.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("stellar-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
