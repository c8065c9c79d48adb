//! CLI entry point for pubpage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pubpage")]
#[command(version)]
#[command(about = "Static generator for a personal site's publications page", long_about = None)]
struct Cli {
    /// Set the site base directory (defaults to current directory)
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
    /// Generate the publications page
    #[command(alias = "g")]
    Generate,

    /// Start a local server over the generated output
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List loaded content per category
    List,

    /// Clean the public folder
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pubpage=debug,info"
    } else {
        "pubpage=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory; the only place the working directory enters
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = pubpage::Site::new(&base_dir)?;

    match cli.command {
        Commands::Generate => {
            tracing::info!("Generating publications page...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip } => {
            tracing::info!("Generating publications page...");
            site.generate()?;
            pubpage::server::start(&site, &ip, port).await?;
        }

        Commands::List => {
            pubpage::commands::list::run(&site)?;
        }

        Commands::Clean => {
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
