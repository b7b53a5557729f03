//! CLI entry point for site-content

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-content")]
#[command(version)]
#[command(about = "List the markdown content of a static site", long_about = None)]
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
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (posts, legal)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "site_content=debug,info"
    } else {
        "site_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    match cli.command {
        Commands::List { r#type, json } => {
            let site = site_content::Site::new(&base_dir)?;
            tracing::debug!("Listing {} from {:?}", r#type, site.content_dir);
            site_content::commands::list::run(&site, &r#type, json).await?;
        }

        Commands::Version => {
            println!("site-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
