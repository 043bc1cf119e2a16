//! CLI entry point for blogreader

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogreader")]
#[command(version)]
#[command(about = "A command-line reader for remotely hosted markdown blogs", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to ./blogreader.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the blog storage (overrides the config file)
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only posts whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print the matching posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tag vocabulary with usage counts
    Tags,

    /// Show a single post
    Show {
        /// Post source path or folder name
        post: String,
    },

    /// Verify the blog index is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogreader=debug,info"
    } else {
        "blogreader=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let reader = blogreader::Reader::discover(cli.config.as_deref(), cli.base_url.as_deref())?;

    match cli.command {
        Commands::List { tag, search, json } => {
            blogreader::commands::list::run(&reader, tag.as_deref(), search.as_deref(), json)
                .await?;
        }

        Commands::Tags => {
            blogreader::commands::tags::run(&reader).await?;
        }

        Commands::Show { post } => {
            blogreader::commands::show::run(&reader, &post).await?;
        }

        Commands::Check => {
            blogreader::commands::check::run(&reader).await?;
        }
    }

    Ok(())
}
