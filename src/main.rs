//! `social` CLI - browse, post and manage media on a Simple Social server

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::Context;

#[derive(Parser)]
#[command(name = "social")]
#[command(about = "Command-line client for the Simple Social media feed")]
#[command(version)]
struct Cli {
    /// API base URL (overrides config file and SOCIAL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file holding the login token
    #[arg(long, global = true, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and save the session token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the saved session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Show the feed, newest first
    Feed {
        /// Print raw JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Upload an image or video as a new post
    Upload {
        /// Media file to upload
        file: PathBuf,

        /// Caption for the post
        #[arg(short, long, default_value = "")]
        caption: String,
    },

    /// Delete one of your posts
    Delete {
        /// Post id (shown on your cards in the feed)
        post_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Build an ImageKit transformation URL (offline)
    Url {
        /// Original media URL (https://host/tenant/path...)
        url: String,

        /// Explicit transformation, e.g. "w-400,h-200"
        #[arg(short = 't', long, default_value = "")]
        transform: String,

        /// Caption to overlay; replaces --transform
        #[arg(short, long)]
        caption: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let ctx = Context::new(cli.api_url, cli.session)?;

    match cli.command {
        Commands::Login { email, password } => {
            cmd::auth::cmd_login(&ctx, &email, password).await?;
        }
        Commands::Register { email, password } => {
            cmd::auth::cmd_register(&ctx, &email, password).await?;
        }
        Commands::Logout => {
            cmd::auth::cmd_logout(&ctx)?;
        }
        Commands::Whoami => {
            cmd::auth::cmd_whoami(&ctx).await?;
        }
        Commands::Feed { json } => {
            cmd::feed::cmd_feed(&ctx, json).await?;
        }
        Commands::Upload { file, caption } => {
            cmd::upload::cmd_upload(&ctx, &file, &caption).await?;
        }
        Commands::Delete { post_id, yes } => {
            cmd::delete::cmd_delete(&ctx, &post_id, yes).await?;
        }
        Commands::Url {
            url,
            transform,
            caption,
        } => {
            cmd::transform::cmd_url(&url, &transform, caption.as_deref());
        }
    }

    Ok(())
}
