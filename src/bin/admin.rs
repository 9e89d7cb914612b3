//! CLI administration tool for tinylink.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Look a code up
//! cargo run --bin admin -- resolve aZ3_k9
//!
//! # Count stored mappings
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `CODE_MAX_ATTEMPTS` (optional): codes tried per `shorten` on collision

use tinylink::application::services::UrlStore;
use tinylink::config::{load_code_max_attempts, mask_connection_string};
use tinylink::infrastructure::persistence::{PgUrlRepository, PoolSettings};
use tinylink::utils::code_generator::RandomKeyGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// The URL to shorten
        url: String,
    },

    /// Print the URL stored under a short code
    Resolve {
        /// The short code to look up
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_attempts = load_code_max_attempts()?;

    let repository = PgUrlRepository::connect(&database_url, &PoolSettings::default())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;
    let pool = repository.pool().clone();

    let store = UrlStore::new(
        Arc::new(repository),
        Arc::new(RandomKeyGenerator::new()),
        max_attempts,
    );

    match cli.command {
        Commands::Shorten { url } => shorten(&store, &url).await?,
        Commands::Resolve { code } => resolve(&store, &code).await,
        Commands::Stats => handle_stats(&store).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Creates a mapping and prints its code.
async fn shorten(store: &UrlStore, url: &str) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let code = store
        .put(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("  URL:  {}", url.cyan());
    println!("  Code: {}", code.as_str().bright_yellow().bold());
    println!();

    Ok(())
}

/// Prints the URL stored under a code.
async fn resolve(store: &UrlStore, code: &str) {
    match store.get(code).await {
        Some(url) => {
            println!("  {} -> {}", code.bright_yellow(), url.cyan());
        }
        None => {
            println!("{}", format!("  No mapping for '{}'", code).yellow());
        }
    }
}

/// Displays the number of stored mappings.
async fn handle_stats(store: &UrlStore) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
