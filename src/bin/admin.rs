//! CLI administration tool for url-shortener.
//!
//! Inspects and maintains stored URL mappings without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every stored mapping, newest first
//! cargo run --bin admin -- urls list
//!
//! # Show one mapping without counting a visit
//! cargo run --bin admin -- urls show aB3_x9
//!
//! # Remove legacy records that have no short code
//! cargo run --bin admin -- urls cleanup
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! The database URL is resolved exactly as the server does it: `DATABASE_URL`,
//! then the `DB_*` components, then the local default.

use url_shortener::application::services::AdminService;
use url_shortener::AppError;
use url_shortener::config::{Config, mask_connection_string};
use url_shortener::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
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
    /// Manage stored URLs
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UrlsAction {
    /// List all stored URLs, newest first
    List,

    /// Show a single URL by its short code
    Show {
        /// Short code to look up
        code: String,
    },

    /// Delete records without a short code
    Cleanup {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let database_url = Config::load_database_url();
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let admin = AdminService::new(Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, &admin).await?,
        Commands::Stats => handle_stats(&admin).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    pool.close().await;
    Ok(())
}

async fn handle_urls_action(action: UrlsAction, admin: &AdminService) -> Result<()> {
    match action {
        UrlsAction::List => list_urls(admin).await,
        UrlsAction::Show { code } => show_url(admin, &code).await,
        UrlsAction::Cleanup { yes } => cleanup(admin, yes).await,
    }
}

/// Prints every mapping as a table.
///
/// ```text
/// 🔗 Stored URLs
///
///   ID    Code     Visits   Created            Original URL
///   ──────────────────────────────────────────────────────────────────────
///   2     aB3_x9   4        2025-06-01 10:30   https://example.com/a
/// ```
async fn list_urls(admin: &AdminService) -> Result<()> {
    println!("{}", "🔗 Stored URLs".bright_blue().bold());
    println!();

    let records = admin
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No URLs stored yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<8} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        let code = record.short_code.as_str();
        println!(
            "  {:<5} {:<8} {:<8} {:<18} {}",
            record.id.to_string().bright_black(),
            code.cyan(),
            record.visits.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one mapping; an unknown code is reported, not treated as a failure.
async fn show_url(admin: &AdminService, code: &str) -> Result<()> {
    println!("{}", "🔎 URL Details".bright_blue().bold());
    println!();

    let record = match admin.find_by_code(code).await {
        Ok(record) => record,
        Err(AppError::NotFound(_)) => {
            println!("  {} {}", "No URL with code".yellow(), code.cyan());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to look up URL: {}", e)),
    };

    println!("  ID:       {}", record.id.to_string().bright_black());
    println!("  Code:     {}", record.short_code.cyan());
    println!("  URL:      {}", record.original_url);
    println!(
        "  Visits:   {}",
        record.visits.to_string().bright_green().bold()
    );
    println!(
        "  Created:  {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Deletes legacy records without a short code after confirmation (default: No).
async fn cleanup(admin: &AdminService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Cleanup".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every record without a short code?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = admin
        .cleanup_missing_codes()
        .await
        .map_err(|e| anyhow::anyhow!("Cleanup failed: {}", e))?;

    println!(
        "{} {}",
        "✅ Removed records:".green().bold(),
        removed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays the number of stored URLs and the sum of their visits.
async fn handle_stats(admin: &AdminService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = admin
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  URLs:   {}",
        summary.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Visits: {}",
        summary.total_visits.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
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

            println!(
                "  Connection: {}",
                mask_connection_string(database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
