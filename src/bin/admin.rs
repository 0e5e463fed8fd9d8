//! CLI administration tool for alias-shortener.
//!
//! Drives the alias registry directly against the service's SQLite storage,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a URL under a generated alias
//! cargo run --bin admin -- url create https://example.com/a
//!
//! # Register a URL under a chosen alias
//! cargo run --bin admin -- url create https://example.com/a --alias ex1
//!
//! # Look up an alias
//! cargo run --bin admin -- url resolve ex1
//!
//! # Remove an alias
//! cargo run --bin admin -- url delete ex1
//!
//! # Check the storage
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (optional): SQLite database file (default: `./storage/storage.db`)

use alias_shortener::application::services::{AliasRegistry, RegistryError};
use alias_shortener::infrastructure::persistence::{SqliteUrlRepository, connect_pool};
use alias_shortener::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
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
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Register a URL
    Create {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Resolve {
        alias: String,
    },

    /// Remove an alias
    Delete {
        alias: String,

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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path =
        std::env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage/storage.db".to_string());

    let pool = connect_pool(&storage_path, 1)
        .await
        .with_context(|| format!("Failed to open storage at {storage_path}"))?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &storage_path).await?,
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let registry = AliasRegistry::init(repo)
        .await
        .context("Failed to initialize storage schema")?;

    match action {
        UrlAction::Create { url, alias } => create_alias(&registry, url, alias).await?,
        UrlAction::Resolve { alias } => resolve_alias(&registry, &alias).await?,
        UrlAction::Delete { alias, yes } => delete_alias(&registry, &alias, yes).await?,
    }

    Ok(())
}

/// Registers a URL, generating an alias when none is given.
///
/// A collision on a generated alias is reported like any other conflict.
async fn create_alias(registry: &AliasRegistry, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Alias".bright_blue().bold());
    println!();

    if url.is_empty() {
        anyhow::bail!("URL must not be empty");
    }

    let alias = match alias {
        Some(a) if !a.is_empty() => a,
        _ => {
            let generated = generate_alias(DEFAULT_ALIAS_LENGTH);
            println!("{}", "✨ Generated new alias".green());
            generated
        }
    };

    match registry.create(&url, &alias).await {
        Ok(id) => {
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!("  URL:   {}", url.cyan());
            println!("  ID:    {}", id.to_string().bright_black());
            println!();
            println!("{}", "✅ Alias created successfully!".green().bold());
            Ok(())
        }
        Err(RegistryError::AliasExists { alias }) => {
            println!("{}", format!("⚠️  Alias '{alias}' already exists").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create alias: {}", e)),
    }
}

/// Prints the target URL of an alias.
async fn resolve_alias(registry: &AliasRegistry, alias: &str) -> Result<()> {
    match registry.resolve(alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(RegistryError::AliasNotFound { .. }) => {
            println!("{}", format!("⚠️  Alias '{alias}' not found").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve alias: {}", e)),
    }
}

/// Removes an alias after confirmation.
async fn delete_alias(registry: &AliasRegistry, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Alias".bright_blue().bold());
    println!();
    println!("  Alias: {}", alias.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match registry.delete(alias).await {
        Ok(()) => {
            println!("{}", "✅ Alias deleted successfully!".green().bold());
            Ok(())
        }
        Err(RegistryError::AliasNotFound { .. }) => {
            println!("{}", "⚠️  Nothing to delete: alias not found".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to delete alias: {}", e)),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, storage_path: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let tables: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'url'",
            )
            .fetch_one(pool)
            .await?;

            println!("  SQLite:  {}", version.bright_white());
            println!("  File:    {}", storage_path.bright_white());

            if tables > 0 {
                let aliases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                    .fetch_one(pool)
                    .await?;
                println!("  Aliases: {}", aliases.to_string().bright_green().bold());
            } else {
                println!("  Aliases: {}", "schema not created yet".yellow());
            }
            println!();
        }
    }

    Ok(())
}
