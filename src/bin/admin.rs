//! CLI administration tool for husky-flight-search.
//!
//! Manage stored searches and inspect the provider catalog without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print the provider catalog
//! cargo run --bin husky-admin -- providers
//!
//! # Record a search (prompts for missing origin/destination)
//! cargo run --bin husky-admin -- searches add --origin JFK --destination LHR --cabin business
//!
//! # List, inspect and delete searches
//! cargo run --bin husky-admin -- searches list --limit 20
//! cargo run --bin husky-admin -- searches show 12
//! cargo run --bin husky-admin -- searches delete 12
//!
//! # Check database connection
//! cargo run --bin husky-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for everything except `providers`): PostgreSQL connection string

use husky::application::services::SearchService;
use husky::domain::catalog;
use husky::domain::entities::{Search, SearchDraft};
use husky::infrastructure::persistence::PgSearchRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

type PgSearchService = SearchService<PgSearchRepository>;

/// CLI tool for managing husky-flight-search.
#[derive(Parser)]
#[command(name = "husky-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Print the provider catalog
    Providers,

    /// Manage stored searches
    Searches {
        #[command(subcommand)]
        action: SearchAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Search management subcommands.
#[derive(Subcommand)]
enum SearchAction {
    /// Record a new search
    Add {
        #[arg(short, long)]
        origin: Option<String>,

        #[arg(short, long)]
        destination: Option<String>,

        /// First departure date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last departure date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        #[arg(short, long)]
        cabin: Option<String>,

        #[arg(short, long)]
        passengers: Option<u32>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List recent searches
    List {
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },

    /// Show a search with its link-outs
    Show { id: i64 },

    /// Delete a search
    Delete {
        id: i64,

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

    match cli.command {
        Commands::Providers => print_providers(),
        Commands::Searches { action } => {
            let pool = connect().await?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;
            let service = SearchService::new(Arc::new(PgSearchRepository::new(Arc::new(pool))));
            handle_search_action(action, &service).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Prints every provider in catalog order.
fn print_providers() {
    println!("{}", "✈️  Providers".bright_blue().bold());
    println!();

    for provider in catalog::list() {
        println!(
            "  {:<10} {:<22} {:<14} {}",
            provider.id.bright_black(),
            provider.name.cyan(),
            provider.region,
            provider.url.bright_white()
        );
        println!("  {:<10} {}", "", provider.note.bright_black());
    }

    println!();
    println!(
        "  Total: {}",
        catalog::list().len().to_string().bright_white().bold()
    );
    println!();
}

/// Dispatches search management commands.
async fn handle_search_action(action: SearchAction, service: &PgSearchService) -> Result<()> {
    match action {
        SearchAction::Add {
            origin,
            destination,
            from,
            until,
            cabin,
            passengers,
            notes,
        } => {
            let draft = SearchDraft {
                origin: Some(prompt_if_missing(origin, "Origin")?),
                destination: Some(prompt_if_missing(destination, "Destination")?),
                depart_start: from,
                depart_end: until,
                cabin,
                passengers,
                notes,
            };
            add_search(service, draft).await?;
        }
        SearchAction::List { limit } => list_searches(service, limit).await?,
        SearchAction::Show { id } => show_search(service, id).await?,
        SearchAction::Delete { id, yes } => delete_search(service, id, yes).await?,
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

async fn add_search(service: &PgSearchService, draft: SearchDraft) -> Result<()> {
    let search = service
        .create_search(draft)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to record search: {}", e))?;

    println!("{}", "✅ Search recorded".green().bold());
    println!();
    print_search_with_links(service, &search);

    Ok(())
}

async fn list_searches(service: &PgSearchService, limit: i64) -> Result<()> {
    println!("{}", "🔎 Recent Searches".bright_blue().bold());
    println!();

    let searches = service
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if searches.is_empty() {
        println!("{}", "  No searches found".yellow());
        println!();
        return Ok(());
    }

    for search in &searches {
        println!(
            "  {:<5} {:<16} {:<24} {:<16} x{:<3} {}",
            search.id.to_string().bright_black(),
            search.route().cyan(),
            search.date_window(),
            search.cabin,
            search.passengers,
            search
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        searches.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_search(service: &PgSearchService, id: i64) -> Result<()> {
    let search = service
        .get_search(id)
        .await
        .map_err(|e| anyhow::anyhow!("{} (id {})", e, id))?;

    print_search_with_links(service, &search);
    Ok(())
}

fn print_search_with_links(service: &PgSearchService, search: &Search) {
    println!("  {}", search.route().bright_white().bold());
    println!("  ID:         {}", search.id.to_string().bright_black());
    println!("  Dates:      {}", search.date_window());
    println!("  Cabin:      {}", search.cabin);
    println!("  Passengers: {}", search.passengers);
    if let Some(ref notes) = search.notes {
        println!("  Notes:      {}", notes);
    }
    println!();

    let links = service.links_for(search);
    if let Some(first) = links.first() {
        println!("  Hint: {}", first.hint.bright_yellow());
        println!();
    }

    for link in &links {
        println!("  {:<22} {}", link.provider.name.cyan(), link.url);
    }
    println!();
}

/// Deletes a search after confirmation (default: No).
async fn delete_search(service: &PgSearchService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Search".bright_blue().bold());
    println!();

    let search = service
        .get_search(id)
        .await
        .map_err(|e| anyhow::anyhow!("{} (id {})", e, id))?;

    println!("  Search: {}", search.route().cyan());
    println!("  ID:     {}", search.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this search?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_search(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete search: {}", e))?;

    println!("{}", "✅ Search deleted".green().bold());
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

            let searches: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM searches")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!(
                "  Searches:   {}",
                searches.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
