//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_reset` - Clear users and expenses

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::Database;
use tracing::debug;

/// Open the database at `db_path`, or a throwaway demo database if no path is given
///
/// Categories are always seeded; the demo users and expenses only go into
/// the throwaway database.
pub fn open_db(db_path: Option<&Path>) -> Result<Database> {
    match db_path {
        Some(path) => {
            let path_str = path
                .to_str()
                .context("Database path must be valid UTF-8")?;
            let db = Database::new(path_str).context("Failed to open database")?;
            db.seed_categories()
                .context("Failed to seed default categories")?;
            debug!(path = %path.display(), "Opened database");
            Ok(db)
        }
        None => {
            let db = Database::in_memory().context("Failed to create throwaway database")?;
            db.seed_demo_data().context("Failed to seed demo data")?;
            debug!(path = db.path(), "Opened throwaway demo database");
            Ok(db)
        }
    }
}

pub fn cmd_init(db_path: Option<&Path>, demo: bool) -> Result<()> {
    let Some(path) = db_path else {
        anyhow::bail!("init needs a database file: tally --db tally.db init");
    };

    println!("🔧 Initializing database at {}...", path.display());

    let db = open_db(Some(path))?;
    let categories = db.list_categories()?;
    println!("   Categories: {}", categories.len());

    if demo {
        db.seed_demo_data().context("Failed to seed demo data")?;
        println!("   Seeded demo users (john / password123, jane / pass456)");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!(
        "  1. Add an expense: tally --db {} expenses add --user john --category Food --amount 250 --description Lunch",
        path.display()
    );
    println!("  2. Start web API: tally --db {} serve", path.display());

    Ok(())
}

/// Remove every user and expense from a database file
pub fn cmd_reset(db_path: Option<&Path>, yes: bool) -> Result<()> {
    use std::io::{self, Write};

    let Some(path) = db_path else {
        anyhow::bail!("reset needs a database file: tally --db tally.db reset");
    };
    if !path.exists() {
        anyhow::bail!("Database not found: {}", path.display());
    }

    if !yes {
        print!("⚠️  This will delete all users and expenses.\n");
        print!("   Categories will be preserved.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = open_db(Some(path))?;
    db.reset()?;

    println!("✅ Database reset complete.");
    println!("   Cleared: users, expenses");
    println!("   Preserved: categories");

    Ok(())
}
