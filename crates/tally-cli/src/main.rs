//! Tally CLI - Personal expense tracker
//!
//! Usage:
//!   tally serve --port 3000        Start web server (demo data unless --db is given)
//!   tally dashboard --user john    Show totals, breakdown and insights
//!   tally expenses add ...         Record an expense
//!   tally --db tally.db init       Create a persistent database

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let db_path = cli.db.as_deref();

    match cli.command {
        Commands::Init { demo } => commands::cmd_init(db_path, demo),
        Commands::Serve {
            port,
            host,
            static_dir,
            dev,
        } => commands::cmd_serve(db_path, &host, port, static_dir.as_deref(), dev).await,
        Commands::Dashboard { user } => {
            let db = commands::open_db(db_path)?;
            commands::cmd_dashboard(&db, &user)
        }
        Commands::Expenses { action, user } => {
            let db = commands::open_db(db_path)?;
            match action {
                None => commands::cmd_expenses_list(&db, &user),
                Some(ExpensesAction::List { user }) => commands::cmd_expenses_list(&db, &user),
                Some(ExpensesAction::Add {
                    user,
                    category,
                    amount,
                    description,
                    date,
                }) => commands::cmd_expenses_add(
                    &db,
                    &user,
                    &category,
                    amount,
                    &description,
                    date.as_deref(),
                ),
                Some(ExpensesAction::Delete { id }) => commands::cmd_expenses_delete(&db, id),
            }
        }
        Commands::Categories => {
            let db = commands::open_db(db_path)?;
            commands::cmd_categories(&db)
        }
        Commands::Users => {
            let db = commands::open_db(db_path)?;
            commands::cmd_users(&db)
        }
        Commands::Reset { yes } => commands::cmd_reset(db_path, yes),
    }
}
