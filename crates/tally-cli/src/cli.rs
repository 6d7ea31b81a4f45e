//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track expenses and get budgeting insights
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal expense tracker with a rule-based insight engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    ///
    /// When omitted, a throwaway database seeded with demo data is used
    /// and nothing is persisted.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database with the default categories
    Init {
        /// Also create the demo users and expenses
        #[arg(long)]
        demo: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on (falls back to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., frontend/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Development mode: include internal error details in responses
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        #[arg(long)]
        dev: bool,
    },

    /// Show a user's dashboard with insights
    Dashboard {
        /// Username
        #[arg(short, long, default_value = "john")]
        user: String,
    },

    /// Manage expenses
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,

        /// Username (for the default list action)
        #[arg(short, long, default_value = "john")]
        user: String,
    },

    /// List categories
    Categories,

    /// List users
    Users,

    /// Clear all users and expenses, keeping the category registry
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List a user's expenses, newest first
    List {
        /// Username
        #[arg(short, long, default_value = "john")]
        user: String,
    },

    /// Record a new expense
    Add {
        /// Username
        #[arg(short, long)]
        user: String,

        /// Category name (e.g., Food)
        #[arg(short, long)]
        category: String,

        /// Amount (must be greater than 0)
        #[arg(short, long)]
        amount: f64,

        /// Description
        #[arg(short, long)]
        description: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID
        id: i64,
    },
}
