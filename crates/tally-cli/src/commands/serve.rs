//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use super::open_db;

/// Port used when neither --port nor $PORT is set
pub const DEFAULT_PORT: u16 = 3000;

/// Pick the listening port: --port, then $PORT, then the default
pub fn resolve_port(flag: Option<u16>, env: Option<&str>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value)),
        None => Ok(DEFAULT_PORT),
    }
}

pub async fn cmd_serve(
    db_path: Option<&Path>,
    host: &str,
    port: Option<u16>,
    static_dir: Option<&Path>,
    dev: bool,
) -> Result<()> {
    let port = resolve_port(port, std::env::var("PORT").ok().as_deref())?;

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins_str = std::env::var("TALLY_ALLOWED_ORIGINS").unwrap_or_default();
    let allowed_origins = tally_server::parse_allowed_origins(&allowed_origins_str);

    println!("🚀 Starting Tally web server...");
    match db_path {
        Some(path) => println!("   Database: {}", path.display()),
        None => {
            println!("   Database: (throwaway, demo data)");
            println!("   Demo login: john / password123");
        }
    }
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {} (TALLY_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    if dev {
        println!();
        println!("   ⚠️  Development mode - error details are exposed!");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;

    let config = tally_server::ServerConfig {
        allowed_origins,
        expose_errors: dev,
        ..Default::default()
    };

    let static_dir_str = match static_dir {
        Some(p) => Some(p.to_str().context("static_dir path must be valid UTF-8")?),
        None => None,
    };
    tally_server::serve_with_config(db, host, port, static_dir_str, config).await?;

    Ok(())
}
