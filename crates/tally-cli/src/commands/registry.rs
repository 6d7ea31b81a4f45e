//! Category and user listings

use anyhow::Result;
use tally_core::db::Database;

use super::fmt_money;

pub fn cmd_categories(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;

    println!();
    println!("🏷️  Categories ({})", categories.len());
    for category in &categories {
        println!("   {} {:<16} {}", category.icon, category.name, category.color);
    }
    println!();

    Ok(())
}

pub fn cmd_users(db: &Database) -> Result<()> {
    let users = db.list_users()?;

    if users.is_empty() {
        println!("No users yet.");
        return Ok(());
    }

    println!();
    println!("{:>5}  {:<16}  {:<20}  {:>12}", "ID", "Username", "Name", "Income");
    println!("{}", "─".repeat(60));
    for user in &users {
        println!(
            "{:>5}  {:<16}  {:<20}  {:>12}",
            user.id,
            user.username,
            user.name,
            fmt_money(user.income)
        );
    }
    println!();

    Ok(())
}
