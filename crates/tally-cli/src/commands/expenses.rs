//! Expense command implementations (list, add, delete)

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tally_core::db::Database;
use tally_core::models::NewExpense;

use super::{find_user, fmt_money, truncate};

pub fn cmd_expenses_list(db: &Database, username: &str) -> Result<()> {
    let user = find_user(db, username)?;
    let expenses = db.list_expenses_for_user(user.id)?;

    if expenses.is_empty() {
        println!("No expenses recorded for {}.", user.username);
        return Ok(());
    }

    println!();
    println!(
        "{:>5}  {:<10}  {:<14}  {:>12}  Description",
        "ID", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(72));
    for expense in &expenses {
        println!(
            "{:>5}  {:<10}  {} {:<12}  {:>12}  {}",
            expense.id,
            expense.date,
            expense.icon,
            truncate(&expense.category, 12),
            fmt_money(expense.amount),
            truncate(&expense.description, 30)
        );
    }
    println!();
    println!("{} expense(s)", expenses.len());

    Ok(())
}

pub fn cmd_expenses_add(
    db: &Database,
    username: &str,
    category: &str,
    amount: f64,
    description: &str,
    date: Option<&str>,
) -> Result<()> {
    let user = find_user(db, username)?;

    let date = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", d))?,
        None => Local::now().date_naive(),
    };

    let expense = db.create_expense(&NewExpense {
        user_id: user.id,
        category: category.to_string(),
        amount,
        description: description.to_string(),
        date,
    })?;

    println!(
        "✅ Recorded expense #{}: {} {} {} on {}",
        expense.id,
        expense.icon,
        expense.category,
        fmt_money(expense.amount),
        expense.date
    );

    Ok(())
}

pub fn cmd_expenses_delete(db: &Database, id: i64) -> Result<()> {
    if !db.delete_expense(id)? {
        anyhow::bail!("Expense not found: {}", id);
    }

    println!("🗑️  Deleted expense #{}", id);
    Ok(())
}
