//! Dashboard command implementation

use anyhow::Result;
use tally_core::db::Database;
use tally_core::Dashboard;

use super::{find_user, fmt_money, truncate};

pub fn cmd_dashboard(db: &Database, username: &str) -> Result<()> {
    let user = find_user(db, username)?;
    let result = Dashboard::new(db, db).build(&user)?;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Tally Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  User:            {} ({})", user.name, user.username);
    println!("  Income:          {}", fmt_money(result.income));
    println!("  Spent:           {}", fmt_money(result.total_spent));
    println!("  Budget Left:     {}", fmt_money(result.budget_left));
    println!("  Savings Rate:    {:.1}%", result.savings_rate);
    println!("  Emergency Fund:  {}", fmt_money(result.emergency_fund_target));
    println!("  Transactions:    {}", result.total_expenses);

    if !result.category_breakdown.is_empty() {
        println!();
        println!("  📊 Spending by Category");
        for entry in &result.category_breakdown {
            println!(
                "     {} {:<14} {:>12}  {:>5.1}%  ({} txn)",
                entry.icon,
                truncate(&entry.category, 14),
                fmt_money(entry.amount),
                entry.percentage,
                entry.transaction_count
            );
        }
    }

    if !result.insights.is_empty() {
        println!();
        println!("  💡 Insights");
        for insight in &result.insights {
            println!();
            println!("     {} {} [{}]", insight.icon, insight.title, insight.kind);
            println!("        {}", insight.message);
            println!("        → {}", insight.suggestion);
        }
    }
    println!();

    Ok(())
}
