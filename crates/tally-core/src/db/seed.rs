//! Default categories and demo data

use chrono::NaiveDate;
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::{default_categories, NewExpense, NewUser};

/// Demo expenses for the first demo user: (category, amount, description, date)
const DEMO_EXPENSES: &[(&str, f64, &str, (i32, u32, u32))] = &[
    ("Food", 850.0, "Lunch with colleagues", (2024, 1, 15)),
    ("Transport", 350.0, "Uber to meeting", (2024, 1, 15)),
    ("Shopping", 2499.0, "Amazon - headphones", (2024, 1, 14)),
    ("Bills", 5200.0, "Electricity bill", (2024, 1, 14)),
    ("Entertainment", 1200.0, "Movie tickets", (2024, 1, 13)),
    ("Health", 500.0, "Pharmacy", (2024, 1, 13)),
    ("Food", 1200.0, "Restaurant dinner", (2024, 1, 12)),
    ("Food", 3500.0, "Groceries", (2024, 1, 11)),
    ("Transport", 2100.0, "Monthly bus pass", (2024, 1, 10)),
    ("Shopping", 1800.0, "Clothing", (2024, 1, 9)),
];

impl Database {
    /// Seed the default category registry (idempotent)
    pub fn seed_categories(&self) -> Result<usize> {
        let mut added = 0;
        for category in default_categories() {
            if self.add_category(&category)? {
                added += 1;
            }
        }

        if added > 0 {
            info!(count = added, "Seeded categories");
        }
        Ok(added)
    }

    /// Seed the demo users and their expenses (idempotent)
    ///
    /// Does nothing if the first demo user already exists.
    pub fn seed_demo_data(&self) -> Result<()> {
        self.seed_categories()?;

        if self.get_user_by_username("john")?.is_some() {
            return Ok(());
        }

        let john = self.create_user(&NewUser {
            username: "john".to_string(),
            password: "password123".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            income: 60000.0,
        })?;

        if self.get_user_by_username("jane")?.is_none() {
            self.create_user(&NewUser {
                username: "jane".to_string(),
                password: "pass456".to_string(),
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                income: 75000.0,
            })?;
        }

        // Insert oldest first so IDs grow with the date
        for &(category, amount, description, (y, m, d)) in DEMO_EXPENSES.iter().rev() {
            let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
                continue;
            };
            self.create_expense(&NewExpense {
                user_id: john.id,
                category: category.to_string(),
                amount,
                description: description.to_string(),
                date,
            })?;
        }

        info!(
            users = 2,
            expenses = DEMO_EXPENSES.len(),
            "Seeded demo data"
        );
        Ok(())
    }
}
