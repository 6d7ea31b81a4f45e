//! Expense operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::{parse_date, Database, DATE_FORMAT};
use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseUpdate, NewExpense, FALLBACK_EXPENSE_ICON};

const EXPENSE_COLUMNS: &str = "id, user_id, category, amount, description, date, icon";

fn row_to_expense(row: &Row) -> rusqlite::Result<Expense> {
    let date_str: String = row.get(5)?;
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        date: parse_date(5, &date_str)?,
        icon: row.get(6)?,
    })
}

impl Database {
    /// All expenses for a user, newest first
    ///
    /// No date filtering: the dashboard works on lifetime totals.
    pub fn list_expenses_for_user(&self, user_id: i64) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses WHERE user_id = ? ORDER BY date DESC, id DESC",
            EXPENSE_COLUMNS
        ))?;

        let expenses = stmt
            .query_map(params![user_id], row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(user_id, count = expenses.len(), "Loaded expenses");
        Ok(expenses)
    }

    /// Get a single expense by ID
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let conn = self.conn()?;
        let expense = conn
            .query_row(
                &format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLUMNS),
                params![id],
                row_to_expense,
            )
            .optional()?;

        Ok(expense)
    }

    /// Record a new expense
    ///
    /// The icon comes from the category registry; unknown categories get
    /// the fallback icon rather than being rejected.
    pub fn create_expense(&self, expense: &NewExpense) -> Result<Expense> {
        expense.validate()?;

        if self.get_user(expense.user_id)?.is_none() {
            return Err(Error::NotFound(format!("User {}", expense.user_id)));
        }

        let icon = self.icon_for_category(&expense.category)?;

        let id = {
            let conn = self.conn()?;
            conn.execute(
                "INSERT INTO expenses (user_id, category, amount, description, date, icon)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    expense.user_id,
                    expense.category,
                    expense.amount,
                    expense.description,
                    expense.date.format(DATE_FORMAT).to_string(),
                    icon,
                ],
            )?;
            conn.last_insert_rowid()
        };

        info!(
            expense_id = id,
            user_id = expense.user_id,
            category = %expense.category,
            "Expense recorded"
        );

        self.get_expense(id)?
            .ok_or_else(|| Error::NotFound(format!("Expense {}", id)))
    }

    /// Apply a partial update to an expense
    ///
    /// Returns `None` if the expense does not exist. Changing the category
    /// also refreshes the icon.
    pub fn update_expense(&self, id: i64, update: &ExpenseUpdate) -> Result<Option<Expense>> {
        let Some(mut expense) = self.get_expense(id)? else {
            return Ok(None);
        };

        if let Some(amount) = update.amount {
            if amount.is_nan() || amount <= 0.0 {
                return Err(Error::InvalidData(
                    "Amount must be greater than 0".to_string(),
                ));
            }
            expense.amount = amount;
        }
        if let Some(ref category) = update.category {
            if category.trim().is_empty() {
                return Err(Error::InvalidData("Category cannot be empty".to_string()));
            }
            expense.icon = self.icon_for_category(category)?;
            expense.category = category.clone();
        }
        if let Some(ref description) = update.description {
            if description.trim().is_empty() {
                return Err(Error::InvalidData(
                    "Description cannot be empty".to_string(),
                ));
            }
            expense.description = description.clone();
        }
        if let Some(date) = update.date {
            expense.date = date;
        }

        let conn = self.conn()?;
        conn.execute(
            "UPDATE expenses SET category = ?, amount = ?, description = ?, date = ?, icon = ?
             WHERE id = ?",
            params![
                expense.category,
                expense.amount,
                expense.description,
                expense.date.format(DATE_FORMAT).to_string(),
                expense.icon,
                id,
            ],
        )?;

        info!(expense_id = id, "Expense updated");
        Ok(Some(expense))
    }

    /// Delete an expense; returns false if it did not exist
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;

        if deleted > 0 {
            info!(expense_id = id, "Expense deleted");
        }
        Ok(deleted > 0)
    }

    fn icon_for_category(&self, name: &str) -> Result<String> {
        Ok(self
            .get_category_by_name(name)?
            .map(|c| c.icon)
            .unwrap_or_else(|| FALLBACK_EXPENSE_ICON.to_string()))
    }
}
