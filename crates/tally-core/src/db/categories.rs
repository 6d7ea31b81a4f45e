//! Category registry operations

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::Category;

impl Database {
    /// List all categories in registry order
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT name, icon, color FROM categories ORDER BY position")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    name: row.get(0)?,
                    icon: row.get(1)?,
                    color: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Get a category by its exact (case-sensitive) name
    pub fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT name, icon, color FROM categories WHERE name = ?",
                params![name],
                |row| {
                    Ok(Category {
                        name: row.get(0)?,
                        icon: row.get(1)?,
                        color: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(category)
    }

    /// Append a category to the end of the registry, ignoring duplicates
    ///
    /// Returns true if the category was added.
    pub fn add_category(&self, category: &Category) -> Result<bool> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "INSERT OR IGNORE INTO categories (position, name, icon, color)
             VALUES ((SELECT COALESCE(MAX(position), 0) + 1 FROM categories), ?, ?, ?)",
            params![category.name, category.icon, category.color],
        )?;

        Ok(changed > 0)
    }
}
