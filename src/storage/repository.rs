use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use crate::domain::{
    Category, CategoryId, CategoryTotal, Cents, ExpenseId, ExpenseRecord, Month,
};

/// ISO storage format for dates. Sorts lexicographically in date order,
/// which the listing ORDER BY and the monthly range filter rely on.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository for persisting and querying categories and expenses.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    /// Creates the database file if the URL asks for it (`mode=rwc`).
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations. Every statement is CREATE IF NOT EXISTS,
    /// so this is safe to run on every startup.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(super::MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Seed categories by name, skipping any that already exist.
    pub async fn seed_categories(&self, names: &[&str]) -> Result<()> {
        for name in names {
            sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES (?)")
                .bind(name)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Failed to seed category '{}'", name))?;
        }
        Ok(())
    }

    // ========================
    // Category operations
    // ========================

    /// Insert a new category and return its generated id.
    /// The caller is expected to have checked for duplicates.
    pub async fn insert_category(&self, name: &str) -> Result<CategoryId> {
        let row = sqlx::query("INSERT INTO categories (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .context("Failed to insert category")?;
        Ok(row.get("id"))
    }

    /// Get a category by id.
    pub async fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch category")?;

        Ok(row.map(|row| Self::row_to_category(&row)))
    }

    /// Get a category by exact name (case-sensitive).
    pub async fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch category by name")?;

        Ok(row.map(|row| Self::row_to_category(&row)))
    }

    /// List all categories in insertion order.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list categories")?;

        Ok(rows.iter().map(Self::row_to_category).collect())
    }

    fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> Category {
        Category {
            id: row.get("id"),
            name: row.get("name"),
        }
    }

    // ========================
    // Expense operations
    // ========================

    /// Insert a new expense and return its generated id.
    pub async fn insert_expense(
        &self,
        amount_cents: Cents,
        category_id: CategoryId,
        date: NaiveDate,
        description: &str,
    ) -> Result<ExpenseId> {
        let row = sqlx::query(
            r#"
            INSERT INTO expenses (amount_cents, category_id, date, description)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(amount_cents)
        .bind(category_id)
        .bind(date.format(DATE_FORMAT).to_string())
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert expense")?;

        Ok(row.get("id"))
    }

    /// List every expense joined to its category name.
    /// Newest date first; equal dates order newest insertion first.
    pub async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT e.id, e.amount_cents, c.name AS category, e.date, e.description
            FROM expenses e
            JOIN categories c ON e.category_id = c.id
            ORDER BY e.date DESC, e.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list expenses")?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// List expenses for a single category. An unknown id yields an
    /// empty list, not an error.
    pub async fn list_expenses_for_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ExpenseRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT e.id, e.amount_cents, c.name AS category, e.date, e.description
            FROM expenses e
            JOIN categories c ON e.category_id = c.id
            WHERE e.category_id = ?
            ORDER BY e.date DESC, e.id DESC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list expenses for category")?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// Sum expenses per category for one month, ordered by category name.
    /// The month is a half-open range over the ISO date strings.
    pub async fn sum_expenses_for_month(&self, month: Month) -> Result<Vec<CategoryTotal>> {
        let from = month.first_day().format(DATE_FORMAT).to_string();
        let to = month.first_day_of_next().format(DATE_FORMAT).to_string();

        let rows = sqlx::query(
            r#"
            SELECT c.name AS category, SUM(e.amount_cents) AS total_cents
            FROM expenses e
            JOIN categories c ON e.category_id = c.id
            WHERE e.date >= ? AND e.date < ?
            GROUP BY c.name
            ORDER BY c.name
            "#,
        )
        .bind(&from)
        .bind(&to)
        .fetch_all(&self.pool)
        .await
        .context("Failed to sum expenses for month")?;

        Ok(rows
            .iter()
            .map(|row| CategoryTotal {
                category: row.get("category"),
                total_cents: row.get("total_cents"),
            })
            .collect())
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<ExpenseRecord> {
        let date_str: String = row.get("date");

        Ok(ExpenseRecord {
            id: row.get("id"),
            amount_cents: row.get("amount_cents"),
            category: row.get("category"),
            date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                .with_context(|| format!("Invalid stored date '{}'", date_str))?,
            description: row.get("description"),
        })
    }
}
