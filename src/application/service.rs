use chrono::NaiveDate;

use crate::domain::{
    is_valid_category_name, Category, CategoryId, CategoryTotal, Cents, Expense, ExpenseRecord,
    Month, DEFAULT_CATEGORIES,
};
use crate::storage::Repository;

use super::AppError;

/// Application service providing the ledger operations.
/// This is the primary interface for any client (CLI, export, tests).
pub struct ExpenseService {
    repo: Repository,
}

impl ExpenseService {
    /// Create a new service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Open (or create) the database at the given path and run the
    /// idempotent initialization: schema creation plus default category
    /// seeding. Safe to call on every startup.
    pub async fn open(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::connect(&db_url).await?;
        repo.migrate().await?;
        repo.seed_categories(&DEFAULT_CATEGORIES).await?;
        Ok(Self::new(repo))
    }

    // ========================
    // Category operations
    // ========================

    /// Add a new category. The name must be non-blank and unique
    /// (case-sensitive exact match); the store is unchanged on failure.
    pub async fn add_category(&self, name: &str) -> Result<Category, AppError> {
        if !is_valid_category_name(name) {
            return Err(AppError::MalformedInput(
                "category name must not be empty".to_string(),
            ));
        }

        if self.repo.get_category_by_name(name).await?.is_some() {
            return Err(AppError::DuplicateCategory(name.to_string()));
        }

        let id = self.repo.insert_category(name).await?;
        Ok(Category::new(id, name))
    }

    /// List every category, ordered by ascending id (insertion order).
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.repo.list_categories().await?)
    }

    /// Get a category by id.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, AppError> {
        self.repo
            .get_category(id)
            .await?
            .ok_or(AppError::InvalidCategory(id))
    }

    // ========================
    // Expense operations
    // ========================

    /// Record a new expense. The category must exist; nothing is
    /// inserted when it does not. Date defaulting ("today") is the
    /// caller's responsibility.
    pub async fn add_expense(
        &self,
        amount_cents: Cents,
        category_id: CategoryId,
        date: NaiveDate,
        description: String,
    ) -> Result<Expense, AppError> {
        let category = self.get_category(category_id).await?;

        let id = self
            .repo
            .insert_expense(amount_cents, category.id, date, &description)
            .await?;

        Ok(Expense {
            id,
            amount_cents,
            category_id: category.id,
            date,
            description,
        })
    }

    /// List every expense joined to its category name, newest first.
    pub async fn list_all_expenses(&self) -> Result<Vec<ExpenseRecord>, AppError> {
        Ok(self.repo.list_expenses().await?)
    }

    /// List expenses for one category, newest first. An unknown id
    /// yields an empty list, not an error.
    pub async fn list_expenses_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        Ok(self.repo.list_expenses_for_category(category_id).await?)
    }

    /// Per-category spending totals for one month, ordered by
    /// category name.
    pub async fn monthly_summary(&self, month: Month) -> Result<Vec<CategoryTotal>, AppError> {
        Ok(self.repo.sum_expenses_for_month(month).await?)
    }
}
