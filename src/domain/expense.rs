use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CategoryId, Cents};

pub type ExpenseId = i64;

/// A single dated monetary record attributed to one category.
/// Expenses are insert-only: never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount_cents: Cents,
    pub category_id: CategoryId,
    pub date: NaiveDate,
    pub description: String,
}

/// An expense joined to its category name, as returned by the listing
/// queries. Ordered by date descending, newest insertion first on ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub amount_cents: Cents,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// One row of a monthly summary: total spending in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_cents: Cents,
}
