use serde::{Deserialize, Serialize};

pub type CategoryId = i64;

/// Categories seeded on first initialization. Seeding uses INSERT OR IGNORE,
/// so re-running initialization never duplicates them.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Utilities"];

/// A named grouping under which expenses are classified.
/// Categories are insert-only: never renamed, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A category name is valid when it contains at least one
/// non-whitespace character. Uniqueness is case-sensitive and
/// enforced at insert time, not here.
pub fn is_valid_category_name(name: &str) -> bool {
    !name.trim().is_empty()
}
