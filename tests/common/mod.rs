// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use spesa::application::ExpenseService;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(ExpenseService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = ExpenseService::open(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to parse a YYYY-MM-DD date string
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Look up a category id by name (the seeded defaults have
/// engine-assigned ids, so tests resolve them by name).
pub async fn category_id(service: &ExpenseService, name: &str) -> Result<i64> {
    let categories = service.list_categories().await?;
    Ok(categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no category named '{}'", name))
        .id)
}
