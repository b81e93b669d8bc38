mod common;

use anyhow::Result;
use spesa::application::{AppError, ExpenseService};

use common::test_service;

#[tokio::test]
async fn test_defaults_seeded_on_open() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let categories = service.list_categories().await?;
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Food", "Transport", "Entertainment", "Utilities"]);

    Ok(())
}

#[tokio::test]
async fn test_initialization_is_idempotent() -> Result<()> {
    let (service, temp) = test_service().await?;
    let db_path = temp.path().join("test.db");

    // Add some data, then re-open the same file.
    let category = service.add_category("Travel").await?;
    service
        .add_expense(1000, category.id, common::parse_date("2024-03-01"), "train".into())
        .await?;
    drop(service);

    let reopened = ExpenseService::open(db_path.to_str().unwrap()).await?;

    let categories = reopened.list_categories().await?;
    assert_eq!(categories.len(), 5, "defaults must not be duplicated");
    assert_eq!(
        categories.iter().filter(|c| c.name == "Food").count(),
        1
    );
    assert!(categories.iter().any(|c| c.name == "Travel"));

    let expenses = reopened.list_all_expenses().await?;
    assert_eq!(expenses.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_category_is_rejected() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let before = service.list_categories().await?.len();
    let result = service.add_category("Food").await;
    assert!(matches!(result, Err(AppError::DuplicateCategory(name)) if name == "Food"));

    let after = service.list_categories().await?.len();
    assert_eq!(before, after, "failed insert must leave the store unchanged");

    Ok(())
}

#[tokio::test]
async fn test_category_names_are_case_sensitive() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // "food" is distinct from the seeded "Food".
    let category = service.add_category("food").await?;
    assert_eq!(category.name, "food");

    Ok(())
}

#[tokio::test]
async fn test_blank_category_name_is_malformed() -> Result<()> {
    let (service, _temp) = test_service().await?;

    assert!(matches!(
        service.add_category("").await,
        Err(AppError::MalformedInput(_))
    ));
    assert!(matches!(
        service.add_category("   ").await,
        Err(AppError::MalformedInput(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_categories_ordered_by_insertion() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.add_category("Zoo").await?;
    service.add_category("Aquarium").await?;

    let categories = service.list_categories().await?;
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "list_categories must order by ascending id");

    // Insertion order, not alphabetical.
    assert_eq!(categories[4].name, "Zoo");
    assert_eq!(categories[5].name, "Aquarium");

    Ok(())
}
