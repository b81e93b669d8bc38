mod common;

use anyhow::Result;
use spesa::application::AppError;

use common::{category_id, parse_date, test_service};

#[tokio::test]
async fn test_add_and_list_roundtrip() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let food = category_id(&service, "Food").await?;

    let expense = service
        .add_expense(4250, food, parse_date("2024-03-15"), "lunch".into())
        .await?;

    let expenses = service.list_all_expenses().await?;
    assert_eq!(expenses.len(), 1);

    let record = &expenses[0];
    assert_eq!(record.id, expense.id);
    assert_eq!(record.amount_cents, 4250);
    assert_eq!(record.category, "Food");
    assert_eq!(record.date, parse_date("2024-03-15"));
    assert_eq!(record.description, "lunch");

    // Also visible through the per-category listing.
    let by_category = service.list_expenses_by_category(food).await?;
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, expense.id);

    Ok(())
}

#[tokio::test]
async fn test_invalid_category_inserts_nothing() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service
        .add_expense(1000, 9999, parse_date("2024-01-01"), String::new())
        .await;
    assert!(matches!(result, Err(AppError::InvalidCategory(9999))));

    let expenses = service.list_all_expenses().await?;
    assert!(expenses.is_empty(), "no row may be inserted on failure");

    Ok(())
}

#[tokio::test]
async fn test_empty_description_is_allowed() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let food = category_id(&service, "Food").await?;

    service
        .add_expense(500, food, parse_date("2024-02-10"), String::new())
        .await?;

    let expenses = service.list_all_expenses().await?;
    assert_eq!(expenses[0].description, "");

    Ok(())
}

#[tokio::test]
async fn test_listing_orders_by_date_descending() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let food = category_id(&service, "Food").await?;
    let transport = category_id(&service, "Transport").await?;

    service
        .add_expense(1000, food, parse_date("2024-03-01"), "groceries".into())
        .await?;
    service
        .add_expense(500, transport, parse_date("2024-03-20"), "bus".into())
        .await?;
    service
        .add_expense(2000, food, parse_date("2024-02-28"), "dinner".into())
        .await?;

    let expenses = service.list_all_expenses().await?;
    let dates: Vec<String> = expenses.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, ["2024-03-20", "2024-03-01", "2024-02-28"]);

    Ok(())
}

#[tokio::test]
async fn test_equal_dates_order_newest_insertion_first() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let food = category_id(&service, "Food").await?;

    let first = service
        .add_expense(1000, food, parse_date("2024-03-15"), "breakfast".into())
        .await?;
    let second = service
        .add_expense(2000, food, parse_date("2024-03-15"), "lunch".into())
        .await?;

    let expenses = service.list_all_expenses().await?;
    assert_eq!(expenses[0].id, second.id);
    assert_eq!(expenses[1].id, first.id);

    Ok(())
}

#[tokio::test]
async fn test_category_with_no_expenses_yields_empty_list() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let utilities = category_id(&service, "Utilities").await?;

    let expenses = service.list_expenses_by_category(utilities).await?;
    assert!(expenses.is_empty());

    // An id that doesn't exist at all is also just an empty list.
    let expenses = service.list_expenses_by_category(9999).await?;
    assert!(expenses.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_per_category_listing_filters() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let food = category_id(&service, "Food").await?;
    let transport = category_id(&service, "Transport").await?;

    service
        .add_expense(1000, food, parse_date("2024-03-01"), "groceries".into())
        .await?;
    service
        .add_expense(500, transport, parse_date("2024-03-02"), "bus".into())
        .await?;
    service
        .add_expense(750, food, parse_date("2024-03-03"), "cafe".into())
        .await?;

    let food_expenses = service.list_expenses_by_category(food).await?;
    assert_eq!(food_expenses.len(), 2);
    assert!(food_expenses.iter().all(|e| e.category == "Food"));

    Ok(())
}
