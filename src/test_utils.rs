//! Shared test utilities for the dashboard data layer.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test rows with sensible defaults.

use crate::{
    entities::{customer, invoice, revenue},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test customer.
///
/// # Defaults
/// * `email`: `"<id>@example.com"`
/// * `image_url`: `"/customers/<id>.png"`
pub async fn create_test_customer(
    db: &DatabaseConnection,
    id: &str,
    name: &str,
) -> Result<customer::Model> {
    customer::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        email: Set(format!("{id}@example.com")),
        image_url: Set(format!("/customers/{id}.png")),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test invoice dated 2023-01-01.
pub async fn create_test_invoice(
    db: &DatabaseConnection,
    id: &str,
    customer_id: &str,
    amount: i64,
    status: &str,
) -> Result<invoice::Model> {
    let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();

    invoice::ActiveModel {
        id: Set(id.to_string()),
        customer_id: Set(customer_id.to_string()),
        amount: Set(amount),
        status: Set(status.to_string()),
        date: Set(date),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a revenue row for `month`.
pub async fn create_test_revenue(
    db: &DatabaseConnection,
    month: &str,
    amount: i64,
) -> Result<revenue::Model> {
    revenue::ActiveModel {
        month: Set(month.to_string()),
        revenue: Set(amount),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a test database with a single customer.
/// Returns (db, customer) for invoice-related tests.
pub async fn setup_with_customer() -> Result<(DatabaseConnection, customer::Model)> {
    let db = setup_test_db().await?;
    let customer = create_test_customer(&db, "c1", "Test Customer").await?;
    Ok((db, customer))
}
