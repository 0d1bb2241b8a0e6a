//! Database configuration module for the dashboard.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models.

use crate::entities::{Customer, Invoice, Revenue};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default location of the dashboard database when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/dashboard.sqlite?mode=rwc";

/// Establishes a connection to the database at `database_url`.
///
/// The returned handle is what every reader takes; it is cheap to share by reference.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Creates the `customers`, `invoices` and `revenue` tables if they do not exist.
///
/// Customers are created first so the invoice foreign key has a target.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut customer_table = schema.create_table_from_entity(Customer);
    let mut invoice_table = schema.create_table_from_entity(Invoice);
    let mut revenue_table = schema.create_table_from_entity(Revenue);
    customer_table.if_not_exists();
    invoice_table.if_not_exists();
    revenue_table.if_not_exists();

    db.execute(builder.build(&customer_table)).await?;
    db.execute(builder.build(&invoice_table)).await?;
    db.execute(builder.build(&revenue_table)).await?;

    debug!("Dashboard tables ensured");
    Ok(())
}
