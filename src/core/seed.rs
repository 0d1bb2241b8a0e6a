//! Placeholder data insertion.
//!
//! Writes a [`SeedData`] set into the store inside a single transaction.
//! Rows whose primary key already exists are left untouched, so seeding an
//! already-seeded database is a no-op.

use crate::{
    config::seed::{CustomerSeed, InvoiceSeed, RevenueSeed, SeedData},
    entities::{Customer, Invoice, Revenue, customer, invoice, revenue},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, Set, TransactionTrait, prelude::*, sea_query::OnConflict};
use tracing::{info, instrument};

/// Number of rows actually inserted per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Customers inserted
    pub customers: u64,
    /// Invoices inserted
    pub invoices: u64,
    /// Revenue rows inserted
    pub revenue: u64,
}

/// Inserts all seed rows, customers first so invoice foreign keys resolve.
///
/// Negative invoice amounts are rejected before anything is written.
#[instrument(skip(db, seed))]
pub async fn seed_database(db: &DatabaseConnection, seed: &SeedData) -> Result<SeedReport> {
    if let Some(invoice) = seed.invoices.iter().find(|invoice| invoice.amount < 0) {
        return Err(Error::InvalidAmount {
            amount: invoice.amount,
        });
    }

    let txn = db.begin().await?;

    let report = SeedReport {
        customers: insert_customers(&txn, &seed.customers).await?,
        invoices: insert_invoices(&txn, &seed.invoices).await?,
        revenue: insert_revenue(&txn, &seed.revenue).await?,
    };

    txn.commit().await?;

    info!(
        "Seeded {} customers, {} invoices, {} revenue rows",
        report.customers, report.invoices, report.revenue
    );
    Ok(report)
}

async fn insert_customers<C: ConnectionTrait>(conn: &C, rows: &[CustomerSeed]) -> Result<u64> {
    if rows.is_empty() {
        return Ok(0);
    }

    let models = rows.iter().map(|row| customer::ActiveModel {
        id: Set(row.id.clone()),
        name: Set(row.name.clone()),
        email: Set(row.email.clone()),
        image_url: Set(row.image_url.clone()),
    });

    Customer::insert_many(models)
        .on_conflict(OnConflict::column(customer::Column::Id).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
        .map_err(Into::into)
}

async fn insert_invoices<C: ConnectionTrait>(conn: &C, rows: &[InvoiceSeed]) -> Result<u64> {
    if rows.is_empty() {
        return Ok(0);
    }

    let models = rows.iter().map(|row| invoice::ActiveModel {
        id: Set(row.id.clone()),
        customer_id: Set(row.customer_id.clone()),
        amount: Set(row.amount),
        status: Set(row.status.clone()),
        date: Set(row.date),
    });

    Invoice::insert_many(models)
        .on_conflict(OnConflict::column(invoice::Column::Id).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
        .map_err(Into::into)
}

async fn insert_revenue<C: ConnectionTrait>(conn: &C, rows: &[RevenueSeed]) -> Result<u64> {
    if rows.is_empty() {
        return Ok(0);
    }

    let models = rows.iter().map(|row| revenue::ActiveModel {
        month: Set(row.month.clone()),
        revenue: Set(row.revenue),
    });

    Revenue::insert_many(models)
        .on_conflict(OnConflict::column(revenue::Column::Month).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
        .map_err(Into::into)
}
