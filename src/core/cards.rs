//! Card summary reader.
//!
//! The dashboard cards show how many customers and invoices exist and the total
//! invoiced per status. The three aggregates are independent, so they are
//! issued together and joined fail-fast: the first failure aborts the whole
//! summary and no partial [`CardData`] is ever returned.

use crate::{
    core::{currency::format_currency, log_and_collapse},
    entities::{Customer, Invoice, invoice},
    errors::{Error, Result},
};
use sea_orm::{FromQueryResult, PaginatorTrait, QuerySelect, prelude::*};
use serde::Serialize;
use indexmap::IndexMap;
use tracing::{debug, instrument};

/// Aggregate figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    /// Total customers
    pub number_of_customers: u64,
    /// Total invoices
    pub number_of_invoices: u64,
    /// Status label to formatted total, in the order the store grouped them.
    /// Only statuses present in the store appear.
    pub status_summary: IndexMap<String, String>,
}

/// One row of the per-status group-by.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub(crate) struct StatusTotal {
    pub status: String,
    pub total: Option<i64>,
}

/// Counts invoices and customers and sums invoice amounts per status, concurrently.
///
/// # Errors
/// If any of the three queries fails, the failure is logged and reported as
/// [`Error::CardDataFetch`].
#[instrument(skip(db))]
pub async fn fetch_card_data(db: &DatabaseConnection) -> Result<CardData> {
    let card_data = query_card_data(db)
        .await
        .map_err(|e| log_and_collapse(&e, Error::CardDataFetch))?;

    debug!(
        "Card data: {} customers, {} invoices, {} statuses",
        card_data.number_of_customers,
        card_data.number_of_invoices,
        card_data.status_summary.len()
    );
    Ok(card_data)
}

async fn query_card_data(db: &DatabaseConnection) -> Result<CardData> {
    let invoice_count = Invoice::find().count(db);
    let customer_count = Customer::find().count(db);
    let status_totals = Invoice::find()
        .select_only()
        .column(invoice::Column::Status)
        .column_as(invoice::Column::Amount.sum(), "total")
        .group_by(invoice::Column::Status)
        .into_model::<StatusTotal>()
        .all(db);

    let (number_of_invoices, number_of_customers, status_totals) =
        tokio::try_join!(invoice_count, customer_count, status_totals)?;

    Ok(CardData {
        number_of_customers,
        number_of_invoices,
        status_summary: summarize_statuses(status_totals),
    })
}

/// Folds group-by rows into the status summary, keeping row order. A `NULL` sum counts as zero.
pub(crate) fn summarize_statuses(totals: Vec<StatusTotal>) -> IndexMap<String, String> {
    totals
        .into_iter()
        .map(|row| (row.status, format_currency(row.total.unwrap_or(0))))
        .collect()
}
