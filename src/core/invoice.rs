//! Latest invoices reader.
//!
//! Selects the top invoices by amount, joins each one with its customer and
//! projects the pair into a [`LatestInvoice`] display record. The projection
//! keeps the order the store returned.

use crate::{
    core::{currency::format_currency, log_and_collapse},
    entities::{Customer, Invoice, customer, invoice},
    errors::{Error, Result},
};
use sea_orm::{Order, QueryOrder, QuerySelect, prelude::*};
use serde::Serialize;
use std::{fmt, str::FromStr};
use tracing::{debug, instrument};

/// Number of invoices returned when no limit is given.
pub const DEFAULT_LATEST_INVOICES_LIMIT: u64 = 10;

/// Direction to sort invoices by amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest amount first
    Asc,
    /// Largest amount first
    #[default]
    Desc,
}

impl From<SortOrder> for Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => Self::Asc,
            SortOrder::Desc => Self::Desc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::InvalidSortOrder {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// An invoice as shown in the "latest invoices" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestInvoice {
    /// Invoice ID
    pub id: String,
    /// Customer name
    pub name: String,
    /// Customer avatar
    pub image_url: String,
    /// Customer email
    pub email: String,
    /// Formatted amount, e.g. `"$157.95"`
    pub amount: String,
}

/// Returns up to `limit` invoices ordered by amount, each joined with its customer.
///
/// `limit` defaults to [`DEFAULT_LATEST_INVOICES_LIMIT`] and `order` to
/// [`SortOrder::Desc`].
///
/// # Errors
/// Any query or join failure is logged and reported as [`Error::LatestInvoicesFetch`].
#[instrument(skip(db))]
pub async fn fetch_latest_invoices(
    db: &DatabaseConnection,
    limit: Option<u64>,
    order: Option<SortOrder>,
) -> Result<Vec<LatestInvoice>> {
    let limit = limit.unwrap_or(DEFAULT_LATEST_INVOICES_LIMIT);
    let order = order.unwrap_or_default();

    let latest = query_latest_invoices(db, limit, order)
        .await
        .map_err(|e| log_and_collapse(&e, Error::LatestInvoicesFetch))?;

    debug!("Fetched {} latest invoices ({order})", latest.len());
    Ok(latest)
}

async fn query_latest_invoices(
    db: &DatabaseConnection,
    limit: u64,
    order: SortOrder,
) -> Result<Vec<LatestInvoice>> {
    let rows = Invoice::find()
        .find_also_related(Customer)
        .order_by(invoice::Column::Amount, order.into())
        .limit(limit)
        .all(db)
        .await?;

    rows.into_iter()
        .map(|(invoice, customer)| to_latest_invoice(invoice, customer))
        .collect()
}

fn to_latest_invoice(
    invoice: invoice::Model,
    customer: Option<customer::Model>,
) -> Result<LatestInvoice> {
    let customer = customer.ok_or_else(|| Error::MissingCustomer {
        invoice_id: invoice.id.clone(),
    })?;

    Ok(LatestInvoice {
        amount: format_currency(invoice.amount),
        name: customer.name,
        image_url: customer.image_url,
        email: customer.email,
        id: invoice.id,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, MockDatabase};

    async fn setup_with_amounts(amounts: &[i64]) -> Result<DatabaseConnection> {
        let (db, customer) = setup_with_customer().await?;
        for (i, amount) in amounts.iter().enumerate() {
            create_test_invoice(&db, &format!("inv-{i}"), &customer.id, *amount, "paid").await?;
        }
        Ok(db)
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!(" desc ".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!(matches!(
            "sideways".parse::<SortOrder>(),
            Err(Error::InvalidSortOrder { .. })
        ));
    }

    #[test]
    fn test_sort_order_defaults_to_desc() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Asc.to_string(), "asc");
    }

    #[test]
    fn test_projection_requires_customer() {
        let invoice = invoice::Model {
            id: "orphan".to_string(),
            customer_id: "gone".to_string(),
            amount: 100,
            status: "paid".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };

        let err = to_latest_invoice(invoice, None).unwrap_err();
        assert!(matches!(err, Error::MissingCustomer { invoice_id } if invoice_id == "orphan"));
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_desc_limit() -> Result<()> {
        let db = setup_with_amounts(&[500, 100, 900]).await?;

        let latest = fetch_latest_invoices(&db, Some(2), Some(SortOrder::Desc)).await?;

        let ids: Vec<&str> = latest.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["inv-2", "inv-0"]);
        assert_eq!(latest[0].amount, "$9.00");
        assert_eq!(latest[1].amount, "$5.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_asc() -> Result<()> {
        let db = setup_with_amounts(&[500, 100, 900]).await?;

        let latest = fetch_latest_invoices(&db, Some(3), Some(SortOrder::Asc)).await?;

        let amounts: Vec<&str> = latest.iter().map(|i| i.amount.as_str()).collect();
        assert_eq!(amounts, vec!["$1.00", "$5.00", "$9.00"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_defaults() -> Result<()> {
        let amounts: Vec<i64> = (1..=12).map(|n| n * 1000).collect();
        let db = setup_with_amounts(&amounts).await?;

        let latest = fetch_latest_invoices(&db, None, None).await?;

        assert_eq!(latest.len(), 10);
        assert_eq!(latest[0].amount, "$120.00");
        assert_eq!(latest[9].amount, "$30.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_limit_zero() -> Result<()> {
        let db = setup_with_amounts(&[500, 100]).await?;

        let latest = fetch_latest_invoices(&db, Some(0), None).await?;
        assert!(latest.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_joins_customer_fields() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_customer(&db, "c1", "Lee Robinson").await?;
        create_test_customer(&db, "c2", "Michael Novotny").await?;
        create_test_invoice(&db, "a", "c1", 20348, "pending").await?;
        create_test_invoice(&db, "b", "c2", 44800, "paid").await?;

        let latest = fetch_latest_invoices(&db, None, None).await?;

        assert_eq!(
            latest[0],
            LatestInvoice {
                id: "b".to_string(),
                name: "Michael Novotny".to_string(),
                image_url: "/customers/c2.png".to_string(),
                email: "c2@example.com".to_string(),
                amount: "$448.00".to_string(),
            }
        );
        assert_eq!(latest[1].name, "Lee Robinson");
        assert_eq!(latest[1].amount, "$203.48");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_store_failure_is_generic() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let err = fetch_latest_invoices(&db, None, None).await.unwrap_err();
        assert!(matches!(err, Error::LatestInvoicesFetch));
        assert_eq!(err.to_string(), "Failed to fetch the latest invoices.");
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_missing_tables() -> Result<()> {
        let db = setup_test_db().await?;
        db.execute_unprepared("DROP TABLE invoices").await?;
        db.execute_unprepared("DROP TABLE customers").await?;

        let err = fetch_latest_invoices(&db, None, None).await.unwrap_err();
        assert!(matches!(err, Error::LatestInvoicesFetch));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_invoices_orphan_invoice_fails() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;
        create_test_invoice(&db, "kept", &customer.id, 109, "paid").await?;
        db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
        create_test_invoice(&db, "orphan", "no-such-customer", 500, "pending").await?;

        let err = fetch_latest_invoices(&db, None, None).await.unwrap_err();
        assert!(matches!(err, Error::LatestInvoicesFetch));
        assert_eq!(err.to_string(), "Failed to fetch the latest invoices.");
        Ok(())
    }
}
