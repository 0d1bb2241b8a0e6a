//! Unified error types for the dashboard data layer.
//!
//! The three dashboard readers collapse every underlying failure into a fixed,
//! operation-specific variant. The cause is logged where it happens and
//! never carried to the caller.

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Revenue rows could not be read.
    #[error("Failed to fetch revenue data.")]
    RevenueFetch,

    /// The latest-invoices query or its customer join failed.
    #[error("Failed to fetch the latest invoices.")]
    LatestInvoicesFetch,

    /// One of the card aggregate queries failed.
    #[error("Failed to fetch card data.")]
    CardDataFetch,

    /// Raw store error, used below the reader boundary and by schema/seed code.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration or seed file problem.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A monetary amount that must be non-negative was negative.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount in minor units
        amount: i64,
    },

    /// A sort order string other than `asc` or `desc`.
    #[error("Invalid sort order: {value:?} (expected \"asc\" or \"desc\")")]
    InvalidSortOrder {
        /// The rejected input
        value: String,
    },

    /// An invoice row came back without its customer.
    #[error("Invoice {invoice_id} has no matching customer")]
    MissingCustomer {
        /// ID of the orphaned invoice
        invoice_id: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
