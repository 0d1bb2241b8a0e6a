//! Dashboard data access - framework-agnostic readers over the invoice store.
//!
//! Every reader takes the database handle as an argument, so a `MockDatabase`
//! or an in-memory `SQLite` connection can be injected in place of the real store.

/// Card figures: invoice and customer counts plus per-status totals
pub mod cards;
/// Minor-unit currency formatting
pub mod currency;
/// Latest invoices joined with their customers
pub mod invoice;
/// Monthly revenue rows
pub mod revenue;
/// Placeholder data insertion
pub mod seed;

use crate::errors::Error;
use tracing::error;

/// Logs the underlying failure and replaces it with the caller-facing error.
pub(crate) fn log_and_collapse(cause: &Error, collapsed: Error) -> Error {
    error!("Database Error: {cause}");
    collapsed
}
