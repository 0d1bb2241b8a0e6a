//! Placeholder data loading from a TOML seed file
//!
//! The dashboard is usually demonstrated against a small fixed data set. This
//! module parses that data set; inserting it is done by [`crate::core::seed`].

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Structure representing the entire seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    /// Customers to insert
    #[serde(default)]
    pub customers: Vec<CustomerSeed>,
    /// Invoices to insert; each must reference a customer
    #[serde(default)]
    pub invoices: Vec<InvoiceSeed>,
    /// Monthly revenue figures
    #[serde(default)]
    pub revenue: Vec<RevenueSeed>,
}

/// A single customer row
#[derive(Debug, Deserialize, Clone)]
pub struct CustomerSeed {
    /// Customer ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Avatar image path or URL
    pub image_url: String,
}

/// A single invoice row
#[derive(Debug, Deserialize, Clone)]
pub struct InvoiceSeed {
    /// Invoice ID
    pub id: String,
    /// Customer the invoice is billed to
    pub customer_id: String,
    /// Amount in minor units (cents)
    pub amount: i64,
    /// Status label, e.g. `paid` or `pending`
    pub status: String,
    /// Issue date as `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Revenue for one month
#[derive(Debug, Deserialize, Clone)]
pub struct RevenueSeed {
    /// Month label
    pub month: String,
    /// Revenue figure
    pub revenue: i64,
}

/// Parses seed data from TOML text.
pub fn parse_seed_data(contents: &str) -> Result<SeedData> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Loads seed data from a TOML file
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or is not valid seed TOML.
pub fn load_seed_data<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;

    parse_seed_data(&contents)
}
