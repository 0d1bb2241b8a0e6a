//! Revenue reader.
//!
//! Revenue rows are returned exactly as stored; charting code decides how to
//! scale and label them.

use crate::{
    core::log_and_collapse,
    entities::{Revenue, revenue},
    errors::{Error, Result},
};
use sea_orm::prelude::*;
use tracing::{debug, instrument};

/// Returns every revenue row, untransformed.
///
/// # Errors
/// Any store failure is logged and reported as [`Error::RevenueFetch`].
#[instrument(skip(db))]
pub async fn fetch_revenue(db: &DatabaseConnection) -> Result<Vec<revenue::Model>> {
    let rows = Revenue::find()
        .all(db)
        .await
        .map_err(|e| log_and_collapse(&e.into(), Error::RevenueFetch))?;

    debug!("Fetched {} revenue rows", rows.len());
    Ok(rows)
}
