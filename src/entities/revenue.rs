//! Revenue entity - One aggregate figure per month, used for the revenue chart.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Revenue database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "revenue")]
pub struct Model {
    /// Month label, e.g. `"Jan"`
    #[sea_orm(primary_key, auto_increment = false)]
    pub month: String,
    /// Revenue for the month
    pub revenue: i64,
}

/// Revenue rows stand alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
