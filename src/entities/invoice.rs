//! Invoice entity - A billable transaction against a customer.
//!
//! Amounts are stored as integer minor units (cents). `status` is a free-form
//! label such as `"paid"` or `"pending"`; the card summary groups on it.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique identifier for the invoice
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// ID of the customer this invoice is billed to
    pub customer_id: String,
    /// Amount in minor currency units
    pub amount: i64,
    /// Payment status label
    pub status: String,
    /// Date the invoice was issued
    pub date: Date,
}

/// Defines relationships between Invoice and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each invoice belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
