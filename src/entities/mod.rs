//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the dashboard tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod customer;
pub mod invoice;
pub mod revenue;

// Re-export specific types to avoid conflicts
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use invoice::{Column as InvoiceColumn, Entity as Invoice, Model as InvoiceModel};
pub use revenue::{Column as RevenueColumn, Entity as Revenue, Model as RevenueModel};
