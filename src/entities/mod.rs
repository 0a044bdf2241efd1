//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod invoice;
pub mod item;
pub mod product;

// Re-export specific types to avoid conflicts
pub use invoice::{Column as InvoiceColumn, Entity as Invoice, Model as InvoiceModel};
pub use item::{Column as ItemColumn, Entity as Item, Model as ItemModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
