//! Item entity - One line of an invoice.
//!
//! Each item belongs to one invoice and one product and carries the quantity,
//! unit price and unit of measurement billed for that product.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item, assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the invoice this line belongs to
    pub invoice_id: i64,
    /// ID of the billed product
    pub product_id: i64,
    /// Billed quantity
    pub quantity: f64,
    /// Price per unit
    pub unit_price: f64,
    /// Unit label (e.g., `"UN"`, `"KG"`)
    pub unit_of_measurement: String,
}

/// Defines relationships between Item and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one invoice
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id"
    )]
    Invoice,
    /// Each item bills one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
