//! Domain values handed to and returned by the item repository.
//!
//! These are detached from storage: nothing here holds a connection or knows
//! about table rows. Conversion from rows happens in [`crate::core::item`].

use serde::{Deserialize, Serialize};

/// Catalog product embedded read-only inside an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Product identifier
    pub id: i64,
    /// Catalog code
    pub code: String,
    /// Human-readable description
    pub description: String,
}

/// An invoice line as seen by API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Storage-assigned identifier
    pub id: i64,
    /// Invoice this line belongs to
    pub invoice_id: i64,
    /// Billed product identifier
    pub product_id: i64,
    /// Snapshot of the product row at read time
    pub product: Product,
    /// Billed quantity
    pub quantity: f64,
    /// Price per unit
    pub unit_price: f64,
    /// Unit label. Serialized under its historical wire name.
    #[serde(rename = "unity_of_measurement")]
    pub unit_of_measurement: String,
}

/// Fields required to create an [`Item`], before storage assigns its id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDraft {
    /// Billed product identifier
    pub product_id: i64,
    /// Owning invoice identifier
    pub invoice_id: i64,
    /// Billed quantity
    pub quantity: f64,
    /// Price per unit
    pub unit_price: f64,
    /// Unit label
    #[serde(rename = "unity_of_measurement", alias = "unit_of_measurement")]
    pub unit_of_measurement: String,
}

/// Partial update of the mutable fields of an [`Item`].
///
/// Product and invoice are absent: an item never moves to another invoice or
/// product once created. Absent and `null` fields both mean "leave unchanged"
/// and are echoed back as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    /// New quantity
    #[serde(default)]
    pub quantity: Option<f64>,
    /// New unit price
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// New unit label
    #[serde(default, rename = "unity_of_measurement", alias = "unit_of_measurement")]
    pub unit_of_measurement: Option<String>,
}

impl ItemPatch {
    /// Returns true when the patch carries no field to write.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_price.is_none() && self.unit_of_measurement.is_none()
    }
}

/// Equality filters applied when listing items. Absent fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ItemFilter {
    /// Only items of this invoice
    #[serde(default)]
    pub invoice_id: Option<i64>,
    /// Only items billing this product
    #[serde(default)]
    pub product_id: Option<i64>,
}

impl ItemFilter {
    /// Filter matching every item of one invoice.
    #[must_use]
    pub const fn for_invoice(invoice_id: i64) -> Self {
        Self {
            invoice_id: Some(invoice_id),
            product_id: None,
        }
    }
}
