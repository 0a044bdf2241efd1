//! Shared test utilities for the invoice items service.
//!
//! This module provides common helper functions for setting up test databases
//! and creating catalog rows with sensible defaults.

use crate::{
    entities::{invoice, product},
    errors::Result,
    models::ItemDraft,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a catalog product.
pub async fn create_test_product(
    db: &DatabaseConnection,
    code: &str,
    description: &str,
) -> Result<product::Model> {
    let row = product::ActiveModel {
        code: Set(code.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    };
    row.insert(db).await.map_err(Into::into)
}

/// Inserts an invoice with the given fiscal number.
pub async fn create_test_invoice(db: &DatabaseConnection, number: &str) -> Result<invoice::Model> {
    let row = invoice::ActiveModel {
        number: Set(number.to_string()),
        ..Default::default()
    };
    row.insert(db).await.map_err(Into::into)
}

/// Draft for two units at 5.0 each.
#[must_use]
pub fn test_draft(product_id: i64, invoice_id: i64) -> ItemDraft {
    ItemDraft {
        product_id,
        invoice_id,
        quantity: 2.0,
        unit_price: 5.0,
        unit_of_measurement: "UN".to_string(),
    }
}

/// Sets up a database holding one product and one invoice.
/// Returns (db, product, invoice) for item tests.
pub async fn setup_with_catalog() -> Result<(DatabaseConnection, product::Model, invoice::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "7890000000001", "Arroz 5kg").await?;
    let invoice = create_test_invoice(&db, "NF-0001").await?;
    Ok((db, product, invoice))
}
