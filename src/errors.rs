//! Unified error type for the invoice items service.
//!
//! Storage failures keep the original `DbErr` so callers see exactly what the
//! database reported after the surrounding transaction was rolled back.

use thiserror::Error;

/// Errors raised by configuration, persistence and the HTTP bootstrap.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any failure reported by the database or the ORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored item points at a product row that could not be loaded
    #[error("Item {item_id} references missing product {product_id}")]
    MissingProduct {
        /// Identifier of the item being hydrated
        item_id: i64,
        /// Product identifier stored on the item row
        product_id: i64,
    },

    /// An item that was just written could not be read back
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// Identifier that was looked up
        id: i64,
    },

    /// Socket or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
