//! Core business logic - framework-agnostic item persistence and services.

/// Item repository: persistence and row-to-domain mapping
pub mod item;
/// Explicit transaction scope shared by every repository operation
pub mod scope;
/// Item service consumed by the HTTP layer
pub mod service;

pub use item::{ItemRepository, SeaOrmItemRepository};
pub use scope::in_transaction;
pub use service::ItemService;
