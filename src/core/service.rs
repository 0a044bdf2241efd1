//! Item service - The entry point the HTTP layer calls into.
//!
//! The service forwards to an [`ItemRepository`] and adds request-level tracing.
//! It holds the repository behind an `Arc` so it can be cloned into every
//! request handler.

use crate::{
    core::item::ItemRepository,
    errors::Result,
    models::{Item, ItemDraft, ItemFilter, ItemPatch},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Item operations exposed to the API.
#[derive(Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
}

impl ItemService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    /// Creates an item and returns it with its storage-assigned id.
    #[instrument(skip(self))]
    pub async fn save(&self, draft: ItemDraft) -> Result<Item> {
        let item = self.repository.save(draft).await?;
        info!("Created item {} on invoice {}", item.id, item.invoice_id);
        Ok(item)
    }

    /// Looks up one item by id.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Item>> {
        self.repository.find_by_id(id).await
    }

    /// Lists the items matching `filter`.
    #[instrument(skip(self))]
    pub async fn find_all(&self, filter: ItemFilter) -> Result<Vec<Item>> {
        self.repository.find_all(filter).await
    }

    /// Lists the items of one invoice.
    #[instrument(skip(self))]
    pub async fn find_by_invoice(&self, invoice_id: i64) -> Result<Vec<Item>> {
        self.find_all(ItemFilter::for_invoice(invoice_id)).await
    }

    /// Applies a partial update to an item.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: ItemPatch) -> Result<()> {
        self.repository.update(id, patch).await?;
        info!("Updated item {}", id);
        Ok(())
    }

    /// Deletes an item.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;
        info!("Deleted item {}", id);
        Ok(())
    }
}
