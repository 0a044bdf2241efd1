//! Item repository - Persistence of invoice items.
//!
//! [`ItemRepository`] is the narrow contract the service layer depends on.
//! [`SeaOrmItemRepository`] implements it over a `SeaORM` connection. Every
//! operation runs inside [`in_transaction`], and every read hydrates the item
//! row together with its joined product row into a detached [`Item`].

use crate::{
    core::scope::in_transaction,
    entities::{Item as ItemEntity, Product as ProductEntity, item, product},
    errors::{Error, Result},
    models::{Item, ItemDraft, ItemFilter, ItemPatch, Product},
};
use async_trait::async_trait;
use sea_orm::{Condition, Set, prelude::*, sea_query::Expr};
use tracing::{debug, instrument};

/// Storage operations for invoice items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item and returns it fully hydrated.
    async fn save(&self, draft: ItemDraft) -> Result<Item>;

    /// Looks up one item. `Ok(None)` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>>;

    /// Lists every item matching `filter`, in storage order.
    async fn find_all(&self, filter: ItemFilter) -> Result<Vec<Item>>;

    /// Writes the fields present in `patch` to the item with this id.
    ///
    /// Unknown ids are a silent no-op.
    async fn update(&self, id: i64, patch: ItemPatch) -> Result<()>;

    /// Hard-deletes the item with this id. Unknown ids are a silent no-op.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// [`ItemRepository`] backed by a `SeaORM` database connection.
#[derive(Debug, Clone)]
pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    /// Creates a repository using the given connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    #[instrument(skip(self))]
    async fn save(&self, draft: ItemDraft) -> Result<Item> {
        let row = item::ActiveModel {
            invoice_id: Set(draft.invoice_id),
            product_id: Set(draft.product_id),
            quantity: Set(draft.quantity),
            unit_price: Set(draft.unit_price),
            unit_of_measurement: Set(draft.unit_of_measurement),
            ..Default::default()
        };

        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let inserted = row.insert(txn).await?;
                debug!("Inserted item {}", inserted.id);
                load_item(txn, inserted.id)
                    .await?
                    .ok_or(Error::ItemNotFound { id: inserted.id })
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>> {
        in_transaction(&self.db, move |txn| Box::pin(async move { load_item(txn, id).await }))
            .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: ItemFilter) -> Result<Vec<Item>> {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let rows = ItemEntity::find()
                    .filter(filter_condition(filter))
                    .find_also_related(ProductEntity)
                    .all(txn)
                    .await?;
                debug!("Loaded {} items", rows.len());
                rows.into_iter()
                    .map(|(row, product)| hydrate(row, product))
                    .collect()
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, patch: ItemPatch) -> Result<()> {
        if patch.is_empty() {
            debug!("Empty patch for item {}, nothing to write", id);
            return Ok(());
        }

        let mut statement = ItemEntity::update_many().filter(item::Column::Id.eq(id));
        if let Some(quantity) = patch.quantity {
            statement = statement.col_expr(item::Column::Quantity, Expr::value(quantity));
        }
        if let Some(unit_price) = patch.unit_price {
            statement = statement.col_expr(item::Column::UnitPrice, Expr::value(unit_price));
        }
        if let Some(unit) = patch.unit_of_measurement {
            statement = statement.col_expr(item::Column::UnitOfMeasurement, Expr::value(unit));
        }

        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let result = statement.exec(txn).await?;
                debug!("Updated {} item rows", result.rows_affected);
                Ok(())
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<()> {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let result = ItemEntity::delete_by_id(id).exec(txn).await?;
                debug!("Deleted {} item rows", result.rows_affected);
                Ok(())
            })
        })
        .await
    }
}

async fn load_item<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Item>> {
    ItemEntity::find_by_id(id)
        .find_also_related(ProductEntity)
        .one(db)
        .await?
        .map(|(row, product)| hydrate(row, product))
        .transpose()
}

fn filter_condition(filter: ItemFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(invoice_id) = filter.invoice_id {
        condition = condition.add(item::Column::InvoiceId.eq(invoice_id));
    }
    if let Some(product_id) = filter.product_id {
        condition = condition.add(item::Column::ProductId.eq(product_id));
    }
    condition
}

/// Builds the domain item from its row and the joined product row.
fn hydrate(row: item::Model, product: Option<product::Model>) -> Result<Item> {
    let product = product.ok_or(Error::MissingProduct {
        item_id: row.id,
        product_id: row.product_id,
    })?;

    Ok(Item {
        id: row.id,
        invoice_id: row.invoice_id,
        product_id: row.product_id,
        product: Product {
            id: row.product_id,
            code: product.code,
            description: product.description,
        },
        quantity: row.quantity,
        unit_price: row.unit_price,
        unit_of_measurement: row.unit_of_measurement,
    })
}
