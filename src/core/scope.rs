//! Transaction scope used by every repository operation.
//!
//! The work closure runs inside a fresh database transaction. The transaction
//! commits when the closure returns `Ok` and rolls back when it returns `Err`;
//! the closure's error is handed back to the caller unchanged.

use crate::errors::{Error, Result};
use sea_orm::{DatabaseTransaction, TransactionError, TransactionTrait};
use std::{future::Future, pin::Pin};
use tracing::warn;

/// Runs `work` in a transaction on `db`, committing on success and rolling back on failure.
///
/// Failures to begin or commit the transaction surface as [`Error::Database`].
pub async fn in_transaction<C, F, T>(db: &C, work: F) -> Result<T>
where
    C: TransactionTrait,
    F: for<'c> FnOnce(
            &'c DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>
        + Send,
    T: Send,
{
    db.transaction::<F, T, Error>(work)
        .await
        .map_err(|e| match e {
            TransactionError::Connection(err) => {
                warn!("Transaction could not be opened or committed: {}", err);
                Error::Database(err)
            }
            TransactionError::Transaction(err) => {
                warn!("Transaction rolled back: {}", err);
                err
            }
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{Product, product};
    use crate::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};

    #[tokio::test]
    async fn test_commits_on_success() -> Result<()> {
        let db = setup_test_db().await?;

        let id = in_transaction(&db, |txn| {
            Box::pin(async move {
                let row = product::ActiveModel {
                    code: Set("7890000000001".to_string()),
                    description: Set("Arroz 5kg".to_string()),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
                Ok(row.id)
            })
        })
        .await?;

        assert!(Product::find_by_id(id).one(&db).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_rolls_back_and_returns_original_error() -> Result<()> {
        let db = setup_test_db().await?;

        let result: Result<()> = in_transaction(&db, |txn| {
            Box::pin(async move {
                product::ActiveModel {
                    code: Set("7890000000002".to_string()),
                    description: Set("Feijão 1kg".to_string()),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
                Err(Error::ItemNotFound { id: 42 })
            })
        })
        .await;

        assert!(matches!(result, Err(Error::ItemNotFound { id: 42 })));
        assert!(Product::find().all(&db).await?.is_empty());
        Ok(())
    }
}
