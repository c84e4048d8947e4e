//! Storage backend factory.
//!
//! Creates the appropriate storage backend based on configuration.

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppError;
use crate::storage::file::FileStore;
use crate::storage::memory::MemoryStore;
use crate::storage::postgres::PgStore;
use crate::storage::traits::ObjectStore;

/// Create a storage backend based on configuration.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be initialized.
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn ObjectStore>, AppError> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::File => {
            let storage = FileStore::new(&config.file).map_err(AppError::Storage)?;

            // Verify storage is healthy
            storage.health_check().await.map_err(AppError::Storage)?;

            Ok(Arc::new(storage))
        }
        StorageBackend::PostgreSQL => {
            let storage = PgStore::connect(&config.postgresql)
                .await
                .map_err(AppError::Storage)?;

            Ok(Arc::new(storage))
        }
    }
}
