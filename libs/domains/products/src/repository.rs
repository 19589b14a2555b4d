use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreResult;
use crate::models::{Product, ProductFields};

/// Repository trait for Product persistence
///
/// Storage errors are returned as-is; mapping them to client messages is the
/// service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in natural store order
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Product>>;

    /// Insert a product under a freshly generated id and return that id
    async fn insert(&self, fields: ProductFields) -> StoreResult<ObjectId>;

    /// Overwrite the mutable fields; returns the matched count (0 or 1)
    async fn update_by_id(&self, id: ObjectId, fields: ProductFields) -> StoreResult<u64>;

    /// Returns the deleted count (0 or 1)
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64>;
}
