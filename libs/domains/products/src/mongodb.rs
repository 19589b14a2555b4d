//! MongoDB implementation of ProductRepository

use std::future::{Future, IntoFuture};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{StoreError, StoreResult};
use crate::models::{Product, ProductFields};
use crate::repository::ProductRepository;

/// Upper bound for every single store operation.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

pub const COLLECTION_NAME: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Product>(collection_name),
        }
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> StoreResult<T>
    where
        F: Future<Output = Result<T, mongodb::error::Error>>,
    {
        with_timeout(OPERATION_TIMEOUT, operation, fut).await
    }
}

/// Runs one driver operation, failing with `StoreError::Timeout` once `limit` elapses.
async fn with_timeout<T, F>(limit: Duration, operation: &'static str, fut: F) -> StoreResult<T>
where
    F: Future<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => {
            tracing::warn!(operation, timeout = ?limit, "Store operation timed out");
            Err(StoreError::Timeout(limit))
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        self.bounded("find_all", async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect::<Vec<Product>>().await
        })
        .await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Product>> {
        self.bounded("find_by_id", self.collection.find_one(doc! { "_id": id }).into_future())
            .await
    }

    #[instrument(skip(self, fields), fields(product_name = %fields.name))]
    async fn insert(&self, fields: ProductFields) -> StoreResult<ObjectId> {
        let product = Product::new(ObjectId::new(), fields);

        self.bounded("insert", self.collection.insert_one(&product).into_future())
            .await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product.id)
    }

    #[instrument(skip(self, fields), fields(product_id = %id))]
    async fn update_by_id(&self, id: ObjectId, fields: ProductFields) -> StoreResult<u64> {
        let update = doc! {
            "$set": {
                "name": fields.name,
                "category": fields.category,
                "quantity": fields.quantity,
                "price": fields.price,
            }
        };

        let result = self
            .bounded(
                "update_by_id",
                self.collection
                    .update_one(doc! { "_id": id }, update)
                    .into_future(),
            )
            .await?;

        if result.matched_count > 0 {
            tracing::info!(product_id = %id, "Product updated successfully");
        }
        Ok(result.matched_count)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self
            .bounded(
                "delete_by_id",
                self.collection.delete_one(doc! { "_id": id }).into_future(),
            )
            .await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(result.deleted_count)
    }
}
