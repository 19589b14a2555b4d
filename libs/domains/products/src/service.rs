//! Product Service - Business logic layer

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::error::{ProductError, ProductResult, StoreError};
use crate::models::{Product, ProductPayload};
use crate::repository::ProductRepository;

/// Logs the underlying store failure and wraps it with the client-facing message.
fn store_failure(message: &'static str, source: StoreError) -> ProductError {
    tracing::error!(error = %source, "{}", message);
    ProductError::Store { message, source }
}

fn missing_after_write(message: &'static str, id: ObjectId) -> ProductError {
    tracing::error!(product_id = %id, "{}", message);
    ProductError::MissingAfterWrite { message, id }
}

/// Product service providing business logic operations
///
/// Validates payloads, performs the write-then-read sequences for create and
/// update, and turns store outcomes into `ProductError`s.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| store_failure("Failed to fetch products", e))
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("Failed to fetch product", e))?
            .ok_or(ProductError::NotFound(id))
    }

    /// Validate, insert, then read the stored document back.
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: ProductPayload) -> ProductResult<Product> {
        let fields = payload.validate()?;

        let id = self
            .repository
            .insert(fields)
            .await
            .map_err(|e| store_failure("Failed to create product", e))?;

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("Failed to fetch created product", e))?
            .ok_or_else(|| missing_after_write("Failed to fetch created product", id))
    }

    #[instrument(skip(self, payload), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ObjectId,
        payload: ProductPayload,
    ) -> ProductResult<Product> {
        let fields = payload.validate()?;

        let matched = self
            .repository
            .update_by_id(id, fields)
            .await
            .map_err(|e| store_failure("Failed to update product", e))?;

        if matched == 0 {
            return Err(ProductError::NotFound(id));
        }

        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("Failed to fetch updated product", e))?
            .ok_or_else(|| missing_after_write("Failed to fetch updated product", id))
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(|e| store_failure("Failed to delete product", e))?;

        if deleted == 0 {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
