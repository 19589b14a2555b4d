//! In-memory `ProductRepository` for driving the HTTP handlers without MongoDB.

use std::sync::Mutex;

use async_trait::async_trait;
use domain_products::{Product, ProductFields, ProductRepository, StoreResult};
use mongodb::bson::oid::ObjectId;

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, fields: ProductFields) -> StoreResult<ObjectId> {
        let product = Product::new(ObjectId::new(), fields);
        let id = product.id;
        self.products.lock().unwrap().push(product);
        Ok(id)
    }

    async fn update_by_id(&self, id: ObjectId, fields: ProductFields) -> StoreResult<u64> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                *product = Product::new(id, fields);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok((before - products.len()) as u64)
    }
}
