//! API routes module

pub mod health;
pub mod root;

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductRepository, ProductService};

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    product_routes(MongoProductRepository::new(&state.db))
}

fn product_routes<R: ProductRepository + 'static>(repository: R) -> Router {
    let service = ProductService::new(repository);
    Router::new().nest("/products", handlers::router(service))
}

/// Routes served at the root: banner, liveness and readiness
pub fn top_level(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(health::router(state.clone()))
}
