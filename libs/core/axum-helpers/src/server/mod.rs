//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with CORS, request tracing, panic recovery and OpenAPI docs
//! - Health and readiness helpers
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let top_level = Router::new().merge(health_router(app_info!()));
//! let app = create_router::<ApiDoc>(api_routes, top_level)?;
//!
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
