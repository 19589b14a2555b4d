//! HTTP middleware module.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::create_cors_layer;
//!
//! let cors = create_cors_layer(std::env::var("CORS_ALLOWED_ORIGIN").ok().as_deref())?;
//! let app = Router::new().layer(cors);
//! ```

pub mod cors;

pub use cors::create_cors_layer;
