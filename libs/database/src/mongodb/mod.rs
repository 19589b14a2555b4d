//! MongoDB database connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, ping};

