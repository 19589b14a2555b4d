//! Application state management

use database::mongodb::connect_from_config;
use mongodb::{Client, Database};
use tracing::info;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub db: Database,
}

impl AppState {
    /// Connect to MongoDB and verify it answers a ping.
    ///
    /// Any failure here aborts startup; there is no retry.
    pub async fn connect(config: Config) -> eyre::Result<Self> {
        info!(
            "Connecting to MongoDB database: {}",
            config.mongodb.database()
        );

        let mongo_client = connect_from_config(&config.mongodb).await?;
        let db = mongo_client.database(config.mongodb.database());

        info!("Connected to MongoDB");

        Ok(Self {
            config,
            mongo_client,
            db,
        })
    }
}
