use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{SeaOrmTriviaService, TriviaService};

/// Long-lived handles shared by every request handler.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub trivia_service: Arc<dyn TriviaService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let config = Arc::new(RwLock::new(config));

        let trivia_service = Arc::new(SeaOrmTriviaService::new(store.clone(), config.clone()))
            as Arc<dyn TriviaService>;

        Self {
            config,
            store,
            trivia_service,
        }
    }
}
