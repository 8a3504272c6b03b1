use std::sync::Arc;

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use crate::modules::projects::adapters::outbound::project_store_mongo::MongoProjectStore;
use crate::modules::projects::service::ProjectsService;
use crate::shell::config::{AppConfig, Environment};

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectsService<dyn ProjectStore>>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, environment: Environment) -> Self {
        Self {
            projects: Arc::new(ProjectsService::new(store)),
            environment,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store: Arc<dyn ProjectStore> = match &config.mongo {
            Some(mongo) => {
                tracing::info!(database = %mongo.database, "Using MongoDB project store");
                Arc::new(MongoProjectStore::new(mongo.uri.clone(), mongo.database.clone()))
            }
            None => {
                tracing::warn!("MONGODB_URI not set, projects are kept in memory");
                Arc::new(InMemoryProjectStore::new())
            }
        };
        Self::new(store, config.environment)
    }
}
