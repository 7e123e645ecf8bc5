//! Business logic services

pub mod catalog;
pub mod search;

use crate::{config::SearchConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub search: search::SearchService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, search_config: SearchConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository),
            search: search::SearchService::new(search_config),
        }
    }
}
