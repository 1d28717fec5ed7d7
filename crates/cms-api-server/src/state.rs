use std::sync::Arc;

use crate::config::Settings;
use crate::database::{DbPool, PgLinkLookupRepository, PgMenuRepository};
use crate::services::{LinkLabelService, MenuTreeService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub menu_service: Arc<MenuTreeService<PgMenuRepository>>,
    pub label_service: Arc<LinkLabelService<PgLinkLookupRepository>>,
    pub lookups: Arc<PgLinkLookupRepository>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(db_pool: DbPool, settings: Settings) -> Self {
        let menu_repo = Arc::new(PgMenuRepository::new(db_pool.get_pool().clone()));
        let lookups = Arc::new(PgLinkLookupRepository::new(db_pool.get_pool().clone()));

        AppState {
            db_pool,
            menu_service: Arc::new(MenuTreeService::new(menu_repo)),
            label_service: Arc::new(LinkLabelService::new(lookups.clone())),
            lookups,
            settings,
        }
    }
}
