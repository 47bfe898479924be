use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use eyre::Result;
use std::sync::Arc;

use fundbridge_primitives::models::app_config::AppConfig;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        Ok(Arc::new(Self { db, config }))
    }
}
