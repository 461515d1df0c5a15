use crate::{config::Config, db::connection::DbPool};

/// Shared application state handed to every handler and middleware layer.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self { pool, config }
    }
}
