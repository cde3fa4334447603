use std::sync::Arc;

use society_db::DbPool;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Read by the auth extractor for the JWT secret.
    pub config: Arc<ServerConfig>,
}
