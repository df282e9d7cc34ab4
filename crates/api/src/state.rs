use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool clones a handle and the config is shared.
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool.
    pub pool: skillswap_db::DbPool,
    /// Server settings; token validation reads them on every request.
    pub config: Arc<ServerConfig>,
}
