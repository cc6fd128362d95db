use std::sync::Arc;

use crate::config::ServerConfig;
use crate::monitor::MonitorState;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wardwatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory monitoring state (engine, alert buffer, cooling override).
    pub monitor: Arc<MonitorState>,
}
