use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ObjectStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: regportal_db::DbPool,
    /// Server configuration (JWT secrets, payment key, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Centralized event bus for publishing portal events.
    pub event_bus: Arc<regportal_events::EventBus>,
    /// Backing store for uploaded candidate documents.
    pub storage: Arc<dyn ObjectStorage>,
}
