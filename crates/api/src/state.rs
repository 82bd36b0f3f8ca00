use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use tokio::sync::RwLock;

use filmdex_core::store::FilmStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`). The film collection sits
/// behind `tokio::sync::RwLock` so handlers await the lock without blocking
/// the runtime; no handler holds it across an await point.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory film collection.
    pub store: Arc<RwLock<FilmStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Running count of GET requests served (see `middleware::counter`).
    pub get_requests: Arc<AtomicU64>,
}

impl AppState {
    /// Build state around the seeded five-film collection.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(FilmStore::with_seed_films())),
            config: Arc::new(config),
            get_requests: Arc::new(AtomicU64::new(0)),
        }
    }
}
