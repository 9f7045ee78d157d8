//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::{Config, GeneratorConfig};
use crate::session::{FileStore, KeyValueStore, MemoryStore, Session, SessionResult};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Persisted client session (counter, filters, chat log)
    pub session: Arc<RwLock<Session>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an already loaded session
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(session)),
            start_time: Instant::now(),
        }
    }

    /// Create state, loading the session from the store the config selects
    pub fn from_config(config: Config) -> SessionResult<Self> {
        let store: Arc<dyn KeyValueStore> = if config.session.persist {
            tracing::info!("Session data directory: {}", config.session.data_dir);
            Arc::new(FileStore::new(&config.session.data_dir))
        } else {
            tracing::info!("Session persistence disabled, using in-memory store");
            Arc::new(MemoryStore::new())
        };

        let session = Session::load(store)?;
        Ok(Self::new(config, session))
    }

    /// Create state with an in-memory session store
    pub fn in_memory(config: Config) -> SessionResult<Self> {
        let session = Session::load(Arc::new(MemoryStore::new()))?;
        Ok(Self::new(config, session))
    }

    /// Dataset generation limits
    pub fn generator(&self) -> &GeneratorConfig {
        &self.config.generator
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
