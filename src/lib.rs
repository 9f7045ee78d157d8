//! # Showcase
//!
//! Backend for a widget showcase: synthetic chart and table data, a
//! threshold/category filter, and a small persisted client session, all
//! served over a REST API.
//!
//! ## Modules
//!
//! - [`data`]: Dataset generators and the record filter
//! - [`session`]: Counter, saved filters, and chat log with key-value persistence
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use showcase::data::{bar_data, DataGenerator, Filters};
//!
//! // Reproducible random walk over the last 30 days
//! let mut generator = DataGenerator::seeded(42);
//! let series = generator.time_series(30).unwrap();
//! assert_eq!(series.len(), 30);
//!
//! // Keep bars of at least 50
//! let tall = Filters::new(50.0).apply(bar_data());
//! assert_eq!(tall.len(), 2);
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod session;

// Re-export top-level types for convenience
pub use data::{
    BarDatum, Category, DataError, DataGenerator, DataPoint, DataResult, Dataset, DatasetKind,
    Employee, EmployeeSummary, Filters, JsonRecord, Record, TimeSeriesPoint,
};

pub use session::{
    ChatMessage, FileStore, KeyValueStore, MemoryStore, Role, Session, SessionError,
    SessionState,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, GeneratorConfig, LoggingConfig, SessionConfig};
