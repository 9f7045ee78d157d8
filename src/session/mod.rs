//! Client session state
//!
//! An explicit state container (counter, filter settings, chat log) with a
//! load/save boundary to a key-value store:
//!
//! - **state**: `Session` and its mutation operations
//! - **store**: `KeyValueStore` with file-backed and in-memory implementations
//! - **error**: Error types

pub mod error;
pub mod state;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use state::{ChatMessage, Role, Session, SessionState, DEFAULT_THRESHOLD, STORE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, SESSION_FILE};
