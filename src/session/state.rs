//! Session state container
//!
//! Holds the counter, the saved filter settings, and the chat log. Counter
//! and filters are written through to the store on every change; the chat
//! log lives only in memory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::error::{SessionError, SessionResult};
use super::store::KeyValueStore;
use crate::data::{Filters, ALL_CATEGORIES};

/// Namespace key the session blob is stored under
pub const STORE_KEY: &str = "showcase-store";

/// Threshold the filter controls start at
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Snapshot of everything the session holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub counter: i64,
    pub filters: Filters,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            counter: 0,
            filters: Filters::new(DEFAULT_THRESHOLD).category(ALL_CATEGORIES),
            messages: Vec::new(),
        }
    }
}

/// The subset of state written to the store
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    counter: i64,
    filters: Filters,
}

/// State container bound to a persistent store
pub struct Session {
    state: SessionState,
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Load persisted state from `store`, falling back to defaults when
    /// nothing usable is stored.
    pub fn load(store: Arc<dyn KeyValueStore>) -> SessionResult<Self> {
        let mut state = SessionState::default();

        match store.load(STORE_KEY)? {
            Some(blob) => match serde_json::from_value::<PersistedState>(blob) {
                Ok(persisted) => {
                    state.counter = persisted.counter;
                    state.filters = persisted.filters;
                    tracing::info!(counter = state.counter, "Restored session state");
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session state: {}", e);
                }
            },
            None => tracing::debug!("No stored session state, using defaults"),
        }

        Ok(Self { state, store })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn counter(&self) -> i64 {
        self.state.counter
    }

    pub fn filters(&self) -> &Filters {
        &self.state.filters
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.state.messages
    }

    /// Verify the backing store is readable
    pub fn check_store(&self) -> SessionResult<()> {
        self.store.load(STORE_KEY).map(|_| ())
    }

    pub fn increment(&mut self) -> SessionResult<i64> {
        self.set_counter(self.state.counter.saturating_add(1))
    }

    pub fn decrement(&mut self) -> SessionResult<i64> {
        self.set_counter(self.state.counter.saturating_sub(1))
    }

    pub fn reset(&mut self) -> SessionResult<i64> {
        self.set_counter(0)
    }

    pub fn set_filters(&mut self, filters: Filters) -> SessionResult<()> {
        self.save(self.state.counter, &filters)?;
        self.state.filters = filters;
        Ok(())
    }

    /// In-memory state only changes once the store accepted the new value
    fn set_counter(&mut self, counter: i64) -> SessionResult<i64> {
        self.save(counter, &self.state.filters)?;
        self.state.counter = counter;
        Ok(counter)
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.state.messages.push(message);
    }

    pub fn clear_messages(&mut self) {
        self.state.messages.clear();
    }

    /// Record a user message and the assistant's echo of it
    pub fn chat(&mut self, input: &str) -> SessionResult<ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let reply = ChatMessage::assistant(format!("Echo: {}", input));
        self.add_message(ChatMessage::user(input));
        self.add_message(reply.clone());
        Ok(reply)
    }

    fn save(&self, counter: i64, filters: &Filters) -> SessionResult<()> {
        let persisted = PersistedState {
            counter,
            filters: filters.clone(),
        };
        self.store.save(STORE_KEY, serde_json::to_value(persisted)?)
    }
}
