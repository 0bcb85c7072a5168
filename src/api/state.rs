//! Application state for the pay run desk API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::error::{DeskError, DeskResult};
use crate::models::Session;
use crate::session::SessionStore;
use crate::workflow::PayRunService;

/// Shared application state.
///
/// Holds the pay run workflow and the store of the operator session the
/// desk acts for.
#[derive(Clone)]
pub struct AppState {
    service: PayRunService,
    sessions: Arc<SessionStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(service: PayRunService, sessions: SessionStore) -> Self {
        Self {
            service,
            sessions: Arc::new(sessions),
        }
    }

    /// Returns the pay run workflow.
    pub fn service(&self) -> &PayRunService {
        &self.service
    }

    /// Returns the operator session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Reads the persisted operator session on the blocking thread pool.
    pub async fn current_session(&self) -> DeskResult<Option<Session>> {
        let sessions = Arc::clone(&self.sessions);
        tokio::task::spawn_blocking(move || sessions.init())
            .await
            .map_err(|err| DeskError::Session {
                message: format!("session read task failed: {}", err),
            })?
    }
}
