//! Analytics event sink port.
//!
//! Narrow interface the widget reports engagement through. The core
//! treats analytics as an external side channel: record an interaction,
//! open or close a session, nothing else.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::analytics::InteractionKind;
use crate::domain::conversation::VisitorProfile;
use crate::domain::foundation::{DomainError, SessionId};

/// Port for reporting engagement events.
///
/// Implementations must ensure:
/// - Appends are atomic per call; no cross-call ordering is required
/// - `record` against an unknown session fails with `SessionNotFound`
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Opens a tracking session and records its `chat_start`.
    async fn start_session(&self, referrer: Option<String>) -> Result<SessionId, DomainError>;

    /// Appends one interaction to a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session was never started
    async fn record(
        &self,
        session_id: &SessionId,
        kind: InteractionKind,
        data: HashMap<String, Value>,
    ) -> Result<(), DomainError>;

    /// Closes a session, capturing the profile and computing its lead
    /// score and sentiment. Records `chat_end`.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session was never started
    async fn end_session(
        &self,
        session_id: &SessionId,
        profile: &VisitorProfile,
        completed_flow: bool,
    ) -> Result<(), DomainError>;

    /// Adds elapsed dwell time to a session's engagement metrics.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session was never started
    async fn add_dwell_time(
        &self,
        session_id: &SessionId,
        seconds: f64,
    ) -> Result<(), DomainError>;
}
