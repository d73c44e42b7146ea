//! Lead enrichment port.

use async_trait::async_trait;

use crate::domain::analytics::EnrichedLead;
use crate::domain::foundation::{DomainError, SessionId};

/// Port for enriching a captured lead with firmographic data.
///
/// Implementations cache per session: enriching the same session twice
/// returns the same record.
#[async_trait]
pub trait LeadEnricher: Send + Sync {
    /// Enriches the lead behind a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session was never started
    async fn enrich(&self, session_id: &SessionId) -> Result<EnrichedLead, DomainError>;
}
