//! Simulated lead capture form.
//!
//! Two-stage submission from the recommendations panel: email first,
//! then name and company. There is no backend call; each stage resolves
//! to success after a fixed delay and is logged to the analytics sink.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

use crate::domain::analytics::InteractionKind;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::EventSink;

/// The lead capture form for one session.
pub struct LeadCaptureForm {
    sink: Arc<dyn EventSink>,
    session_id: SessionId,
    submit_delay: Duration,
    captured_email: Mutex<Option<String>>,
}

impl LeadCaptureForm {
    pub fn new(sink: Arc<dyn EventSink>, session_id: SessionId, submit_delay: Duration) -> Self {
        Self {
            sink,
            session_id,
            submit_delay,
            captured_email: Mutex::new(None),
        }
    }

    /// Stage one: submit the visitor's email.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the email is empty or has no `@`
    pub async fn submit_email(&self, email: &str) -> Result<(), DomainError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email", "A valid email is required"));
        }

        tokio::time::sleep(self.submit_delay).await;

        self.sink
            .record(
                &self.session_id,
                InteractionKind::EmailCollected,
                HashMap::from([("email".to_string(), Value::from(email))]),
            )
            .await?;

        *self
            .captured_email
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::SinkError, "Lead form lock poisoned"))? =
            Some(email.to_string());

        info!(session_id = %self.session_id, "email captured");
        Ok(())
    }

    /// Stage two: submit name and company to qualify the lead.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if either field is empty, or if stage one
    ///   has not completed
    pub async fn submit_details(&self, name: &str, company: &str) -> Result<(), DomainError> {
        let name = name.trim();
        let company = company.trim();
        if name.is_empty() || company.is_empty() {
            return Err(DomainError::validation(
                "details",
                "Name and company are required",
            ));
        }

        let email = self
            .captured_email
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::SinkError, "Lead form lock poisoned"))?
            .clone()
            .ok_or_else(|| {
                DomainError::validation("email", "Email must be submitted before details")
            })?;

        tokio::time::sleep(self.submit_delay).await;

        self.sink
            .record(
                &self.session_id,
                InteractionKind::LeadQualified,
                HashMap::from([
                    ("email".to_string(), Value::from(email)),
                    ("name".to_string(), Value::from(name)),
                    ("company".to_string(), Value::from(company)),
                ]),
            )
            .await?;

        info!(session_id = %self.session_id, "lead qualified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analytics::TrackingStore;

    async fn form() -> (Arc<TrackingStore>, LeadCaptureForm) {
        let store = Arc::new(TrackingStore::new());
        let session_id = store.start_session(None).await.unwrap();
        let form = LeadCaptureForm::new(store.clone(), session_id, Duration::from_millis(10));
        (store, form)
    }

    #[tokio::test]
    async fn both_stages_log_to_the_sink() {
        let (store, form) = form().await;
        form.submit_email("visitor@example.com").await.unwrap();
        form.submit_details("Visitor Name", "Example Inc").await.unwrap();

        let funnel = store.funnel().unwrap();
        assert_eq!(funnel.provided_email, 1);
        assert_eq!(funnel.qualified_leads, 1);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_logging() {
        let (store, form) = form().await;
        assert!(form.submit_email("not-an-email").await.is_err());
        assert!(form.submit_email("   ").await.is_err());
        assert_eq!(store.funnel().unwrap().provided_email, 0);
    }

    #[tokio::test]
    async fn details_require_email_first() {
        let (_, form) = form().await;
        let err = form.submit_details("Name", "Company").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn qualification_carries_the_captured_email() {
        let (store, form) = form().await;
        form.submit_email("lead@example.com").await.unwrap();
        form.submit_details("Lead", "Corp").await.unwrap();

        let session_id = store.sessions().unwrap()[0].id;
        let interactions = store.interactions_for(&session_id).unwrap();
        let qualified = interactions
            .iter()
            .find(|i| i.kind() == InteractionKind::LeadQualified)
            .unwrap();
        assert_eq!(qualified.data_str("email"), Some("lead@example.com"));
    }
}
