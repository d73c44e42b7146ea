//! Enriched lead value types.
//!
//! The shape of third-party lead enrichment data shown on the admin
//! lead panel. Generation is an adapter concern; these are plain
//! serializable records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Buying stage inferred from the intent score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuyingStage {
    Awareness,
    Consideration,
    Decision,
    Unknown,
}

impl BuyingStage {
    /// Maps an intent score to a buying stage: above 75 is decision,
    /// above 40 is consideration, otherwise awareness.
    pub fn from_intent_score(score: u8) -> Self {
        match score {
            s if s > 75 => Self::Decision,
            s if s > 40 => Self::Consideration,
            _ => Self::Awareness,
        }
    }
}

/// Outcome of a simulated enrichment lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    Complete,
    Partial,
    Failed,
}

/// Firmographic data attached to an enriched lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub website: String,
    pub industry: String,
    pub size: String,
    pub funding: String,
    pub founded: u16,
    pub description: String,
    pub headquarters: String,
    pub linkedin_url: String,
    pub employees: u32,
    pub revenue: String,
    pub technologies: Vec<String>,
}

/// Site and email engagement history for an enriched lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementHistory {
    pub first_visit: Timestamp,
    pub last_visit: Timestamp,
    pub visits: u32,
    pub pages_viewed: u32,
    pub downloaded_resources: Vec<String>,
    pub webinars_attended: Vec<String>,
    pub emails_opened: u32,
    pub emails_clicked: u32,
    /// Percentage, 0-100.
    pub chat_completion_rate: u8,
}

/// The full enriched lead record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedLead {
    pub email: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub linkedin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    pub last_active: Timestamp,
    pub company: CompanyProfile,
    pub engagement: EngagementHistory,
    /// 1-100.
    pub intent_score: u8,
    pub buying_stage: BuyingStage,
    pub enrichment_source: String,
    pub enrichment_date: Timestamp,
    pub enrichment_status: EnrichmentStatus,
    /// Percentage, 70-100.
    pub match_confidence: u8,
}
