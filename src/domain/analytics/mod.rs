//! Engagement analytics domain.
//!
//! Session and interaction records, lead scoring, behavioral sentiment,
//! and the aggregate-statistics arithmetic behind the admin dashboard.
//! Pure value types and functions; the tracking store adapter owns all
//! state.

mod enrichment;
mod interaction;
mod session;
mod stats;

pub use enrichment::{
    BuyingStage, CompanyProfile, EngagementHistory, EnrichedLead, EnrichmentStatus,
};
pub use interaction::{Interaction, InteractionKind};
pub use session::{EngagementMetrics, SessionSignals, Sentiment, VisitorSession};
pub use stats::{aggregate, funnel, AggregateStats, FunnelData, HIGH_VALUE_LEAD_THRESHOLD};
