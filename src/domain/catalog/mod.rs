//! Response catalog module.
//!
//! Static, read-only recommendation data: the recommendation-by-profile
//! table, industry insights, competitor blurbs, and the per-(stage,
//! interest) difficulty/time/cost tables. Missing keys always fall back
//! to documented defaults.

mod recommendation;
mod tables;

pub use recommendation::{
    CompetitorAnalysis, Difficulty, IndustryInsight, Recommendation, Resource, ResourceKind,
    UseCase,
};
pub use tables::{
    base_recommendation, competitor_analysis, cost_estimate, implementation_difficulty,
    industry_insights, time_to_value, DEFAULT_RECOMMENDATION_KEY,
};
