//! Recommendation value types.
//!
//! Constructed once at step 5 resolution and immutable afterwards; the
//! recommendations panel renders these directly, so the wire shapes use
//! camelCase field names.

use serde::{Deserialize, Serialize};

/// How hard a use-case area is to stand up at a given journey stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

/// A suggested use case, linked out to a demo page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Higher number = higher priority.
    pub priority: u8,
}

/// The kind of a suggested resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Tutorial,
    Blog,
    Demo,
    Template,
    Webinar,
}

/// A suggested resource, linked out to content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Higher number = more popular.
    pub popularity: u8,
}

/// A canned competitor blurb for one class of AI solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// A canned industry statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsight {
    pub title: String,
    pub insight: String,
}

/// The assembled readiness assessment shown on completion.
///
/// Produced exactly once per completed conversation; re-rendering must
/// not recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Readiness score, 0-100.
    pub maturity_score: u8,
    pub maturity_insight: String,
    /// Sorted by priority, highest first.
    pub use_cases: Vec<UseCase>,
    /// Sorted by popularity, highest first.
    pub resources: Vec<Resource>,
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_insights: Option<Vec<IndustryInsight>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<Vec<CompetitorAnalysis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_to_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_difficulty: Option<Difficulty>,
}

impl Recommendation {
    /// Sorts use cases by priority and resources by popularity,
    /// both descending. Stable within equal ranks.
    pub fn sort_by_rank(&mut self) {
        self.use_cases.sort_by(|a, b| b.priority.cmp(&a.priority));
        self.resources.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case(title: &str, priority: u8) -> UseCase {
        UseCase {
            title: title.to_string(),
            description: String::new(),
            link: "#".to_string(),
            priority,
        }
    }

    #[test]
    fn sort_by_rank_orders_use_cases_descending() {
        let mut rec = Recommendation {
            maturity_score: 35,
            maturity_insight: String::new(),
            use_cases: vec![use_case("low", 3), use_case("high", 10), use_case("mid", 7)],
            resources: vec![],
            next_steps: vec![],
            industry_insights: None,
            competitor_analysis: None,
            estimated_time_to_value: None,
            estimated_cost: None,
            implementation_difficulty: None,
        };
        rec.sort_by_rank();
        let titles: Vec<_> = rec.use_cases.iter().map(|u| u.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let rec = Recommendation {
            maturity_score: 20,
            maturity_insight: "early".to_string(),
            use_cases: vec![],
            resources: vec![],
            next_steps: vec![],
            industry_insights: None,
            competitor_analysis: None,
            estimated_time_to_value: Some("2-4 weeks".to_string()),
            estimated_cost: None,
            implementation_difficulty: Some(Difficulty::Low),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"maturityScore\":20"));
        assert!(json.contains("\"estimatedTimeToValue\":\"2-4 weeks\""));
        assert!(json.contains("\"implementationDifficulty\":\"Low\""));
        assert!(!json.contains("estimatedCost"));
    }

    #[test]
    fn resource_kind_serializes_to_snake_case_type_field() {
        let res = Resource {
            title: "Guide".to_string(),
            description: String::new(),
            link: "#".to_string(),
            kind: ResourceKind::Tutorial,
            popularity: 90,
        };
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains("\"type\":\"tutorial\""));
    }
}
