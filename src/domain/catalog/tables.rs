//! Static catalog lookup tables.
//!
//! Data is fixed at compile time and never mutated. Every lookup has a
//! documented fallback so recommendation assembly can never fail.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::recommendation::{
    CompetitorAnalysis, Difficulty, IndustryInsight, Recommendation, Resource, ResourceKind,
    UseCase,
};

/// Key of the guaranteed fallback entry in the recommendation table.
pub const DEFAULT_RECOMMENDATION_KEY: &str = "default";

fn use_case(title: &str, description: &str, link: &str, priority: u8) -> UseCase {
    UseCase {
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        priority,
    }
}

fn resource(title: &str, description: &str, link: &str, kind: ResourceKind, popularity: u8) -> Resource {
    Resource {
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        kind,
        popularity,
    }
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn insight(title: &str, text: &str) -> IndustryInsight {
    IndustryInsight {
        title: title.to_string(),
        insight: text.to_string(),
    }
}

fn competitor(name: &str, strengths: &[&str], weaknesses: &[&str]) -> CompetitorAnalysis {
    CompetitorAnalysis {
        name: name.to_string(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        weaknesses: weaknesses.iter().map(|s| s.to_string()).collect(),
    }
}

static INDUSTRY_INSIGHTS: Lazy<HashMap<&'static str, Vec<IndustryInsight>>> = Lazy::new(|| {
    HashMap::from([
        (
            "technology",
            vec![
                insight(
                    "AI Adoption in Technology Companies",
                    "Tech companies implementing AI are seeing a 23% increase in developer productivity and 35% reduction in QA time.",
                ),
                insight(
                    "Key AI Trends in Tech",
                    "The most successful tech companies are using AI for code generation, automated testing, and customer behavior analysis.",
                ),
            ],
        ),
        (
            "financial",
            vec![
                insight(
                    "AI in Financial Services",
                    "Financial institutions using AI chatbots report a 40% reduction in service costs and 25% improvement in customer satisfaction.",
                ),
                insight(
                    "Risk Management Applications",
                    "AI-powered risk assessment models are 68% more accurate at detecting fraud than traditional methods.",
                ),
            ],
        ),
        (
            "healthcare",
            vec![
                insight(
                    "Healthcare AI Applications",
                    "AI diagnostics tools are showing 93% accuracy rates in early detection scenarios, compared to 87% for human-only diagnosis.",
                ),
                insight(
                    "Patient Experience Enhancement",
                    "Healthcare providers using AI for patient management report 32% faster appointment scheduling and 27% reduction in administrative costs.",
                ),
            ],
        ),
        (
            "retail",
            vec![
                insight(
                    "AI in Retail",
                    "Retailers using AI for inventory management reduce out-of-stock incidents by 45% and overstock by 32%.",
                ),
                insight(
                    "Personalization Impact",
                    "AI-driven product recommendations generate 35% higher conversion rates and 25% larger average order values.",
                ),
            ],
        ),
        (
            "manufacturing",
            vec![
                insight(
                    "Manufacturing AI Applications",
                    "Predictive maintenance AI systems reduce unplanned downtime by 39% and maintenance costs by 29% in manufacturing facilities.",
                ),
                insight(
                    "Quality Control Improvements",
                    "AI-powered visual inspection systems detect 97% of defects compared to 83% with traditional inspection methods.",
                ),
            ],
        ),
    ])
});

static CHATBOT_COMPETITORS: Lazy<Vec<CompetitorAnalysis>> = Lazy::new(|| {
    vec![
        competitor(
            "Traditional Chatbot Solutions",
            &["Lower initial cost", "Simpler implementation"],
            &[
                "Limited understanding",
                "Frustrating user experience",
                "Requires constant manual updates",
            ],
        ),
        competitor(
            "Generic AI Platforms",
            &["Broad capabilities", "Name recognition"],
            &[
                "Lacks industry-specific training",
                "Difficult to customize",
                "Higher error rates for specialized queries",
            ],
        ),
    ]
});

static ANALYTICS_COMPETITORS: Lazy<Vec<CompetitorAnalysis>> = Lazy::new(|| {
    vec![
        competitor(
            "Traditional BI Tools",
            &["Established workflows", "Familiar to analysts"],
            &[
                "Requires manual query building",
                "Limited predictive capabilities",
                "Slow insight generation",
            ],
        ),
        competitor(
            "Generic AI Analytics",
            &["Automated reporting", "Natural language queries"],
            &[
                "Black box reasoning",
                "Difficulty with complex data relationships",
                "Lacks domain expertise",
            ],
        ),
    ]
});

static CONTENT_COMPETITORS: Lazy<Vec<CompetitorAnalysis>> = Lazy::new(|| {
    vec![
        competitor(
            "Template-Based Content Systems",
            &["Consistent brand voice", "Predictable output"],
            &["Limited variety", "Time-consuming to create", "Static and inflexible"],
        ),
        competitor(
            "Generic AI Content Tools",
            &["Fast content generation", "Wide topic coverage"],
            &[
                "Inconsistent brand voice",
                "Factual inaccuracies",
                "Limited understanding of marketing strategy",
            ],
        ),
    ]
});

static RECOMMENDATIONS: Lazy<HashMap<&'static str, Recommendation>> = Lazy::new(|| {
    HashMap::from([
        (
            "founder-starting-customer_support",
            Recommendation {
                maturity_score: 20,
                maturity_insight: "You're at the beginning of your AI journey with great potential for customer support improvements.".to_string(),
                use_cases: vec![
                    use_case(
                        "AI Customer Support Assistant",
                        "Deploy an AI agent that can handle common customer inquiries, reducing response time by up to 70%.",
                        "#customer-support-demo",
                        10,
                    ),
                    use_case(
                        "Knowledge Base Enhancement",
                        "Use AI to improve your knowledge base by identifying gaps and generating helpful content.",
                        "#knowledge-base-demo",
                        8,
                    ),
                    use_case(
                        "Customer Sentiment Analysis",
                        "Implement AI-powered sentiment analysis to identify customer satisfaction trends and issues.",
                        "#sentiment-analysis",
                        6,
                    ),
                ],
                resources: vec![
                    resource(
                        "Executive's Guide to AI Implementation",
                        "A comprehensive guide for business leaders implementing AI for the first time.",
                        "#executive-guide",
                        ResourceKind::Tutorial,
                        95,
                    ),
                    resource(
                        "Customer Support ROI Calculator",
                        "Calculate the potential return on investment from AI-powered customer support.",
                        "#roi-calculator",
                        ResourceKind::Template,
                        90,
                    ),
                    resource(
                        "Quick-Start Support Agent Template",
                        "A ready-to-customize template for deploying your first customer support AI agent.",
                        "#quick-start-template",
                        ResourceKind::Template,
                        85,
                    ),
                ],
                next_steps: steps(&[
                    "Schedule a discovery call with our AI consultants",
                    "Identify your top 3 customer support challenges",
                    "Explore our AI customer support template",
                    "Consider a 30-day pilot program",
                ]),
                industry_insights: None,
                competitor_analysis: Some(CHATBOT_COMPETITORS.clone()),
                estimated_time_to_value: Some("2-4 weeks".to_string()),
                estimated_cost: Some("$5,000-$15,000".to_string()),
                implementation_difficulty: Some(Difficulty::Low),
            },
        ),
        (
            "technical-exploring-data_analysis",
            Recommendation {
                maturity_score: 40,
                maturity_insight: "You have a solid technical foundation and are well-positioned to implement data analysis AI solutions.".to_string(),
                use_cases: vec![
                    use_case(
                        "Automated Data Insights Agent",
                        "Deploy an AI system that continuously analyzes your data and surfaces valuable insights.",
                        "#data-insights-demo",
                        10,
                    ),
                    use_case(
                        "Predictive Analytics Implementation",
                        "Use AI to predict future trends based on historical data across your business.",
                        "#predictive-analytics",
                        9,
                    ),
                    use_case(
                        "Anomaly Detection System",
                        "Implement AI-powered anomaly detection to identify unusual patterns in your business data.",
                        "#anomaly-detection",
                        8,
                    ),
                ],
                resources: vec![
                    resource(
                        "Technical Implementation Playbook",
                        "Step-by-step guide for CTOs to implement AI data analysis tools.",
                        "#implementation-guide",
                        ResourceKind::Tutorial,
                        98,
                    ),
                    resource(
                        "Data Analysis Architecture Blueprint",
                        "Reference architecture for building scalable AI data analysis systems.",
                        "#architecture-blueprint",
                        ResourceKind::Blog,
                        92,
                    ),
                    resource(
                        "AI Integration Patterns Webinar",
                        "Technical deep-dive on integrating AI analysis into existing data pipelines.",
                        "#integration-webinar",
                        ResourceKind::Webinar,
                        88,
                    ),
                ],
                next_steps: steps(&[
                    "Audit your current data infrastructure",
                    "Identify integration points for AI capabilities",
                    "Review our API documentation",
                    "Start with a focused proof-of-concept",
                ]),
                industry_insights: None,
                competitor_analysis: Some(ANALYTICS_COMPETITORS.clone()),
                estimated_time_to_value: Some("3-6 weeks".to_string()),
                estimated_cost: Some("$10,000-$25,000".to_string()),
                implementation_difficulty: Some(Difficulty::Medium),
            },
        ),
        (
            "marketing-piloting-marketing",
            Recommendation {
                maturity_score: 60,
                maturity_insight: "You're making good progress with AI content generation and ready to expand your capabilities.".to_string(),
                use_cases: vec![
                    use_case(
                        "Multi-channel Content Generation",
                        "Scale your content creation across all marketing channels with consistent messaging.",
                        "#content-generation-demo",
                        10,
                    ),
                    use_case(
                        "Personalized Campaign Optimizer",
                        "Use AI to automatically optimize campaigns based on performance data and user behavior.",
                        "#campaign-optimizer",
                        9,
                    ),
                    use_case(
                        "Audience Insights Generator",
                        "Apply AI to identify audience trends and content preferences to guide your strategy.",
                        "#audience-insights",
                        8,
                    ),
                ],
                resources: vec![
                    resource(
                        "AI for Modern Marketing Teams",
                        "Comprehensive guide to implementing AI across your marketing operations.",
                        "#marketing-ai-guide",
                        ResourceKind::Tutorial,
                        96,
                    ),
                    resource(
                        "Content Generation Case Studies",
                        "Real-world examples of marketing teams achieving 10x productivity with AI.",
                        "#case-studies",
                        ResourceKind::Blog,
                        90,
                    ),
                    resource(
                        "Campaign Optimization Template",
                        "Ready-to-use template for implementing AI-driven marketing campaign optimization.",
                        "#campaign-template",
                        ResourceKind::Template,
                        85,
                    ),
                ],
                next_steps: steps(&[
                    "Expand your pilot to include more content types",
                    "Integrate analytics to measure content performance",
                    "Train team members on advanced AI prompting",
                    "Set up A/B testing for AI vs human content",
                ]),
                industry_insights: None,
                competitor_analysis: Some(CONTENT_COMPETITORS.clone()),
                estimated_time_to_value: Some("1 week".to_string()),
                estimated_cost: Some("$1,500-$7,000".to_string()),
                implementation_difficulty: Some(Difficulty::Low),
            },
        ),
        (
            DEFAULT_RECOMMENDATION_KEY,
            Recommendation {
                maturity_score: 35,
                maturity_insight: "Based on your responses, you're making progress on your AI journey with opportunities to accelerate adoption.".to_string(),
                use_cases: vec![
                    use_case(
                        "Custom AI Agent Development",
                        "Build specialized AI agents tailored to your specific business needs and workflows.",
                        "#custom-agent-demo",
                        10,
                    ),
                    use_case(
                        "Knowledge Management Solution",
                        "Implement an AI system to organize, search, and leverage your organizational knowledge.",
                        "#knowledge-management",
                        8,
                    ),
                    use_case(
                        "Process Automation with AI",
                        "Identify and automate repetitive tasks in your business workflows using AI agents.",
                        "#process-automation",
                        7,
                    ),
                ],
                resources: vec![
                    resource(
                        "AI Implementation Roadmap",
                        "A step-by-step guide to implementing AI solutions in your organization.",
                        "#implementation-roadmap",
                        ResourceKind::Tutorial,
                        94,
                    ),
                    resource(
                        "Platform Overview",
                        "Learn how the platform can accelerate your AI journey with pre-built components.",
                        "#platform-overview",
                        ResourceKind::Demo,
                        90,
                    ),
                    resource(
                        "AI Strategy Workshop Materials",
                        "Templates and exercises to help you develop your organization's AI strategy.",
                        "#strategy-workshop",
                        ResourceKind::Template,
                        86,
                    ),
                ],
                next_steps: steps(&[
                    "Define your AI strategy and priorities",
                    "Identify quick-win opportunities",
                    "Schedule a demo with our solutions team",
                    "Explore our template library for your use case",
                ]),
                industry_insights: None,
                competitor_analysis: None,
                estimated_time_to_value: Some("4-8 weeks".to_string()),
                estimated_cost: Some("$10,000-$25,000".to_string()),
                implementation_difficulty: Some(Difficulty::Medium),
            },
        ),
    ])
});

/// Looks up the base recommendation for a profile key, falling back to
/// the guaranteed default entry.
pub fn base_recommendation(profile_key: &str) -> &'static Recommendation {
    RECOMMENDATIONS
        .get(profile_key)
        .unwrap_or_else(|| &RECOMMENDATIONS[DEFAULT_RECOMMENDATION_KEY])
}

/// Looks up industry insights, falling back to the technology entry
/// for industries without one (including `other`).
pub fn industry_insights(industry: &str) -> &'static [IndustryInsight] {
    INDUSTRY_INSIGHTS
        .get(industry)
        .unwrap_or_else(|| &INDUSTRY_INSIGHTS["technology"])
}

/// Looks up the competitor blurbs for an interest area.
pub fn competitor_analysis(interest: &str) -> &'static [CompetitorAnalysis] {
    match interest {
        "marketing" => &CONTENT_COMPETITORS,
        "data_analysis" => &ANALYTICS_COMPETITORS,
        _ => &CHATBOT_COMPETITORS,
    }
}

/// Normalizes an interest into the five tabled columns, with
/// `data_analysis` as the fallback column.
fn tabled_interest(interest: &str) -> &str {
    match interest {
        "customer_support" | "marketing" | "data_analysis" | "product" | "knowledge" => interest,
        _ => "data_analysis",
    }
}

/// Difficulty estimate for a (journey stage, interest) pair.
///
/// Unknown stages fall back to `Medium`.
pub fn implementation_difficulty(stage: &str, interest: &str) -> Difficulty {
    use Difficulty::*;
    match (stage, tabled_interest(interest)) {
        ("starting", "customer_support") => Low,
        ("starting", "marketing") => Low,
        ("starting", "data_analysis") => Medium,
        ("starting", "product") => High,
        ("starting", "knowledge") => Medium,
        ("exploring", "customer_support") => Low,
        ("exploring", "marketing") => Low,
        ("exploring", "data_analysis") => Medium,
        ("exploring", "product") => Medium,
        ("exploring", "knowledge") => Low,
        ("piloting", "product") => Medium,
        ("piloting", _) => Low,
        ("scaling", "product") => High,
        ("scaling", _) => Medium,
        _ => Medium,
    }
}

/// Time-to-value estimate for a (journey stage, interest) pair.
///
/// Unknown stages fall back to `4-8 weeks`.
pub fn time_to_value(stage: &str, interest: &str) -> &'static str {
    match (stage, tabled_interest(interest)) {
        ("starting", "customer_support") => "2-4 weeks",
        ("starting", "marketing") => "1-3 weeks",
        ("starting", "data_analysis") => "4-8 weeks",
        ("starting", "product") => "8-12 weeks",
        ("starting", "knowledge") => "3-6 weeks",
        ("exploring", "customer_support") => "1-3 weeks",
        ("exploring", "marketing") => "1-2 weeks",
        ("exploring", "data_analysis") => "3-6 weeks",
        ("exploring", "product") => "6-10 weeks",
        ("exploring", "knowledge") => "2-4 weeks",
        ("piloting", "customer_support") => "1-2 weeks",
        ("piloting", "marketing") => "1 week",
        ("piloting", "data_analysis") => "2-4 weeks",
        ("piloting", "product") => "4-8 weeks",
        ("piloting", "knowledge") => "1-3 weeks",
        ("scaling", "customer_support") => "2-6 weeks",
        ("scaling", "marketing") => "2-4 weeks",
        ("scaling", "data_analysis") => "4-8 weeks",
        ("scaling", "product") => "6-12 weeks",
        ("scaling", "knowledge") => "3-6 weeks",
        _ => "4-8 weeks",
    }
}

/// Cost estimate for a (journey stage, interest) pair.
///
/// Unknown stages fall back to `$10,000-$25,000`.
pub fn cost_estimate(stage: &str, interest: &str) -> &'static str {
    match (stage, tabled_interest(interest)) {
        ("starting", "customer_support") => "$5,000-$15,000",
        ("starting", "marketing") => "$3,000-$10,000",
        ("starting", "data_analysis") => "$15,000-$30,000",
        ("starting", "product") => "$25,000-$50,000",
        ("starting", "knowledge") => "$10,000-$25,000",
        ("exploring", "customer_support") => "$3,000-$12,000",
        ("exploring", "marketing") => "$2,000-$8,000",
        ("exploring", "data_analysis") => "$10,000-$25,000",
        ("exploring", "product") => "$20,000-$40,000",
        ("exploring", "knowledge") => "$8,000-$20,000",
        ("piloting", "customer_support") => "$2,000-$10,000",
        ("piloting", "marketing") => "$1,500-$7,000",
        ("piloting", "data_analysis") => "$8,000-$20,000",
        ("piloting", "product") => "$15,000-$35,000",
        ("piloting", "knowledge") => "$5,000-$15,000",
        ("scaling", "customer_support") => "$10,000-$30,000",
        ("scaling", "marketing") => "$8,000-$25,000",
        ("scaling", "data_analysis") => "$20,000-$50,000",
        ("scaling", "product") => "$30,000-$100,000",
        ("scaling", "knowledge") => "$15,000-$40,000",
        _ => "$10,000-$25,000",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_profile_keys_resolve_to_their_entries() {
        let rec = base_recommendation("founder-starting-customer_support");
        assert_eq!(rec.maturity_score, 20);
        let rec = base_recommendation("technical-exploring-data_analysis");
        assert_eq!(rec.maturity_score, 40);
        let rec = base_recommendation("marketing-piloting-marketing");
        assert_eq!(rec.maturity_score, 60);
    }

    #[test]
    fn unknown_profile_keys_fall_back_to_default() {
        let rec = base_recommendation("hr-scaling-knowledge");
        assert_eq!(rec.maturity_score, 35);
        let rec = base_recommendation("--");
        assert_eq!(rec.maturity_score, 35);
    }

    #[test]
    fn default_entry_always_exists() {
        assert!(RECOMMENDATIONS.contains_key(DEFAULT_RECOMMENDATION_KEY));
    }

    #[test]
    fn industry_insights_fall_back_to_technology() {
        let tech = industry_insights("technology");
        assert_eq!(industry_insights("other"), tech);
        assert_ne!(industry_insights("healthcare"), tech);
    }

    #[test]
    fn competitor_analysis_covers_all_interests() {
        assert_eq!(competitor_analysis("customer_support")[0].name, "Traditional Chatbot Solutions");
        assert_eq!(competitor_analysis("data_analysis")[0].name, "Traditional BI Tools");
        assert_eq!(competitor_analysis("marketing")[0].name, "Template-Based Content Systems");
        // Untabled interests get the chatbot blurbs.
        assert_eq!(competitor_analysis("product")[0].name, "Traditional Chatbot Solutions");
    }

    #[test]
    fn difficulty_tables_match_the_catalog() {
        assert_eq!(implementation_difficulty("exploring", "data_analysis"), Difficulty::Medium);
        assert_eq!(implementation_difficulty("starting", "product"), Difficulty::High);
        assert_eq!(implementation_difficulty("piloting", "knowledge"), Difficulty::Low);
    }

    #[test]
    fn untabled_interest_uses_data_analysis_column() {
        assert_eq!(
            implementation_difficulty("exploring", "other"),
            implementation_difficulty("exploring", "data_analysis")
        );
        assert_eq!(time_to_value("scaling", "other"), "4-8 weeks");
        assert_eq!(cost_estimate("piloting", "other"), "$8,000-$20,000");
    }

    #[test]
    fn unknown_stage_uses_documented_defaults() {
        assert_eq!(implementation_difficulty("", "customer_support"), Difficulty::Medium);
        assert_eq!(time_to_value("", "customer_support"), "4-8 weeks");
        assert_eq!(cost_estimate("", "customer_support"), "$10,000-$25,000");
    }

    #[test]
    fn estimate_tables_cover_every_stage_and_column() {
        let stages = ["starting", "exploring", "piloting", "scaling"];
        let interests = ["customer_support", "marketing", "data_analysis", "product", "knowledge"];
        for stage in stages {
            for interest in interests {
                assert!(!time_to_value(stage, interest).is_empty());
                assert!(!cost_estimate(stage, interest).is_empty());
            }
        }
    }
}
