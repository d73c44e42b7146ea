//! Keyword classification of visitor answers.
//!
//! Each profile tag has an ordered list of (keywords, value) rules,
//! evaluated top to bottom against the lowercased input. First match
//! wins; unmatched input falls back to the tag's default value so the
//! flow never stalls on free text.

use super::profile::ProfileTag;

/// One classification rule: any keyword substring maps to the value.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierRule {
    /// Substrings matched against the lowercased input.
    pub keywords: &'static [&'static str],
    /// The normalized tag value this rule classifies to.
    pub value: &'static str,
}

impl ClassifierRule {
    fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|k| input.contains(k))
    }
}

const JOURNEY_STAGE_RULES: &[ClassifierRule] = &[
    ClassifierRule { keywords: &["just starting", "new to ai"], value: "starting" },
    ClassifierRule { keywords: &["exploring", "researching"], value: "exploring" },
    ClassifierRule { keywords: &["piloting", "testing"], value: "piloting" },
    ClassifierRule { keywords: &["scaling", "expanding"], value: "scaling" },
];

const ROLE_RULES: &[ClassifierRule] = &[
    ClassifierRule { keywords: &["founder", "ceo"], value: "founder" },
    ClassifierRule { keywords: &["cto", "technical"], value: "technical" },
    ClassifierRule { keywords: &["marketing", "growth"], value: "marketing" },
    ClassifierRule { keywords: &["hr", "people"], value: "hr" },
    ClassifierRule { keywords: &["operations", "finance"], value: "operations" },
];

const INTEREST_RULES: &[ClassifierRule] = &[
    ClassifierRule { keywords: &["customer support", "support"], value: "customer_support" },
    ClassifierRule { keywords: &["marketing", "content", "campaign"], value: "marketing" },
    ClassifierRule { keywords: &["data"], value: "data_analysis" },
    ClassifierRule { keywords: &["product"], value: "product" },
    ClassifierRule { keywords: &["knowledge"], value: "knowledge" },
];

const HELP_NEED_RULES: &[ClassifierRule] = &[
    ClassifierRule { keywords: &["tutorials", "learning"], value: "tutorials" },
    ClassifierRule { keywords: &["use cases"], value: "use_cases" },
    ClassifierRule { keywords: &["strategic", "roadmap"], value: "strategic" },
    ClassifierRule { keywords: &["technical", "implementation"], value: "technical" },
    ClassifierRule { keywords: &["business case", "roi"], value: "business_case" },
];

const INDUSTRY_RULES: &[ClassifierRule] = &[
    ClassifierRule { keywords: &["technology", "software", "hardware"], value: "technology" },
    ClassifierRule { keywords: &["financial", "banking", "insurance"], value: "financial" },
    ClassifierRule { keywords: &["healthcare", "medical"], value: "healthcare" },
    ClassifierRule { keywords: &["retail", "e-commerce", "ecommerce"], value: "retail" },
    ClassifierRule { keywords: &["manufacturing", "industrial"], value: "manufacturing" },
];

fn rules_for(tag: ProfileTag) -> (&'static [ClassifierRule], &'static str) {
    match tag {
        ProfileTag::JourneyStage => (JOURNEY_STAGE_RULES, "exploring"),
        ProfileTag::Role => (ROLE_RULES, "other"),
        ProfileTag::Interest => (INTEREST_RULES, "other"),
        ProfileTag::HelpNeed => (HELP_NEED_RULES, "general"),
        ProfileTag::Industry => (INDUSTRY_RULES, "other"),
    }
}

/// Classifies raw visitor input into a normalized tag value.
///
/// Input is lowercased and trimmed before matching. Always returns a
/// value from the tag's closed vocabulary.
pub fn classify(tag: ProfileTag, raw_input: &str) -> &'static str {
    let input = raw_input.trim().to_lowercase();
    let (rules, default) = rules_for(tag);
    rules
        .iter()
        .find(|rule| rule.matches(&input))
        .map(|rule| rule.value)
        .unwrap_or(default)
}
