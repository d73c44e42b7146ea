//! Mock lead enrichment.
//!
//! Simulates a third-party enrichment provider from the captured
//! profile alone. Results are cached per session, so the admin panel
//! sees a stable record across renders.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::debug;

use crate::domain::analytics::{
    BuyingStage, CompanyProfile, EngagementHistory, EnrichedLead, EnrichmentStatus,
    VisitorSession,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::ports::LeadEnricher;

use super::store::TrackingStore;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Quinn", "Jamie", "Sam",
    "Chris",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson", "Taylor",
    "Clark", "Lewis",
];
const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Boston, MA",
    "Seattle, WA",
    "Chicago, IL",
];
const HEADQUARTERS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Boston, MA",
    "Seattle, WA",
    "Chicago, IL",
    "London, UK",
    "Toronto, Canada",
];
const FUNDING_ROUNDS: &[&str] = &[
    "Bootstrapped",
    "Seed ($1-3M)",
    "Series A ($5-15M)",
    "Series B ($20-50M)",
    "Series C+ ($50M+)",
];
const ENRICHMENT_SOURCES: &[&str] = &["Clay", "Clearbit", "ZoomInfo"];
const RESOURCES: &[&str] = &[
    "AI Implementation Guide.pdf",
    "ROI Calculator.xlsx",
    "Industry Benchmark Report.pdf",
    "Case Study - AI in Customer Service.pdf",
    "Beginner's Guide to Machine Learning.pdf",
    "AI Maturity Assessment.pdf",
];
const WEBINARS: &[&str] = &[
    "AI for Business Leaders",
    "Implementing Your First AI Use Case",
    "Scaling AI Across the Enterprise",
    "AI Ethics & Compliance",
    "Building Custom AI Agents",
];

fn company_names_for_role(role: &str) -> &'static [&'static str] {
    match role {
        "technical" => &["TechCorp", "DevGenius", "CodeMasters", "ByteWorks", "DataSphere"],
        "marketing" => &["BrandBoost", "MarketMinds", "VisualVortex", "EngageMedia", "ContentCraft"],
        "founder" => &[
            "NextGen Innovations",
            "Horizon Ventures",
            "PrimeStart",
            "FoundersFuture",
            "ScaleSphere",
        ],
        "hr" => &["TalentForce", "PeopleFirst", "HRSolutions", "TeamGrowth", "CultureBuilders"],
        _ => &[
            "GlobalCorp",
            "Enterprise Solutions",
            "MetaWorks",
            "VisionaryGroup",
            "IndustryLeaders",
        ],
    }
}

fn tech_stacks_for_interest(interest: &str) -> &'static [&'static [&'static str]] {
    match interest {
        "customer_support" => &[
            &["Zendesk", "Slack", "Intercom", "Salesforce"],
            &["Freshdesk", "Microsoft Teams", "HubSpot", "Notion"],
            &["Help Scout", "Asana", "Zoom", "Monday.com"],
        ],
        "marketing" => &[
            &["WordPress", "HubSpot", "Google Analytics", "Mailchimp"],
            &["Contentful", "Adobe Creative Cloud", "Hootsuite", "SEMrush"],
            &["Webflow", "Buffer", "Canva", "Ahrefs"],
        ],
        "data_analysis" => &[
            &["Tableau", "Python", "SQL", "AWS"],
            &["PowerBI", "R", "MongoDB", "Azure"],
            &["Looker", "Snowflake", "Databricks", "GCP"],
        ],
        _ => &[
            &["Salesforce", "Slack", "Microsoft Office", "Google Workspace"],
            &["Jira", "Confluence", "Teams", "Trello"],
            &["SAP", "Oracle", "Netsuite", "Zoho"],
        ],
    }
}

/// Lead enricher backed by seedable random generation.
pub struct MockLeadEnricher {
    store: Arc<TrackingStore>,
    rng: Mutex<StdRng>,
    cache: RwLock<HashMap<SessionId, EnrichedLead>>,
}

impl MockLeadEnricher {
    /// Creates an enricher with a fixed seed over the given store.
    pub fn with_seed(store: Arc<TrackingStore>, seed: u64) -> Self {
        Self {
            store,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn lock_error() -> DomainError {
        DomainError::new(ErrorCode::SinkError, "Lead enricher lock poisoned")
    }

    fn generate(&self, session: &VisitorSession) -> Result<EnrichedLead, DomainError> {
        let mut rng = self.rng.lock().map_err(|_| Self::lock_error())?;

        let role = session.profile_value("role").unwrap_or("other");
        let interest = session.profile_value("interest").unwrap_or("other");

        let pick = |rng: &mut StdRng, pool: &[&str]| pool[rng.gen_range(0..pool.len())].to_string();

        let company_name = pick(&mut rng, company_names_for_role(role));
        let company_slug = company_name.to_lowercase().replace(' ', "");
        let stacks = tech_stacks_for_interest(interest);
        let technologies: Vec<String> = stacks[rng.gen_range(0..stacks.len())]
            .iter()
            .map(|t| t.to_string())
            .collect();

        let first_name = pick(&mut rng, FIRST_NAMES);
        let last_name = pick(&mut rng, LAST_NAMES);
        let handle = format!(
            "{}{}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        let title = match role {
            "founder" => pick(&mut rng, &["CEO & Founder", "Founder & Executive Director"]),
            "technical" => pick(&mut rng, &["CTO", "VP of Engineering", "Tech Lead"]),
            "marketing" => pick(&mut rng, &["CMO", "Marketing Director", "Growth Lead"]),
            "hr" => pick(
                &mut rng,
                &["Head of People", "HR Director", "Talent Acquisition Manager"],
            ),
            _ => pick(&mut rng, &["Director", "Senior Manager", "Project Lead"]),
        };

        let (size, revenue, employees) = match session.profile_value("journeyStage") {
            Some("starting") => ("1-10 employees", "$0-1M", rng.gen_range(1..=10)),
            Some("exploring") => ("11-50 employees", "$1-10M", rng.gen_range(11..=50)),
            Some("piloting") => ("51-200 employees", "$10-50M", rng.gen_range(51..=200)),
            Some("scaling") => ("201-1000 employees", "$50-250M", rng.gen_range(201..=1000)),
            _ => ("1-50 employees", "$1-10M", rng.gen_range(1..=50)),
        };

        let industry = match interest {
            "customer_support" => pick(&mut rng, &["Customer Service", "E-commerce"]),
            "marketing" => pick(&mut rng, &["Media & Entertainment", "Marketing & Advertising"]),
            "data_analysis" => pick(&mut rng, &["Technology", "Financial Services"]),
            _ => pick(&mut rng, &["Business Services", "Retail"]),
        };

        let description = match rng.gen_range(0..3) {
            0 => format!(
                "{} is a leading provider of {} solutions that help businesses achieve their goals.",
                company_name,
                industry.to_lowercase()
            ),
            1 => format!(
                "{} builds innovative software for the {} industry, serving clients worldwide.",
                company_name,
                industry.to_lowercase()
            ),
            _ => format!(
                "{} offers cutting-edge services in {}, with a focus on customer satisfaction.",
                company_name,
                industry.to_lowercase()
            ),
        };

        let intent_score: u8 = rng.gen_range(1..=100);
        let last_active = session.ended_at.unwrap_or(session.started_at);

        let downloaded: Vec<String> = (0..rng.gen_range(0..3))
            .map(|_| pick(&mut rng, RESOURCES))
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        let attended: Vec<String> = (0..rng.gen_range(0..2))
            .map(|_| pick(&mut rng, WEBINARS))
            .collect();

        let emails_opened = rng.gen_range(0..5);
        let emails_clicked = if emails_opened > 0 {
            rng.gen_range(0..emails_opened)
        } else {
            0
        };
        let chat_completion_rate = if session.completed_flow {
            rng.gen_range(80..=100)
        } else {
            rng.gen_range(10..=70)
        };

        let status = if rng.gen_bool(0.3) {
            EnrichmentStatus::Complete
        } else if rng.gen_bool(0.5) {
            EnrichmentStatus::Partial
        } else {
            EnrichmentStatus::Failed
        };

        Ok(EnrichedLead {
            email: format!(
                "{}.{}@{}.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                company_slug
            ),
            name: format!("{} {}", first_name, last_name),
            title,
            location: pick(&mut rng, LOCATIONS),
            linkedin: format!("https://linkedin.com/in/{}", handle),
            twitter: rng
                .gen_bool(0.3)
                .then(|| format!("https://twitter.com/{}", handle)),
            last_active,
            company: CompanyProfile {
                website: format!("https://www.{}.com", company_slug),
                linkedin_url: format!("https://linkedin.com/company/{}", company_slug),
                name: company_name,
                industry,
                size: size.to_string(),
                funding: pick(&mut rng, FUNDING_ROUNDS),
                founded: rng.gen_range(2000..=2020),
                description,
                headquarters: pick(&mut rng, HEADQUARTERS),
                employees,
                revenue: revenue.to_string(),
                technologies,
            },
            engagement: EngagementHistory {
                first_visit: session.started_at.minus_days(rng.gen_range(0..60)),
                last_visit: last_active,
                visits: rng.gen_range(1..=10),
                pages_viewed: rng.gen_range(1..=25),
                downloaded_resources: downloaded,
                webinars_attended: attended,
                emails_opened,
                emails_clicked,
                chat_completion_rate,
            },
            intent_score,
            buying_stage: BuyingStage::from_intent_score(intent_score),
            enrichment_source: pick(&mut rng, ENRICHMENT_SOURCES),
            enrichment_date: Timestamp::now(),
            enrichment_status: status,
            match_confidence: rng.gen_range(70..=100),
        })
    }
}

#[async_trait]
impl LeadEnricher for MockLeadEnricher {
    async fn enrich(&self, session_id: &SessionId) -> Result<EnrichedLead, DomainError> {
        if let Some(cached) = self
            .cache
            .read()
            .map_err(|_| Self::lock_error())?
            .get(session_id)
        {
            return Ok(cached.clone());
        }

        let session = self.store.session(session_id)?.ok_or_else(|| {
            DomainError::new(ErrorCode::SessionNotFound, "Session not found")
                .with_detail("session_id", session_id.to_string())
        })?;

        let lead = self.generate(&session)?;
        debug!(session_id = %session_id, company = %lead.company.name, "lead enriched");
        self.cache
            .write()
            .map_err(|_| Self::lock_error())?
            .insert(*session_id, lead.clone());
        Ok(lead)
    }
}
