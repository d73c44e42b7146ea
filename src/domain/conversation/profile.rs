//! Visitor profile accumulator.
//!
//! One normalized value per profile tag, added as each step resolves.
//! Tags are never overwritten; each step writes a distinct tag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The closed set of profile dimensions collected by the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileTag {
    /// Where the visitor is on their AI journey.
    JourneyStage,
    /// The visitor's role in their organization.
    Role,
    /// The area they want to apply AI to.
    Interest,
    /// The kind of help they need right now.
    HelpNeed,
    /// The visitor's industry.
    Industry,
}

impl ProfileTag {
    /// Returns the tag's key as it appears in tracked profiles.
    pub fn key(&self) -> &'static str {
        match self {
            Self::JourneyStage => "journeyStage",
            Self::Role => "role",
            Self::Interest => "interest",
            Self::HelpNeed => "helpNeed",
            Self::Industry => "industry",
        }
    }
}

impl fmt::Display for ProfileTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Profile accumulated across the dialogue, one value per tag.
///
/// # Invariants
///
/// - At most one value per tag
/// - A set tag is never overwritten by later steps
/// - Owned by the active conversation; discarded on end or reset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorProfile {
    values: HashMap<ProfileTag, String>,
}

impl VisitorProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tag value. The first write wins; later writes for the
    /// same tag are ignored and `false` is returned.
    pub fn set(&mut self, tag: ProfileTag, value: impl Into<String>) -> bool {
        if self.values.contains_key(&tag) {
            return false;
        }
        self.values.insert(tag, value.into());
        true
    }

    /// Returns the value for a tag, if set.
    pub fn get(&self, tag: ProfileTag) -> Option<&str> {
        self.values.get(&tag).map(String::as_str)
    }

    /// Returns the number of tags set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no tags are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The recommendation lookup key: `{role}-{journeyStage}-{interest}`.
    ///
    /// Unset tags contribute an empty segment, which falls through to the
    /// catalog's default entry.
    pub fn recommendation_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.get(ProfileTag::Role).unwrap_or(""),
            self.get(ProfileTag::JourneyStage).unwrap_or(""),
            self.get(ProfileTag::Interest).unwrap_or(""),
        )
    }

    /// Flattens the profile into string key/value pairs for the
    /// analytics sink.
    pub fn as_key_values(&self) -> HashMap<String, String> {
        self.values
            .iter()
            .map(|(tag, value)| (tag.key().to_string(), value.clone()))
            .collect()
    }
}
