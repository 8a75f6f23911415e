// Knowledge source types for the portfolio assistant
// These mirror the structured data maintained through the site's admin flows


pub mod store;

use serde::{Deserialize, Serialize};

/// Contact and profile links surfaced by the contact route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileLinks {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EducationItem {
    pub institution: String,
    pub program: String,
    pub start_date: String,
    pub end_date: String,
}

/// A named grouping of related skills, e.g. "Frontend" or "Databases".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Bio-level information about the portfolio owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub location: String,
    pub languages: Vec<String>,
    pub availability: String,
    /// Work arrangements the owner is open to, e.g. "Remote" or "Hybrid".
    pub open_to: Vec<String>,
    pub links: ProfileLinks,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
    pub skills: Vec<String>,
}

impl Default for Experience {
    #[inline]
    fn default() -> Self {
        Self {
            role: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: "Present".to_string(),
            description: Vec::new(),
            skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub tags: Vec<String>,
}

/// The full set of knowledge sources the engine indexes.
///
/// The host constructs one of these (typically deserialized from its
/// persistence layer) and shares it with the engine behind a lock so admin
/// mutations and the freshness poller observe the same data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KnowledgeBase {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub faq: Vec<FaqEntry>,
}
