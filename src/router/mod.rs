// Query routing: deterministic intent handling ahead of generic search.
//
// Recruiter-style questions (location, compensation, education, contact,
// specific technologies) get exact, hand-composed answers built from the
// structured data, so they never depend on TF-IDF ranking noise. Everything
// else falls through to the ranked index.


use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::index::search::SearchResult;
use crate::knowledge::KnowledgeBase;

/// Fixed answer for compensation questions; returned verbatim regardless of
/// corpus contents.
pub const COMPENSATION_RESPONSE: &str = "Compensation is flexible and open to discussion. \
Expectations depend on the role, its responsibilities, and the overall package \
rather than a fixed number, and growth and learning opportunities weigh as much \
as the salary itself.";

/// Technology tokens the specific-technology rule recognizes.
const TECH_KEYWORDS: &[&str] = &[
    "react", "next", "vue", "angular", "svelte", "node", "express", "django", "flask", "python",
    "typescript", "javascript", "java", "rust", "golang", "php", "mongodb", "postgres",
    "postgresql", "mysql", "redis", "firebase", "docker", "kubernetes", "aws", "azure", "graphql",
    "tailwind",
];

type Responder = fn(&KnowledgeBase, &str) -> Option<String>;

/// One entry in the ordered routing table: a predicate over the query text
/// and a responder composing the answer from the structured data. New
/// intents are additive rows, not new branches.
struct RouteRule {
    name: &'static str,
    matcher: Regex,
    respond: Responder,
}

/// Ordered heuristic query router; first matching rule wins.
pub struct Router {
    rules: Vec<RouteRule>,
}

impl Default for Router {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    #[inline]
    pub fn new() -> Self {
        let rule = |name: &'static str, pattern: &str, respond: Responder| RouteRule {
            name,
            matcher: Regex::new(pattern).expect("static route pattern is valid"),
            respond,
        };

        let tech_pattern = format!(r"(?i)\b({})\b", TECH_KEYWORDS.iter().join("|"));
        Self {
            rules: vec![
                rule(
                    "location",
                    r"(?i)\b(location|located|where|based|relocate|relocation|city|country)\b",
                    location_response,
                ),
                rule(
                    "compensation",
                    r"(?i)\b(salary|compensation|ctc|pay|paid|package|stipend)\b",
                    compensation_response,
                ),
                rule(
                    "education",
                    r"(?i)\b(education|degree|university|college|school|studied|study|academic|qualification)\b",
                    education_response,
                ),
                rule(
                    "contact",
                    r"(?i)\b(contact|email|phone|reach|linkedin|connect)\b|(?i)get in touch",
                    contact_response,
                ),
                rule("technology", &tech_pattern, technology_response),
            ],
        }
    }

    /// Evaluate the rule table top to bottom; the first rule that matches
    /// and whose responder produces an answer short-circuits generic search.
    #[inline]
    pub fn route(&self, knowledge: &KnowledgeBase, query: &str) -> Option<String> {
        for rule in &self.rules {
            if !rule.matcher.is_match(query) {
                continue;
            }
            if let Some(response) = (rule.respond)(knowledge, query) {
                debug!("Query '{}' routed to '{}' rule", query, rule.name);
                return Some(response);
            }
        }
        None
    }
}

fn location_response(knowledge: &KnowledgeBase, _query: &str) -> Option<String> {
    let profile = &knowledge.profile;
    let mut lines = vec![
        "Location & Availability:".to_string(),
        format!("Based in {}.", profile.location),
    ];
    if !profile.open_to.is_empty() {
        lines.push(format!("Open to: {}.", profile.open_to.iter().join(", ")));
    }
    lines.push(format!("Availability: {}.", profile.availability));
    Some(lines.join("\n"))
}

fn compensation_response(_knowledge: &KnowledgeBase, _query: &str) -> Option<String> {
    Some(COMPENSATION_RESPONSE.to_string())
}

fn education_response(knowledge: &KnowledgeBase, _query: &str) -> Option<String> {
    let education = &knowledge.profile.education;
    if education.is_empty() {
        return Some(
            "No formal education is listed; skills were built through projects and \
             continuous self-learning."
                .to_string(),
        );
    }
    let entries = education
        .iter()
        .map(|item| {
            format!(
                "{} — {} ({}–{})",
                item.institution, item.program, item.start_date, item.end_date
            )
        })
        .join("\n");
    Some(format!("Education:\n{}", entries))
}

fn contact_response(knowledge: &KnowledgeBase, _query: &str) -> Option<String> {
    let links = &knowledge.profile.links;
    let entries: Vec<String> = [
        ("Email", &links.email),
        ("Phone", &links.phone),
        ("GitHub", &links.github),
        ("LinkedIn", &links.linkedin),
        ("Portfolio", &links.portfolio),
    ]
    .iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
    .collect();

    if entries.is_empty() {
        return Some("Contact details are available through the site's contact form.".to_string());
    }
    Some(format!("Contact Information:\n{}", entries.join("\n")))
}

/// Filters skills and projects mentioning the matched technology token and
/// assembles a two-part Skills/Projects answer. Declines (returns `None`)
/// when neither side mentions the token, so the query falls through to
/// generic search.
fn technology_response(knowledge: &KnowledgeBase, query: &str) -> Option<String> {
    let query_lower = query.to_lowercase();
    let tech = TECH_KEYWORDS
        .iter()
        .find(|keyword| {
            query_lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == **keyword)
        })
        .copied()?;

    let skills = knowledge
        .profile
        .skills
        .iter()
        .filter(|category| {
            category
                .items
                .iter()
                .any(|item| item.to_lowercase().contains(tech))
        })
        .map(|category| format!("- {}: {}", category.name, category.items.iter().join(", ")))
        .join("\n");

    let projects = knowledge
        .projects
        .iter()
        .filter(|project| {
            project
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(tech))
                || project.title.to_lowercase().contains(tech)
                || project.description.to_lowercase().contains(tech)
        })
        .map(|project| {
            format!(
                "- {}: {} (Technologies: {})",
                project.title,
                project.description,
                project.technologies.iter().join(", ")
            )
        })
        .join("\n");

    if skills.is_empty() && projects.is_empty() {
        return None;
    }

    Some(format!("Skills:\n{}\n\nProjects:\n{}", skills, projects))
}

/// Join ranked results into the fallback context string; `None` when the
/// result list is empty.
#[inline]
pub fn compose_context(results: &[SearchResult]) -> Option<String> {
    if results.is_empty() {
        return None;
    }
    let context = results
        .iter()
        .map(|result| {
            format!(
                "{}:\n{}",
                result.document.display_title(),
                result.document.content
            )
        })
        .join("\n\n");
    Some(context)
}

/// Terminal fallback naming the four browsable categories; the context
/// string is never empty.
#[inline]
pub fn no_match_message(query: &str) -> String {
    format!(
        "No specific information found for '{}'. You can ask about my bio, work experience, \
         projects, or frequently asked questions.",
        query.trim()
    )
}
