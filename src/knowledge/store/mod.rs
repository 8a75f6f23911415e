// Document materialization: flattens the heterogeneous knowledge sources
// into the uniform document list the index is built from.


use std::fmt::Write;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::knowledge::KnowledgeBase;

/// Which knowledge source a document was materialized from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Bio,
    Experience,
    Project,
    Faq,
}

impl DocKind {
    /// Human-readable label used when a document has no title of its own.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            DocKind::Bio => "Profile",
            DocKind::Experience => "Experience",
            DocKind::Project => "Project",
            DocKind::Faq => "FAQ",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocMetadata {
    pub kind: DocKind,
    pub title: Option<String>,
    pub tags: Vec<String>,
}

/// One indexable unit of knowledge.
///
/// Documents are created once per rebuild and stay immutable until the next
/// rebuild; ids are stable across rebuilds for unchanged source ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub metadata: DocMetadata,
}

impl Document {
    /// The document's title, falling back to the source kind's label.
    #[inline]
    pub fn display_title(&self) -> &str {
        self.metadata
            .title
            .as_deref()
            .unwrap_or_else(|| self.metadata.kind.label())
    }
}

/// Materialize every knowledge source into documents, in source order.
#[inline]
pub fn build_documents(knowledge: &KnowledgeBase) -> Vec<Document> {
    let mut documents = Vec::new();
    let profile = &knowledge.profile;

    documents.push(Document {
        id: "bio".to_string(),
        content: format!(
            "Name: {}. Headline: {}. About: {}. Location: {}. Languages: {}. Availability: {}.",
            profile.name,
            profile.headline,
            profile.about,
            profile.location,
            profile.languages.iter().join(", "),
            profile.availability,
        ),
        metadata: DocMetadata {
            kind: DocKind::Bio,
            title: Some("Basic Information".to_string()),
            tags: Vec::new(),
        },
    });

    for (index, category) in profile.skills.iter().enumerate() {
        documents.push(Document {
            id: format!("skill-{}", index),
            content: format!("{}: {}", category.name, category.items.iter().join(", ")),
            metadata: DocMetadata {
                kind: DocKind::Bio,
                title: Some(category.name.clone()),
                tags: category.items.clone(),
            },
        });
    }

    for (index, exp) in knowledge.experiences.iter().enumerate() {
        documents.push(Document {
            id: format!("exp-{}", index),
            content: format!(
                "{} at {} ({}–{}) in {}. Skills: {}. {}",
                exp.role,
                exp.company,
                exp.start_date,
                exp.end_date,
                exp.location,
                exp.skills.iter().join(", "),
                exp.description.iter().join(". "),
            ),
            metadata: DocMetadata {
                kind: DocKind::Experience,
                title: Some(exp.role.clone()),
                tags: exp.skills.clone(),
            },
        });
    }

    for (index, project) in knowledge.projects.iter().enumerate() {
        let mut content = format!(
            "{}: {}. Technologies: {}.",
            project.title,
            project.description,
            project.technologies.iter().join(", "),
        );
        if let Some(github) = &project.github {
            let _ = write!(content, " GitHub: {}.", github);
        }
        if let Some(live) = &project.live {
            let _ = write!(content, " Live: {}.", live);
        }
        documents.push(Document {
            id: format!("proj-{}", index),
            content,
            metadata: DocMetadata {
                kind: DocKind::Project,
                title: Some(project.title.clone()),
                tags: project.technologies.clone(),
            },
        });
    }

    for (index, entry) in knowledge.faq.iter().enumerate() {
        documents.push(Document {
            id: format!("faq-{}", index),
            content: format!("Question: {}. Answer: {}", entry.question, entry.answer),
            metadata: DocMetadata {
                kind: DocKind::Faq,
                title: Some(entry.question.clone()),
                tags: entry.tags.clone(),
            },
        });
    }

    debug!("Materialized {} documents from knowledge sources", documents.len());
    documents
}
