//! Rankable candidates and the course record

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Normalized (trimmed, lowercase) tag set
pub type TagSet = BTreeSet<String>;

/// Something the colony can rank: a stable id plus a tag set.
///
/// The corpus order defines the index positions used by the pheromone
/// vector, so implementors must not change their tags during a run.
pub trait Candidate {
    /// Stable identity of the candidate
    fn id(&self) -> u64;

    /// Lowercase tags describing the candidate
    fn tags(&self) -> &TagSet;
}

/// Normalize a single raw tag; returns `None` for blank input
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Build a [`TagSet`] from raw strings, dropping blanks
pub fn tag_set<I, S>(raw: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|t| normalize_tag(t.as_ref()))
        .collect()
}

/// A course from the recommendation corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Row position in the corpus file
    pub id: u64,
    /// Course title
    pub name: String,
    /// Institution or author offering the course
    pub provider: String,
    /// Skills taught, normalized to lowercase
    pub skills: TagSet,
    /// Rating as published by the source, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Course {
    /// Create a course with only an id and skills; name and provider are blank
    pub fn new<I, S>(id: u64, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Course {
            id,
            name: String::new(),
            provider: String::new(),
            skills: tag_set(skills),
            rating: None,
            url: None,
        }
    }

    /// Set the course name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Skills joined for display, e.g. `python, sql`.
    ///
    /// Skills are normalized into a sorted set on load, so the listing is
    /// alphabetical rather than in the order the corpus row gave them.
    pub fn skills_display(&self) -> String {
        self.skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Candidate for Course {
    fn id(&self) -> u64 {
        self.id
    }

    fn tags(&self) -> &TagSet {
        &self.skills
    }
}
