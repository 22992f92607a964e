//! Project and article records as delivered by the remote endpoints

use serde::{Deserialize, Deserializer, Serialize};

/// A repository from the code-hosting listing endpoint
///
/// Field names follow the hosting API so the listing decodes directly.
/// `description` and `language` are `null` for some repositories; they decode
/// as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Repository identifier (unique)
    pub id: u64,
    /// Repository name
    pub name: String,
    /// Short description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Browser URL of the repository
    pub html_url: String,
    /// Star count
    pub stargazers_count: u64,
    /// Fork count
    pub forks_count: u64,
    /// Primary language
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
}

/// An entry of the article index (`articles/index.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub description: String,
    /// Grouping key; also the directory holding the article body
    pub category: String,
    /// Display-only date string, never parsed
    pub date: String,
    /// Unique, URL-safe identifier
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Tags; absent and empty both match no tag filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ArticleSummary {
    /// Whether the article carries `tag` (exact match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
