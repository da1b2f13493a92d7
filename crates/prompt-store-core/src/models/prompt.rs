//! Prompt model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored prompt with its full content and tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prompt {
    /// Opaque unique identifier (UUID v4), assigned at creation
    pub id: String,

    /// Unique, case-sensitive title
    pub title: String,

    /// Full prompt text
    pub content: String,

    /// Normalized tag names, ordered by name
    #[serde(default)]
    pub tags: Vec<String>,

    /// Timestamp when the prompt was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last title or content change (UTC)
    pub updated_at: Timestamp,
}

/// Compact representation of a prompt used in list, search and filter
/// results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptSummary {
    pub id: String,
    pub title: String,
    /// First 200 characters of the content
    pub snippet: String,
    /// Normalized tag names, ordered by name
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Prompt> for PromptSummary {
    fn from(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id.clone(),
            title: prompt.title.clone(),
            snippet: prompt
                .content
                .chars()
                .take(crate::validation::SNIPPET_LEN)
                .collect(),
            tags: prompt.tags.clone(),
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}
