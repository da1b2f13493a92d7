//! Result payloads returned by mutations and paged queries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::PromptSummary;
use crate::validation::Pagination;

/// Payload returned after a prompt is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedPrompt {
    pub id: String,
    pub title: String,
    pub created_at: Timestamp,
}

/// Payload returned after a prompt is updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatedPrompt {
    pub id: String,
    pub title: String,
    pub updated_at: Timestamp,
}

/// Payload returned after a prompt is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedPrompt {
    pub deleted: bool,
    pub id: String,
}

/// One page of prompt summaries.
///
/// `total` counts every matching prompt, not just the returned page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptPage {
    pub prompts: Vec<PromptSummary>,
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub has_more: bool,
}

impl PromptPage {
    pub(crate) fn new(prompts: Vec<PromptSummary>, total: u64, page: Pagination) -> Self {
        let has_more = page.has_more(prompts.len(), total);
        Self {
            prompts,
            total,
            limit: page.limit(),
            offset: page.offset(),
            has_more,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }
}

/// A page of prompts matching a substring query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    pub query: String,
    #[serde(flatten)]
    pub page: PromptPage,
}

/// A page of prompts carrying any of the requested tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagFilterResults {
    /// Requested tags after normalization
    pub matched_tags: Vec<String>,
    #[serde(flatten)]
    pub page: PromptPage,
}
