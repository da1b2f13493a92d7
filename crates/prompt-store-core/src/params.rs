//! Parameter structures for prompt store operations
//!
//! These are the argument records each operation is invoked with. They carry
//! no framework dependencies beyond serde, so the CLI can build them from
//! clap arguments and the MCP server can deserialize them straight from tool
//! calls. With the `schema` feature enabled they also derive
//! [`schemars::JsonSchema`], which the MCP layer publishes as tool input
//! schemas.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Pagination fields are kept as signed integers so that out-of-range values
//! reach validation and are reported as `INVALID_INPUT` instead of being
//! rejected or clamped during deserialization.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    validation::{Pagination, DEFAULT_LIMIT},
};

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Parameters for operations addressing a single prompt.
///
/// Used by get_prompt and delete_prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// Prompt UUID
    pub id: String,
}

/// Parameters for reading one prompt.
pub type GetPrompt = Id;

/// Parameters for deleting one prompt.
pub type DeletePrompt = Id;

/// Parameters for creating a new prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPrompt {
    /// Unique title for the prompt (1-200 characters)
    pub title: String,
    /// Full prompt content
    pub content: String,
    /// Optional tag names (letters, numbers, dash, underscore; stored lowercase)
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameters for replacing a prompt's title, content and tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdatePrompt {
    /// Prompt UUID to update
    pub id: String,
    /// New title for the prompt
    pub title: String,
    /// New prompt content
    pub content: String,
    /// New complete set of tag names; tags not listed are removed
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameters for listing prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPrompts {
    /// Maximum number of prompts to return (1-100)
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of prompts to skip
    #[serde(default)]
    pub offset: i64,
}

impl Default for ListPrompts {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ListPrompts {
    /// Validates the requested page window.
    pub fn pagination(&self) -> Result<Pagination> {
        Pagination::new(self.limit, self.offset)
    }
}

/// Parameters for substring search over titles and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchPrompts {
    /// Search term (case-insensitive partial match)
    pub query: String,
    /// Maximum number of prompts to return (1-100)
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of prompts to skip
    #[serde(default)]
    pub offset: i64,
}

impl SearchPrompts {
    /// Creates search parameters for the first page of results.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Validates the requested page window.
    pub fn pagination(&self) -> Result<Pagination> {
        Pagination::new(self.limit, self.offset)
    }
}

/// Parameters for listing prompts that carry any of the given tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FilterByTags {
    /// Tag names to filter by; a prompt matches if it has any of them
    pub tags: Vec<String>,
    /// Maximum number of prompts to return (1-100)
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of prompts to skip
    #[serde(default)]
    pub offset: i64,
}

impl FilterByTags {
    /// Creates filter parameters for the first page of results.
    pub fn new<S: Into<String>>(tags: impl IntoIterator<Item = S>) -> Self {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Validates the requested page window.
    pub fn pagination(&self) -> Result<Pagination> {
        Pagination::new(self.limit, self.offset)
    }
}
