//! Data models for prompts and tags.
//!
//! These types are what the entity operations return. They serialize to the
//! JSON payloads exposed over MCP, and the markdown `Display` implementations
//! used by the CLI live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use prompt_store_core::models::{Prompt, PromptSummary};
//! use jiff::Timestamp;
//!
//! let prompt = Prompt {
//!     id: "4f7c0a55-3a1e-4a39-9a57-3f1b1f3b7a10".to_string(),
//!     title: "Code review".to_string(),
//!     content: "Review this diff for correctness.".to_string(),
//!     tags: vec!["review".to_string()],
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! let summary = PromptSummary::from(&prompt);
//! assert_eq!(summary.snippet, prompt.content);
//! ```

pub mod prompt;
pub mod results;
pub mod tag;

#[cfg(test)]
mod tests;

pub use prompt::{Prompt, PromptSummary};
pub use results::{
    CreatedPrompt, DeletedPrompt, PromptPage, SearchResults, TagFilterResults, UpdatedPrompt,
};
pub use tag::{TagList, TagUsage};
