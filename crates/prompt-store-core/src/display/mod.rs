//! Markdown `Display` implementations for models and operation results.
//!
//! The CLI renders these through termimad; the MCP server returns JSON
//! instead and does not use this module.
//!
//! - [`models`]: prompts, summaries and tag usage
//! - [`results`]: mutation results, pages, tag lists and error responses
//! - [`datetime`]: local time zone formatting for timestamps

pub mod datetime;
pub mod models;
pub mod results;

pub use datetime::LocalDateTime;
