//! Display implementations for operation results and paged collections.

use std::fmt;

use super::{datetime::LocalDateTime, models::TagLine};
use crate::{
    error::ErrorResponse,
    models::{
        CreatedPrompt, DeletedPrompt, PromptPage, SearchResults, TagFilterResults, TagList,
        UpdatedPrompt,
    },
};

impl fmt::Display for CreatedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created prompt with ID: {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Title: {}", self.title)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for UpdatedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated prompt with ID: {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Title: {}", self.title)?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl fmt::Display for DeletedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted prompt with ID: {}", self.id)
    }
}

impl fmt::Display for PromptPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prompts.is_empty() {
            return writeln!(f, "No prompts found.");
        }

        for summary in &self.prompts {
            write!(f, "{summary}")?;
            writeln!(f)?;
        }

        let first = self.offset.saturating_add(1);
        let last = self.offset.saturating_add(self.prompts.len() as u64);
        write!(f, "Showing {first}-{last} of {}", self.total)?;
        if self.has_more {
            write!(f, " (next page: --offset {last})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Search results for \"{}\"", self.query)?;
        writeln!(f)?;
        write!(f, "{}", self.page)
    }
}

impl fmt::Display for TagFilterResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Prompts tagged {}", TagLine(&self.matched_tags))?;
        writeln!(f)?;
        write!(f, "{}", self.page)
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            return writeln!(f, "No tags found.");
        }

        writeln!(f, "# Tags")?;
        writeln!(f)?;
        for tag in &self.tags {
            writeln!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error [{}]: {}", self.error.code, self.error.message)
    }
}
