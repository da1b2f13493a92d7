//! Display implementations for domain models.
//!
//! Output is markdown so the CLI can render it with termimad.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Prompt, PromptSummary, TagUsage};

/// Renders a tag set as inline code spans, or a placeholder when empty.
pub(crate) struct TagLine<'a>(pub &'a [String]);

impl fmt::Display for TagLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(none)");
        }
        let rendered: Vec<String> = self.0.iter().map(|tag| format!("`{tag}`")).collect();
        write!(f, "{}", rendered.join(", "))
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Tags: {}", TagLine(&self.tags))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f)?;
        writeln!(f, "{}", self.content)
    }
}

impl fmt::Display for PromptSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Tags: {}", TagLine(&self.tags))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;
        // Snippets can span lines; keep them inside a quote block
        for line in self.snippet.lines() {
            writeln!(f, "> {line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TagUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.prompt_count == 1 {
            "prompt"
        } else {
            "prompts"
        };
        write!(f, "- `{}` ({} {noun})", self.name, self.prompt_count)
    }
}
