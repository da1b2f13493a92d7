//! Tag usage models.

use serde::{Deserialize, Serialize};

/// A tag together with the number of prompts currently referencing it.
///
/// Orphaned tags are reported with a count of zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagUsage {
    pub name: String,
    pub prompt_count: u64,
}

/// Every known tag, ordered by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagList {
    pub tags: Vec<TagUsage>,
    pub total: usize,
}

impl TagList {
    pub fn new(tags: Vec<TagUsage>) -> Self {
        let total = tags.len();
        Self { tags, total }
    }

    /// Looks up a tag by name.
    pub fn get(&self, name: &str) -> Option<&TagUsage> {
        self.tags.iter().find(|tag| tag.name == name)
    }
}
