//! Tag operations for the PromptStore.

use super::PromptStore;
use crate::{
    error::Result,
    models::{TagFilterResults, TagList},
    params::FilterByTags,
};

impl PromptStore {
    /// Lists prompts carrying any of the requested tags (OR semantics).
    ///
    /// Requested tags are lowercased before matching and echoed back in
    /// normalized form.
    pub async fn filter_by_tags(&self, params: &FilterByTags) -> Result<TagFilterResults> {
        let page = params.pagination()?;
        let tags = params.tags.clone();
        self.with_database(move |db| db.filter_by_tags(&tags, page))
            .await
    }

    /// Lists every tag with its usage count, including unused tags.
    pub async fn list_tags(&self) -> Result<TagList> {
        self.with_database(|db| db.list_tags()).await
    }
}
