//! Prompt operations for the PromptStore.

use super::PromptStore;
use crate::{
    error::Result,
    models::{CreatedPrompt, DeletedPrompt, Prompt, PromptPage, SearchResults, UpdatedPrompt},
    params::{AddPrompt, Id, ListPrompts, SearchPrompts, UpdatePrompt},
};

impl PromptStore {
    /// Creates a prompt.
    ///
    /// # Errors
    ///
    /// `InvalidTitle`, `InvalidInput` (empty content) or `InvalidTag` naming
    /// the offending raw tag, all before anything is written;
    /// `DuplicateTitle` if another prompt already has this title.
    pub async fn add_prompt(&self, params: &AddPrompt) -> Result<CreatedPrompt> {
        let AddPrompt {
            title,
            content,
            tags,
        } = params.clone();

        self.with_database(move |db| db.create_prompt(&title, &content, &tags))
            .await
    }

    /// Retrieves a prompt with its tags.
    ///
    /// # Errors
    ///
    /// `NotFound` if no prompt has this ID. Malformed IDs are simply not
    /// found.
    pub async fn get_prompt(&self, params: &Id) -> Result<Prompt> {
        let id = params.id.clone();
        self.with_database(move |db| db.get_prompt(&id)).await
    }

    /// Replaces a prompt's title, content and whole tag set.
    ///
    /// # Errors
    ///
    /// `NotFound` if the ID does not exist, the validation errors of
    /// [`PromptStore::add_prompt`], or `DuplicateTitle` if the new title
    /// belongs to a different prompt.
    pub async fn update_prompt(&self, params: &UpdatePrompt) -> Result<UpdatedPrompt> {
        let UpdatePrompt {
            id,
            title,
            content,
            tags,
        } = params.clone();

        self.with_database(move |db| db.update_prompt(&id, &title, &content, &tags))
            .await
    }

    /// Permanently deletes a prompt. Its tags stay in the store.
    pub async fn delete_prompt(&self, params: &Id) -> Result<DeletedPrompt> {
        let id = params.id.clone();
        self.with_database(move |db| db.delete_prompt(&id)).await
    }

    /// Lists prompts, most recently updated first.
    pub async fn list_prompts(&self, params: &ListPrompts) -> Result<PromptPage> {
        let page = params.pagination()?;
        self.with_database(move |db| db.list_prompts(page)).await
    }

    /// Case-insensitive substring search over titles and content.
    pub async fn search_prompts(&self, params: &SearchPrompts) -> Result<SearchResults> {
        let page = params.pagination()?;
        let query = params.query.clone();
        self.with_database(move |db| db.search_prompts(&query, page))
            .await
    }
}
