//! Prompt CRUD operations and paged queries.

use log::debug;
use rusqlite::{params, OptionalExtension, ToSql, Transaction};
use uuid::Uuid;

use super::{tag_queries, utils};
use crate::{
    error::{is_unique_violation, DatabaseResultExt, Result, StoreError},
    models::{
        CreatedPrompt, DeletedPrompt, Prompt, PromptPage, PromptSummary, SearchResults,
        UpdatedPrompt,
    },
    validation::{self, Pagination},
};

// Both timestamps come from the column defaults so they share one clock read
const INSERT_PROMPT_SQL: &str =
    "INSERT INTO prompts (id, title, content) VALUES (?1, ?2, ?3) RETURNING created_at";
const SELECT_PROMPT_SQL: &str =
    "SELECT id, title, content, created_at, updated_at FROM prompts WHERE id = ?1";
const CHECK_PROMPT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM prompts WHERE id = ?1)";
const MUTATE_PROMPT_SQL: &str = "UPDATE prompts \
     SET title = ?1, content = ?2, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') \
     WHERE id = ?3";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM prompts WHERE id = ?1";
const DELETE_PROMPT_SQL: &str = "DELETE FROM prompts WHERE id = ?1";

const SUMMARY_COLUMNS: &str = "p.id, p.title, substr(p.content, 1, 200), p.created_at, p.updated_at";
// rowid breaks ties between writes stamped in the same millisecond
const SUMMARY_ORDER: &str = "ORDER BY p.updated_at DESC, p.rowid DESC";
const SEARCH_CONDITION: &str =
    "WHERE p.title LIKE ? ESCAPE '\\' OR p.content LIKE ? ESCAPE '\\'";

impl super::Database {
    /// Creates a new prompt with the given title, content and tags.
    ///
    /// Tags are normalized to lowercase before storage. The prompt row, any
    /// newly seen tags and every association are written in one transaction.
    pub fn create_prompt<S: AsRef<str>>(
        &mut self,
        title: &str,
        content: &str,
        tags: &[S],
    ) -> Result<CreatedPrompt> {
        validation::validate_title(title)?;
        validation::validate_content(content)?;
        let tags = validation::normalize_tags(tags)?;

        debug!("create_prompt: title={title:?} tags={tags:?}");

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = Uuid::new_v4().to_string();
        let created_at = tx
            .query_row(INSERT_PROMPT_SQL, params![&id, title, content], |row| {
                utils::timestamp_column(row, 0)
            })
            .map_err(|e| map_title_conflict(e, title, "Failed to insert prompt"))?;

        tag_queries::attach_tags(&tx, &id, &tags)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(CreatedPrompt {
            id,
            title: title.to_string(),
            created_at,
        })
    }

    /// Retrieves a prompt and its tags by ID.
    pub fn get_prompt(&self, id: &str) -> Result<Prompt> {
        let prompt = self
            .connection
            .query_row(SELECT_PROMPT_SQL, params![id], |row| {
                Ok(Prompt {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                    tags: Vec::new(),
                    created_at: utils::timestamp_column(row, 3)?,
                    updated_at: utils::timestamp_column(row, 4)?,
                })
            })
            .optional()
            .db_context("Failed to query prompt")?;

        let mut prompt = prompt.ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        prompt.tags = self.tags_for_prompt(&prompt.id)?;
        Ok(prompt)
    }

    /// Replaces a prompt's title, content and complete tag set.
    ///
    /// Tags missing from `tags` are detached even if the caller did not
    /// mention them. `updated_at` is refreshed.
    pub fn update_prompt<S: AsRef<str>>(
        &mut self,
        id: &str,
        title: &str,
        content: &str,
        tags: &[S],
    ) -> Result<UpdatedPrompt> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !prompt_exists(&tx, id)? {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        validation::validate_title(title)?;
        validation::validate_content(content)?;
        let tags = validation::normalize_tags(tags)?;

        debug!("update_prompt: id={id} title={title:?} tags={tags:?}");

        mutate_prompt(&tx, id, title, content)?;
        tag_queries::detach_all_tags(&tx, id)?;
        tag_queries::attach_tags(&tx, id, &tags)?;

        let updated_at = tx
            .query_row(SELECT_UPDATED_AT_SQL, params![id], |row| {
                utils::timestamp_column(row, 0)
            })
            .db_context("Failed to read updated timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(UpdatedPrompt {
            id: id.to_string(),
            title: title.to_string(),
            updated_at,
        })
    }

    /// Permanently deletes a prompt. Its tag associations are removed by the
    /// schema's cascade; the tags themselves are kept.
    pub fn delete_prompt(&mut self, id: &str) -> Result<DeletedPrompt> {
        debug!("delete_prompt: id={id}");

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !prompt_exists(&tx, id)? {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        tx.execute(DELETE_PROMPT_SQL, params![id])
            .db_context("Failed to delete prompt")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(DeletedPrompt {
            deleted: true,
            id: id.to_string(),
        })
    }

    /// Lists all prompts, most recently updated first.
    pub fn list_prompts(&self, page: Pagination) -> Result<PromptPage> {
        debug!("list_prompts: {page:?}");
        self.query_summaries("", Vec::new(), page)
    }

    /// Finds prompts whose title or content contains `query`, ignoring ASCII
    /// case. An empty query matches every prompt.
    pub fn search_prompts(&self, query: &str, page: Pagination) -> Result<SearchResults> {
        debug!("search_prompts: query={query:?} {page:?}");

        let pattern = utils::like_pattern(query);
        let params_vec: Vec<Box<dyn ToSql>> = vec![Box::new(pattern.clone()), Box::new(pattern)];
        let page = self.query_summaries(SEARCH_CONDITION, params_vec, page)?;

        Ok(SearchResults {
            query: query.to_string(),
            page,
        })
    }

    /// Runs a filtered summary query and the matching total count.
    ///
    /// `condition` is an optional `WHERE` clause over the `prompts p` alias
    /// whose placeholders are bound from `params_vec`.
    pub(super) fn query_summaries(
        &self,
        condition: &str,
        mut params_vec: Vec<Box<dyn ToSql>>,
        page: Pagination,
    ) -> Result<PromptPage> {
        let count_sql = format!("SELECT COUNT(*) FROM prompts p {condition}");
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();
        let total: i64 = self
            .connection
            .query_row(&count_sql, &params_refs[..], |row| row.get(0))
            .db_context("Failed to count prompts")?;

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM prompts p {condition} {SUMMARY_ORDER} LIMIT ? OFFSET ?"
        );
        params_vec.push(Box::new(page.limit()));
        params_vec.push(Box::new(page.sql_offset()));
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let mut summaries: Vec<PromptSummary> = stmt
            .query_map(&params_refs[..], |row| {
                Ok(PromptSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    snippet: row.get(2)?,
                    tags: Vec::new(),
                    created_at: utils::timestamp_column(row, 3)?,
                    updated_at: utils::timestamp_column(row, 4)?,
                })
            })
            .db_context("Failed to query prompts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch prompts")?;

        for summary in &mut summaries {
            summary.tags = self.tags_for_prompt(&summary.id)?;
        }

        Ok(PromptPage::new(summaries, total.max(0) as u64, page))
    }
}

fn prompt_exists(tx: &Transaction<'_>, id: &str) -> Result<bool> {
    tx.query_row(CHECK_PROMPT_EXISTS_SQL, params![id], |row| row.get(0))
        .db_context("Failed to check prompt existence")
}

/// Writes a new title and content and stamps `updated_at`.
///
/// This is the only path that changes a prompt row, so the timestamp can
/// never be forgotten by a caller.
fn mutate_prompt(tx: &Transaction<'_>, id: &str, title: &str, content: &str) -> Result<usize> {
    tx.execute(MUTATE_PROMPT_SQL, params![title, content, id])
        .map_err(|e| map_title_conflict(e, title, "Failed to update prompt"))
}

/// Translates a lost uniqueness race on `prompts.title` into the typed error.
fn map_title_conflict(err: rusqlite::Error, title: &str, message: &str) -> StoreError {
    if is_unique_violation(&err) {
        StoreError::DuplicateTitle {
            title: title.to_string(),
        }
    } else {
        StoreError::database(message).with_source(err)
    }
}
