//! Tag association helpers, tag filtering and tag enumeration.

use log::debug;
use rusqlite::{params, ToSql, Transaction};

use super::utils;
use crate::{
    error::{DatabaseResultExt, Result, StoreError},
    models::{TagFilterResults, TagList, TagUsage},
    validation::{self, Pagination},
};

const UPSERT_TAG_SQL: &str = "INSERT OR IGNORE INTO tags (name) VALUES (?1)";
const INSERT_PROMPT_TAG_SQL: &str = "INSERT INTO prompt_tags (prompt_id, tag_name) VALUES (?1, ?2)";
const DELETE_PROMPT_TAGS_SQL: &str = "DELETE FROM prompt_tags WHERE prompt_id = ?1";
const SELECT_PROMPT_TAGS_SQL: &str =
    "SELECT tag_name FROM prompt_tags WHERE prompt_id = ?1 ORDER BY tag_name ASC";
const LIST_TAGS_SQL: &str = "SELECT t.name, COUNT(pt.prompt_id) \
     FROM tags t \
     LEFT JOIN prompt_tags pt ON pt.tag_name = t.name \
     GROUP BY t.name \
     ORDER BY t.name ASC";

/// Creates any missing tags and links each one to the prompt.
///
/// `tags` must already be normalized and free of duplicates.
pub(super) fn attach_tags(tx: &Transaction<'_>, prompt_id: &str, tags: &[String]) -> Result<()> {
    if tags.is_empty() {
        return Ok(());
    }

    let mut upsert_tag = tx
        .prepare_cached(UPSERT_TAG_SQL)
        .db_context("Failed to prepare tag insert")?;
    let mut insert_link = tx
        .prepare_cached(INSERT_PROMPT_TAG_SQL)
        .db_context("Failed to prepare tag association insert")?;

    for tag in tags {
        upsert_tag
            .execute(params![tag])
            .db_context("Failed to insert tag")?;
        insert_link
            .execute(params![prompt_id, tag])
            .db_context("Failed to associate tag with prompt")?;
    }

    Ok(())
}

/// Removes every tag association of a prompt. Tags themselves are kept.
pub(super) fn detach_all_tags(tx: &Transaction<'_>, prompt_id: &str) -> Result<()> {
    tx.execute(DELETE_PROMPT_TAGS_SQL, params![prompt_id])
        .db_context("Failed to remove tag associations")?;
    Ok(())
}

impl super::Database {
    /// Returns the tag names attached to a prompt, ordered by name.
    pub fn tags_for_prompt(&self, prompt_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare_cached(SELECT_PROMPT_TAGS_SQL)
            .db_context("Failed to prepare tag query")?;

        let tags = stmt
            .query_map(params![prompt_id], |row| row.get(0))
            .db_context("Failed to query prompt tags")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch prompt tags")?;

        Ok(tags)
    }

    /// Lists prompts carrying any of the given tags, most recently updated
    /// first. Each prompt appears once no matter how many tags it matches.
    pub fn filter_by_tags<S: AsRef<str>>(
        &self,
        tags: &[S],
        page: Pagination,
    ) -> Result<TagFilterResults> {
        if tags.is_empty() {
            return Err(StoreError::invalid_input(
                "tags",
                "at least one tag is required",
            ));
        }
        let matched_tags = validation::normalize_tags(tags)?;

        debug!("filter_by_tags: tags={matched_tags:?} {page:?}");

        let condition = format!(
            "WHERE p.id IN (SELECT prompt_id FROM prompt_tags WHERE tag_name IN ({}))",
            utils::placeholders(matched_tags.len())
        );
        let params_vec: Vec<Box<dyn ToSql>> = matched_tags
            .iter()
            .map(|tag| Box::new(tag.clone()) as Box<dyn ToSql>)
            .collect();

        let page = self.query_summaries(&condition, params_vec, page)?;

        Ok(TagFilterResults { matched_tags, page })
    }

    /// Lists every known tag with the number of prompts using it, including
    /// tags no prompt references any more.
    pub fn list_tags(&self) -> Result<TagList> {
        let mut stmt = self
            .connection
            .prepare(LIST_TAGS_SQL)
            .db_context("Failed to prepare query")?;

        let tags = stmt
            .query_map([], |row| {
                Ok(TagUsage {
                    name: row.get(0)?,
                    prompt_count: row.get::<_, i64>(1)?.max(0) as u64,
                })
            })
            .db_context("Failed to query tags")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tags")?;

        Ok(TagList::new(tags))
    }
}
