//! Input normalization and validation.
//!
//! Every operation runs its arguments through these functions before any
//! storage work is attempted, so a validation failure can never leave partial
//! state behind. The schema repeats the same checks as a backstop.

use crate::error::{Result, StoreError};

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum tag length, in characters.
pub const MAX_TAG_LEN: usize = 50;
/// Number of leading content characters shown in list results.
pub const SNIPPET_LEN: usize = 200;
/// Default page size.
pub const DEFAULT_LIMIT: i64 = 10;
/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 100;

/// Folds a raw tag to its stored form.
pub fn normalize_tag(raw: &str) -> String {
    raw.to_lowercase()
}

/// Checks that a normalized tag is 1-50 characters of `[a-z0-9_-]`.
pub fn is_valid_tag(normalized: &str) -> bool {
    let len = normalized.chars().count();
    (1..=MAX_TAG_LEN).contains(&len)
        && normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Validates a normalized tag, reporting `raw` on failure.
pub fn validate_tag(raw: &str, normalized: &str) -> Result<()> {
    if is_valid_tag(normalized) {
        Ok(())
    } else {
        Err(StoreError::InvalidTag {
            tag: raw.to_string(),
        })
    }
}

/// Normalizes and validates a tag set, failing on the first invalid entry.
///
/// Tags that collapse to the same normalized name are kept once, in order of
/// first appearance.
pub fn normalize_tags<S: AsRef<str>>(raw_tags: &[S]) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(raw_tags.len());
    for raw in raw_tags {
        let raw = raw.as_ref();
        let tag = normalize_tag(raw);
        validate_tag(raw, &tag)?;
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    Ok(normalized)
}

/// Validates a title: 1-200 characters, no NUL.
pub fn validate_title(title: &str) -> Result<()> {
    if title.contains('\0') {
        return Err(StoreError::InvalidTitle {
            reason: "title contains a NUL character".to_string(),
        });
    }
    let len = title.chars().count();
    if len == 0 {
        return Err(StoreError::InvalidTitle {
            reason: "title is empty".to_string(),
        });
    }
    if len > MAX_TITLE_LEN {
        return Err(StoreError::InvalidTitle {
            reason: format!("title has {len} characters"),
        });
    }
    Ok(())
}

/// Validates prompt content: must not be empty or contain NUL.
pub fn validate_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(StoreError::invalid_input(
            "content",
            "Content must not be empty",
        ));
    }
    if content.contains('\0') {
        return Err(StoreError::invalid_input(
            "content",
            "Content must not contain NUL characters",
        ));
    }
    Ok(())
}

/// A validated page window. Only [`Pagination::new`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: u32,
    offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT as u32,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Validates raw pagination arguments. Out-of-range values are rejected,
    /// never clamped.
    pub fn new(limit: i64, offset: i64) -> Result<Self> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(StoreError::invalid_input(
                "limit",
                format!("must be between 1 and {MAX_LIMIT}, got {limit}"),
            ));
        }
        let offset = u64::try_from(offset).map_err(|_| {
            StoreError::invalid_input("offset", format!("must be >= 0, got {offset}"))
        })?;
        Ok(Self {
            limit: limit as u32,
            offset,
        })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Offset as an SQL integer. Always fits, since it came from a
    /// non-negative `i64`.
    pub(crate) fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }

    /// Whether rows remain past this page.
    pub fn has_more(&self, returned: usize, total: u64) -> bool {
        self.offset.saturating_add(returned as u64) < total
    }
}
