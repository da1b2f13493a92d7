//! Row mapping and SQL helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

/// Reads a timestamp column stored as RFC 3339 text.
pub(crate) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Escapes `%`, `_` and `\` so the query is matched literally by
/// `LIKE ... ESCAPE '\'`, then wraps it for substring containment.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Builds `?, ?, ?` for an `IN (...)` clause with `count` parameters.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
