//! Rewrites a query into a zero-row probe.
//!
//! Reading column metadata only needs the result set description, so the
//! query is folded to lower case and its `LIMIT` clause is forced to
//! `LIMIT 0`. The rewrite is regex based: `LIMIT`-like text inside string
//! literals, comments or subqueries is rewritten as well.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MetadataError, Result};

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r\n|\r|\n|\t)+").expect("valid line break pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static LIMIT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)limit\s+\d+((\s*,\s*\d+)|(\s+offset\s+\d+))?")
        .expect("valid limit pattern")
});

/// Returns the zero-row probe for `sql`.
///
/// # Errors
///
/// Returns [`MetadataError::EmptyQuery`] if `sql` is blank.
///
/// # Example
///
/// ```rust
/// use sqlmeta_core::normalize;
///
/// assert_eq!(normalize("select 1, 2").unwrap(), "select 1, 2 limit 0");
/// assert_eq!(
///     normalize("SELECT * from product limit 0, 10").unwrap(),
///     "select * from product limit 0"
/// );
/// ```
pub fn normalize(sql: &str) -> Result<String> {
    if sql.trim().is_empty() {
        return Err(MetadataError::EmptyQuery);
    }

    let lowered = sql.to_lowercase();
    let single_line = LINE_BREAKS.replace_all(&lowered, " ");
    let collapsed = WHITESPACE.replace_all(single_line.trim(), " ");

    if LIMIT_CLAUSE.is_match(&collapsed) {
        Ok(LIMIT_CLAUSE.replace_all(&collapsed, "limit 0").into_owned())
    } else {
        Ok(format!("{collapsed} limit 0"))
    }
}
