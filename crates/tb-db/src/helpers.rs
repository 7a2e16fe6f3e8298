//! Row-to-entity parsing helpers.
//!
//! Every query needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and tolerate what older
//! deployments left in the table: `SQLite`'s `datetime('now')` format,
//! empty-string and `"null"` sentinels, and numbers stored as text.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Rows whose status counts as `open`, including legacy sentinels.
pub const OPEN_STATUS_SQL: &str = "trim(coalesce(status, '')) IN ('open', '', 'null')";

/// Rows with no assignee, including legacy sentinels.
pub const UNASSIGNED_SQL: &str = "trim(coalesce(assignee, '')) IN ('', 'null')";

/// Separator for the `tags` column.
pub const TAG_SEPARATOR: char = ',';

/// Format a timestamp for storage.
///
/// Fixed-width (microseconds, `Z` suffix) so lexical order equals time order.
#[must_use]
pub fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000000Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional `YYYY-MM-DD` column. Empty strings and `MySQL`'s zero
/// date read as `None`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for any other unparseable value.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s.map(str::trim) {
        None | Some("" | "0000-00-00") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}"))),
    }
}

/// Read a nullable TEXT column. Returns `None` for SQL NULL, empty string and `"null"`.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.trim().is_empty() || s == "null" => Ok(None),
        other => Ok(other),
    }
}

/// Read a numeric column that older rows may hold as text.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for text that is neither empty nor a number.
pub fn get_opt_f64(row: &libsql::Row, idx: i32) -> Result<Option<f64>, DatabaseError> {
    match row.get_value(idx)? {
        libsql::Value::Null => Ok(None),
        libsql::Value::Real(v) => Ok(Some(v)),
        #[allow(clippy::cast_precision_loss)]
        libsql::Value::Integer(v) => Ok(Some(v as f64)),
        libsql::Value::Text(s) if s.trim().is_empty() => Ok(None),
        libsql::Value::Text(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse number '{s}': {e}"))),
        libsql::Value::Blob(_) => Err(DatabaseError::Query(format!(
            "Column {idx} holds a blob, expected a number"
        ))),
    }
}

/// Split the comma-joined `tags` column. An empty value yields no tags.
#[must_use]
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Join tags for storage.
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(&TAG_SEPARATOR.to_string())
}

/// Escape `LIKE` wildcards so a search term matches literally (`ESCAPE '\'`).
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn timestamp_is_fixed_width_and_parses_back() {
        let now = Utc::now();
        let s = timestamp(now);
        assert_eq!(s.len(), "2026-02-09T14:30:00.000000Z".len());
        assert!(s.ends_with('Z'));
        let parsed = parse_datetime(&s).unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }

    #[test]
    fn parse_datetime_accepts_sqlite_format() {
        let dt = parse_datetime("2025-09-20 20:00:16").unwrap();
        assert_eq!(timestamp(dt), "2025-09-20T20:00:16.000000Z");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("0000-00-00"), None)]
    #[case(Some("2025-10-01"), NaiveDate::from_ymd_opt(2025, 10, 1))]
    fn optional_date_handles_legacy_values(
        #[case] raw: Option<&str>,
        #[case] expected: Option<NaiveDate>,
    ) {
        assert_eq!(parse_optional_date(raw).unwrap(), expected);
    }

    #[test]
    fn optional_date_rejects_other_formats() {
        assert!(parse_optional_date(Some("10/01/2025")).is_err());
    }

    #[test]
    fn tags_split_and_join() {
        assert!(split_tags(None).is_empty());
        assert!(split_tags(Some("")).is_empty());
        assert_eq!(
            split_tags(Some("rust, api,,db")),
            vec!["rust".to_string(), "api".to_string(), "db".to_string()]
        );
        let tags = vec!["a".to_string(), "b c".to_string()];
        assert_eq!(split_tags(Some(&join_tags(&tags))), tags);
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("bug"), "%bug%");
        assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
    }
}
