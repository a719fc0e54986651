//! Row mapping shared by the PostgreSQL reader and repository.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::document::VersionedDocument;
use crate::domain::foundation::{DomainError, Timestamp, Version};

/// Column list for policy_documents queries.
pub(super) const COLUMNS: &str = "version, content, effective_at, created_at, updated_at";

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) fn row_to_document(row: &PgRow) -> Result<VersionedDocument, DomainError> {
    let version: i32 = column(row, "version")?;
    let content: String = column(row, "content")?;
    let effective_at: Option<DateTime<Utc>> = column(row, "effective_at")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    Ok(VersionedDocument::reconstitute(
        Version::new(version),
        content,
        effective_at.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

/// Converts an offset or limit to the `BIGINT` Postgres expects.
pub(super) fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
