//! PostgreSQL implementation of DocumentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{row_to_document, to_bigint, COLUMNS};
use crate::domain::document::VersionedDocument;
use crate::domain::foundation::{DomainError, Page, PageRequest, Timestamp, Version};
use crate::ports::DocumentReader;

/// PostgreSQL implementation of DocumentReader.
#[derive(Clone)]
pub struct PostgresDocumentReader {
    pool: PgPool,
}

impl PostgresDocumentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_optional(
        &self,
        sql: &str,
        context: &str,
        at: Option<Timestamp>,
    ) -> Result<Option<VersionedDocument>, DomainError> {
        let mut query = sqlx::query(sql);
        if let Some(at) = at {
            query = query.bind(*at.as_datetime());
        }

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(context, e))?;

        row.as_ref().map(row_to_document).transpose()
    }
}

#[async_trait]
impl DocumentReader for PostgresDocumentReader {
    async fn find_all(&self, request: PageRequest) -> Result<Page<VersionedDocument>, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM policy_documents")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count documents", e))?;
        let total = u64::try_from(total).unwrap_or(0);

        if request.limit == 0 {
            return Ok(Page::empty(request, total));
        }

        let sql = format!(
            "SELECT {COLUMNS} FROM policy_documents
             ORDER BY version DESC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(request.limit))
            .bind(to_bigint(request.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list documents", e))?;

        let items = rows
            .iter()
            .map(row_to_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, request, total))
    }

    async fn find_by_version(&self, version: Version) -> Result<Option<VersionedDocument>, DomainError> {
        let sql = format!("SELECT {COLUMNS} FROM policy_documents WHERE version = $1");
        let row = sqlx::query(&sql)
            .bind(version.as_i32())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch document", e))?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn latest_draft(&self) -> Result<Option<VersionedDocument>, DomainError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM policy_documents
             WHERE effective_at IS NULL
             ORDER BY version DESC
             LIMIT 1"
        );
        self.fetch_one_optional(&sql, "Failed to fetch latest draft", None)
            .await
    }

    async fn find_effective(&self, at: Timestamp) -> Result<Option<VersionedDocument>, DomainError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM policy_documents
             WHERE effective_at IS NOT NULL AND effective_at <= $1
             ORDER BY effective_at DESC, version DESC
             LIMIT 1"
        );
        self.fetch_one_optional(&sql, "Failed to fetch effective document", Some(at))
            .await
    }

    async fn next_version(&self) -> Result<Version, DomainError> {
        let (next,): (i32,) =
            sqlx::query_as("SELECT COALESCE(MAX(version), 0) + 1 FROM policy_documents")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to compute next version", e))?;

        Ok(Version::new(next))
    }
}
