//! PostgreSQL implementation of DocumentRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{row_to_document, COLUMNS};
use crate::domain::document::VersionedDocument;
use crate::domain::foundation::{DomainError, ErrorCode, Version};
use crate::ports::DocumentRepository;

/// PostgreSQL implementation of DocumentRepository.
#[derive(Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn save(&self, document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        let sql = format!(
            "INSERT INTO policy_documents (version, content, effective_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (version) DO UPDATE SET
                 content = EXCLUDED.content,
                 effective_at = EXCLUDED.effective_at,
                 updated_at = EXCLUDED.updated_at
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(document.version().as_i32())
            .bind(document.content())
            .bind(document.effective_at().map(|t| *t.as_datetime()))
            .bind(*document.created_at().as_datetime())
            .bind(*document.updated_at().as_datetime())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to save document", e))?;

        row_to_document(&row)
    }

    async fn insert(&self, document: &VersionedDocument) -> Result<VersionedDocument, DomainError> {
        let sql = format!(
            "INSERT INTO policy_documents (version, content, effective_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query(&sql)
            .bind(document.version().as_i32())
            .bind(document.content())
            .bind(document.effective_at().map(|t| *t.as_datetime()))
            .bind(*document.created_at().as_datetime())
            .bind(*document.updated_at().as_datetime())
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(row) => row_to_document(&row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DomainError::new(
                    ErrorCode::VersionTaken,
                    format!("Document version {} already exists", document.version()),
                )
                .with_detail("version", document.version().to_string()),
            ),
            Err(e) => Err(DomainError::database("Failed to insert document", e)),
        }
    }

    async fn delete_by_version(&self, version: Version) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM policy_documents WHERE version = $1")
            .bind(version.as_i32())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete document", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DocumentNotFound,
                format!("Document version {} not found", version),
            ));
        }

        Ok(())
    }
}
