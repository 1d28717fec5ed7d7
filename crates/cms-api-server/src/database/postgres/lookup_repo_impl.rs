// ============================================================================
// CMS Infrastructure - PostgreSQL Link Lookup Repository
// File: crates/cms-api-server/src/database/postgres/lookup_repo_impl.rs
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use crate::domain::LinkKind;
use crate::error::DomainError;
use crate::repositories::{LinkLookupRepository, LookupEntry};

pub struct PgLinkLookupRepository {
    pool: PgPool,
}

impl PgLinkLookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Table backing each link kind. Static strings only; never interpolate
/// caller input into these queries.
fn table_name(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Page => "pages",
        LinkKind::Course => "courses",
        LinkKind::News => "news",
    }
}

#[derive(Debug, FromRow)]
struct LookupRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<LookupRow> for LookupEntry {
    fn from(row: LookupRow) -> Self {
        LookupEntry {
            id: row.id,
            title: row.title,
            slug: row.slug,
        }
    }
}

#[derive(Debug, FromRow)]
struct LabelRow {
    pub id: i64,
    pub title: String,
}

#[async_trait]
impl LinkLookupRepository for PgLinkLookupRepository {
    async fn list(&self, kind: LinkKind) -> Result<Vec<LookupEntry>, DomainError> {
        let sql = format!(
            "SELECT id, title, slug FROM {} ORDER BY id",
            table_name(kind)
        );
        let rows: Vec<LookupRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing {} records: {}", kind.as_str(), e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find(&self, kind: LinkKind, id: i64) -> Result<Option<LookupEntry>, DomainError> {
        let sql = format!(
            "SELECT id, title, slug FROM {} WHERE id = $1",
            table_name(kind)
        );
        let row: Option<LookupRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding {} {}: {}", kind.as_str(), id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(|r| r.into()))
    }

    async fn titles_by_ids(
        &self,
        kind: LinkKind,
        ids: &[i64],
    ) -> Result<HashMap<i64, String>, DomainError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT id, title FROM {} WHERE id = ANY($1)",
            table_name(kind)
        );
        let rows: Vec<LabelRow> = sqlx::query_as(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error labeling {} records: {}", kind.as_str(), e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| (r.id, r.title)).collect())
    }
}
