// ============================================================================
// CMS Infrastructure - PostgreSQL Menu Repository
// File: crates/cms-api-server/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use crate::domain::{MenuItem, MenuItemDraft, MenuLink, MenuTarget, ReorderUpdate};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i64,
    pub title: String,
    pub url: Option<String>,
    pub page_id: Option<i64>,
    pub course_id: Option<i64>,
    pub news_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub is_active: bool,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            title: row.title,
            link: MenuLink::from_columns(row.url, row.page_id, row.course_id, row.news_id),
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            is_active: row.is_active,
            target: MenuTarget::from_str(&row.target).unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn fetch_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, title, url, page_id, course_id, news_id,
                parent_id, sort_order, is_active, target, created_at
            FROM menus
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching menus: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, title, url, page_id, course_id, news_id,
                parent_id, sort_order, is_active, target, created_at
            FROM menus
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert(&self, draft: &MenuItemDraft) -> Result<MenuItem, DomainError> {
        // All four link columns are written every time; unused ones are NULL.
        let (url, page_id, course_id, news_id) = draft.link.to_columns();

        let row: MenuItemRow = sqlx::query_as(
            r#"
            INSERT INTO menus (
                title, url, page_id, course_id, news_id,
                parent_id, sort_order, is_active, target
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, title, url, page_id, course_id, news_id,
                parent_id, sort_order, is_active, target, created_at
            "#,
        )
        .bind(&draft.title)
        .bind(url)
        .bind(page_id)
        .bind(course_id)
        .bind(news_id)
        .bind(draft.parent_id)
        .bind(draft.sort_order)
        .bind(draft.is_active)
        .bind(draft.target.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        draft: &MenuItemDraft,
    ) -> Result<Option<MenuItem>, DomainError> {
        let (url, page_id, course_id, news_id) = draft.link.to_columns();

        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            UPDATE menus
            SET
                title = $2,
                url = $3,
                page_id = $4,
                course_id = $5,
                news_id = $6,
                parent_id = $7,
                sort_order = $8,
                is_active = $9,
                target = $10
            WHERE id = $1
            RETURNING
                id, title, url, page_id, course_id, news_id,
                parent_id, sort_order, is_active, target, created_at
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(url)
        .bind(page_id)
        .bind(course_id)
        .bind(news_id)
        .bind(draft.parent_id)
        .bind(draft.sort_order)
        .bind(draft.is_active)
        .bind(draft.target.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating menu {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        // One statement deletes the whole subtree, so the self-referencing
        // foreign key never sees an intermediate state.
        let result = sqlx::query("DELETE FROM menus WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting menus {:?}: {}", ids, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    async fn update_sort_orders(&self, updates: &[ReorderUpdate]) -> Result<u64, DomainError> {
        if updates.is_empty() {
            return Ok(0);
        }

        let mut transaction = self.pool.begin().await.map_err(|e| {
            error!("Database error starting reorder transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut updated = 0u64;
        for entry in updates {
            let result = sqlx::query("UPDATE menus SET sort_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.sort_order)
                .execute(&mut *transaction)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error reordering menu {}: {}", entry.id, e);
                    DomainError::DatabaseError(e.to_string())
                })?;
            updated += result.rows_affected();
        }

        transaction.commit().await.map_err(|e| {
            error!("Database error committing reorder: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(updated)
    }
}
