//! Idempotent schema bootstrap, run once at startup.
//!
//! Against a full CMS database these statements are no-ops; they exist so a
//! fresh development database boots without a separate migration step.

use anyhow::Result;
use sqlx::PgPool;
use tracing::debug;

pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    // Navigation menu rows. The tree itself is never persisted, only the
    // parent_id back-references.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS menus (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT,
            page_id BIGINT,
            course_id BIGINT,
            news_id BIGINT,
            parent_id BIGINT REFERENCES menus(id),
            sort_order INT NOT NULL DEFAULT 0,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            target TEXT NOT NULL DEFAULT '_self',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_menus_parent_id ON menus(parent_id)")
        .execute(pool)
        .await?;

    // Link-target tables are owned by other parts of the CMS; the minimal
    // form here only covers what the pickers and the labeler read.
    for table in ["pages", "courses", "news"] {
        let stmt = format!(
            r#"CREATE TABLE IF NOT EXISTS {table} (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                slug TEXT NOT NULL,
                created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
            )"#
        );
        sqlx::query(&stmt).execute(pool).await?;
    }

    debug!("Database schema ensured");
    Ok(())
}
