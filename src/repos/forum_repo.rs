/*
 * Responsibility
 * - SQLx operations for forum_threads and forum_drafts
 * - Drafts are one-per-user autosave rows (upsert on userId)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct ThreadRow {
    #[sqlx(rename = "threadId")]
    pub id: Uuid,
    #[sqlx(rename = "authorId")]
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn list_threads(db: &PgPool, limit: i64) -> Result<Vec<ThreadRow>, RepoError> {
    let rows = sqlx::query_as::<_, ThreadRow>(
        r#"
        SELECT "threadId", "authorId", "title", "body", "createdAt"
        FROM forum_threads
        ORDER BY "createdAt" DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

#[derive(Debug, FromRow)]
pub struct DraftRow {
    #[sqlx(rename = "userId")]
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn get_draft(db: &PgPool, user_id: Uuid) -> Result<Option<DraftRow>, RepoError> {
    let row = sqlx::query_as::<_, DraftRow>(
        r#"
        SELECT "userId", "title", "body", "updatedAt"
        FROM forum_drafts
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn upsert_draft(
    db: &PgPool,
    user_id: Uuid,
    title: &str,
    body: &str,
) -> Result<DraftRow, RepoError> {
    let row = sqlx::query_as::<_, DraftRow>(
        r#"
        INSERT INTO forum_drafts ("userId", "title", "body", "updatedAt")
        VALUES ($1, $2, $3, now())
        ON CONFLICT ("userId") DO UPDATE
        SET "title" = EXCLUDED."title",
            "body" = EXCLUDED."body",
            "updatedAt" = now()
        RETURNING "userId", "title", "body", "updatedAt"
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(body)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn delete_draft(db: &PgPool, user_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM forum_drafts
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
