/*
 * Responsibility
 * - SQLx operations for user_notifications
 * - touch_last_seen is a best-effort presence update; callers are expected
 *   to log and drop its error instead of failing the primary request
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct NotificationRow {
    #[sqlx(rename = "notificationId")]
    pub id: Uuid,
    #[sqlx(rename = "messageEn")]
    pub message_en: Option<String>,
    #[sqlx(rename = "messageId")]
    pub message_id: Option<String>,
    pub read: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<NotificationRow>, RepoError> {
    let rows = sqlx::query_as::<_, NotificationRow>(
        r#"
        SELECT "notificationId", "messageEn", "messageId", "read", "createdAt"
        FROM user_notifications
        WHERE "userId" = $1
        ORDER BY "createdAt" DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn unread_count(db: &PgPool, user_id: Uuid) -> Result<i64, RepoError> {
    let (count,) = sqlx::query_as::<_, (i64,)>(
        r#"
        SELECT COUNT(*)
        FROM user_notifications
        WHERE "userId" = $1 AND "read" = false
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;

    Ok(count)
}

/// Marks the given notifications read; rows belonging to other users are
/// left untouched by the userId filter.
pub async fn mark_read(db: &PgPool, user_id: Uuid, ids: &[Uuid]) -> Result<u64, RepoError> {
    let result = sqlx::query(
        r#"
        UPDATE user_notifications
        SET "read" = true
        WHERE "userId" = $1 AND "notificationId" = ANY($2)
        "#,
    )
    .bind(user_id)
    .bind(ids)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

pub async fn touch_last_seen(db: &PgPool, user_id: Uuid) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        UPDATE users
        SET "lastSeenAt" = now()
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}
