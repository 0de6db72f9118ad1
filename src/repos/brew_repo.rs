/*
 * Responsibility
 * - SQLx operations for the brews and brew_reviews tables
 * - Takes a PgPool, returns rows; status stays a plain string here and is
 *   parsed into ContentStatus at the handler edge
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct BrewRow {
    #[sqlx(rename = "brewId")]
    pub id: Uuid,
    pub name: String,
    pub origin: String,
    pub roaster: Option<String>,
    #[sqlx(rename = "descriptionEn")]
    pub description_en: Option<String>,
    #[sqlx(rename = "descriptionId")]
    pub description_id: Option<String>,
    pub status: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

const BREW_COLUMNS: &str = r#""brewId", "name", "origin", "roaster", "descriptionEn", "descriptionId", "status", "createdAt""#;

pub async fn list(db: &PgPool, published_only: bool) -> Result<Vec<BrewRow>, RepoError> {
    let rows = sqlx::query_as::<_, BrewRow>(&format!(
        r#"
        SELECT {BREW_COLUMNS}
        FROM brews
        WHERE ($1 = false OR "status" = 'published')
        ORDER BY "createdAt" DESC
        "#,
    ))
    .bind(published_only)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, brew_id: Uuid) -> Result<Option<BrewRow>, RepoError> {
    let row = sqlx::query_as::<_, BrewRow>(&format!(
        r#"
        SELECT {BREW_COLUMNS}
        FROM brews
        WHERE "brewId" = $1
        "#,
    ))
    .bind(brew_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    origin: &str,
    roaster: Option<&str>,
    description_en: Option<&str>,
    description_id: Option<&str>,
) -> Result<BrewRow, RepoError> {
    // New brews start as drafts; publishing is a separate status change.
    let row = sqlx::query_as::<_, BrewRow>(&format!(
        r#"
        INSERT INTO brews ("name", "origin", "roaster", "descriptionEn", "descriptionId", "status")
        VALUES ($1, $2, $3, $4, $5, 'draft')
        RETURNING {BREW_COLUMNS}
        "#,
    ))
    .bind(name)
    .bind(origin)
    .bind(roaster)
    .bind(description_en)
    .bind(description_id)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn set_status(
    db: &PgPool,
    brew_id: Uuid,
    status: &str,
) -> Result<Option<BrewRow>, RepoError> {
    let row = sqlx::query_as::<_, BrewRow>(&format!(
        r#"
        UPDATE brews
        SET "status" = $2
        WHERE "brewId" = $1
        RETURNING {BREW_COLUMNS}
        "#,
    ))
    .bind(brew_id)
    .bind(status)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn count_by_status(db: &PgPool) -> Result<Vec<(String, i64)>, RepoError> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT "status", COUNT(*)
        FROM brews
        GROUP BY "status"
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

#[derive(Debug, FromRow)]
pub struct ReviewRow {
    #[sqlx(rename = "reviewId")]
    pub id: Uuid,
    #[sqlx(rename = "brewId")]
    pub brew_id: Uuid,
    #[sqlx(rename = "authorId")]
    pub author_id: Uuid,
    pub acidity: i16,
    pub sweetness: i16,
    pub body: i16,
    pub aroma: i16,
    pub balance: i16,
    pub comment: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

const REVIEW_COLUMNS: &str = r#""reviewId", "brewId", "authorId", "acidity", "sweetness", "body", "aroma", "balance", "comment", "createdAt""#;

pub async fn list_reviews(db: &PgPool, brew_id: Uuid) -> Result<Vec<ReviewRow>, RepoError> {
    let rows = sqlx::query_as::<_, ReviewRow>(&format!(
        r#"
        SELECT {REVIEW_COLUMNS}
        FROM brew_reviews
        WHERE "brewId" = $1
        ORDER BY "createdAt" DESC
        "#,
    ))
    .bind(brew_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// One round trip for the list view: reviews for many brews at once.
pub async fn list_reviews_for(db: &PgPool, brew_ids: &[Uuid]) -> Result<Vec<ReviewRow>, RepoError> {
    let rows = sqlx::query_as::<_, ReviewRow>(&format!(
        r#"
        SELECT {REVIEW_COLUMNS}
        FROM brew_reviews
        WHERE "brewId" = ANY($1)
        "#,
    ))
    .bind(brew_ids)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_review(
    db: &PgPool,
    brew_id: Uuid,
    author_id: Uuid,
    acidity: i16,
    sweetness: i16,
    body: i16,
    aroma: i16,
    balance: i16,
    comment: Option<&str>,
) -> Result<ReviewRow, RepoError> {
    let row = sqlx::query_as::<_, ReviewRow>(&format!(
        r#"
        INSERT INTO brew_reviews
            ("brewId", "authorId", "acidity", "sweetness", "body", "aroma", "balance", "comment")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {REVIEW_COLUMNS}
        "#,
    ))
    .bind(brew_id)
    .bind(author_id)
    .bind(acidity)
    .bind(sweetness)
    .bind(body)
    .bind(aroma)
    .bind(balance)
    .bind(comment)
    .fetch_one(db)
    .await?;

    Ok(row)
}
