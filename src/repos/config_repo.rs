/*
 * Responsibility
 * - SQLx access to the single site_config row (bilingual JSON objects)
 */
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct SiteConfigRow {
    #[sqlx(rename = "configEn")]
    pub config_en: Option<Value>,
    #[sqlx(rename = "configId")]
    pub config_id: Option<Value>,
}

pub async fn get(db: &PgPool) -> Result<Option<SiteConfigRow>, RepoError> {
    let row = sqlx::query_as::<_, SiteConfigRow>(
        r#"
        SELECT "configEn", "configId"
        FROM site_config
        LIMIT 1
        "#,
    )
    .fetch_optional(db)
    .await?;

    Ok(row)
}
