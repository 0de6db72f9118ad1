/*
 * Responsibility
 * - SQLx operations for faq_items
 * - Bilingual columns come back raw; locale resolution happens in handlers
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct FaqRow {
    #[sqlx(rename = "faqId")]
    pub id: Uuid,
    #[sqlx(rename = "questionEn")]
    pub question_en: Option<String>,
    #[sqlx(rename = "questionId")]
    pub question_id: Option<String>,
    #[sqlx(rename = "answerEn")]
    pub answer_en: Option<String>,
    #[sqlx(rename = "answerId")]
    pub answer_id: Option<String>,
    pub position: i32,
}

pub async fn list(db: &PgPool) -> Result<Vec<FaqRow>, RepoError> {
    let rows = sqlx::query_as::<_, FaqRow>(
        r#"
        SELECT "faqId", "questionEn", "questionId", "answerEn", "answerId", "position"
        FROM faq_items
        ORDER BY "position" ASC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
