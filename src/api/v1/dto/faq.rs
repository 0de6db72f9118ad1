/*
 * Responsibility
 * - FAQ response DTO (already localized)
 */
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct FaqItemResponse {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}
