/*
 * Responsibility
 * - Forum thread/draft request and response DTOs
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub title: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    pub title: String,
    pub body: String,
}

impl SaveDraftRequest {
    /// Autosave payloads may be empty while typing, but not oversized.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.len() > 200 {
            return Err("title must be <= 200 chars");
        }
        if self.body.len() > 20_000 {
            return Err("body must be <= 20000 chars");
        }
        Ok(())
    }
}
