/*
 * Responsibility
 * - Notification request/response DTOs
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    /// Already resolved for the request locale.
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub ids: Vec<Uuid>,
}

impl MarkReadRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.ids.is_empty() {
            return Err("ids must not be empty");
        }
        Ok(())
    }
}
