/*
 * Responsibility
 * - Brew/review request and response DTOs
 * - validate() does shape checks; policy checks live in domain/handlers
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::access::ContentStatus;
use crate::domain::rating::{Rating, RatingSummary};

#[derive(Debug, Serialize)]
pub struct BrewResponse {
    pub id: Uuid,
    pub name: String,
    pub origin: String,
    pub roaster: Option<String>,
    /// Already resolved for the request locale.
    pub description: String,
    pub status: ContentStatus,
    pub ratings: RatingSummary,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBrewRequest {
    pub name: String,
    pub origin: String,
    pub roaster: Option<String>,
    pub description_en: Option<String>,
    pub description_id: Option<String>,
}

impl CreateBrewRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.origin.trim().is_empty() {
            return Err("origin is required");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SetBrewStatusRequest {
    pub status: String,
}

impl SetBrewStatusRequest {
    pub fn validate(&self) -> Result<ContentStatus, &'static str> {
        ContentStatus::parse(&self.status).ok_or("status must be published, draft or archived")
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub acidity: u8,
    pub sweetness: u8,
    pub body: u8,
    pub aroma: u8,
    pub balance: u8,
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> Result<Rating, &'static str> {
        let rating = Rating {
            acidity: self.acidity,
            sweetness: self.sweetness,
            body: self.body,
            aroma: self.aroma,
            balance: self.balance,
        };
        rating.validate()?;
        if let Some(comment) = &self.comment
            && comment.len() > 2000
        {
            return Err("comment must be <= 2000 chars");
        }
        Ok(rating)
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub acidity: u8,
    pub sweetness: u8,
    pub body: u8,
    pub aroma: u8,
    pub balance: u8,
    pub overall: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
