/*
 * Responsibility
 * - Production SessionProvider backed by the sessions/users tables
 * - Expired tokens are filtered out in SQL, not in application code
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::role::{AccountStatus, Role};
use crate::repos::error::RepoError;

use super::{SessionContext, SessionProvider};

pub struct PgSessionProvider {
    db: PgPool,
}

impl PgSessionProvider {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct SessionRow {
    #[sqlx(rename = "userId")]
    user_id: Uuid,
    role: String,
    status: String,
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    async fn fetch(&self, token: &str) -> Result<Option<SessionContext>, RepoError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT u."userId", u."role", u."status"
            FROM sessions s
            JOIN users u ON u."userId" = s."userId"
            WHERE s."token" = $1 AND s."expiresAt" > now()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let role = Role::parse(&row.role).ok_or(RepoError::Corrupt("users.role"))?;

        Ok(Some(SessionContext {
            user_id: row.user_id,
            role,
            status: AccountStatus::parse(&row.status),
        }))
    }
}
