/*
 * Responsibility
 * - SessionContext: what the guard and handlers see about the caller
 * - SessionProvider: the seam to the auth/session store, injected via
 *   AppState so tests can supply a canned implementation
 */
mod pg;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::role::{AccountStatus, Role};
use crate::repos::error::RepoError;

pub use pg::PgSessionProvider;

/// Context attached to a request once its session token resolves.
/// Read-only for the lifetime of one request.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: Uuid,
    pub role: Role,
    pub status: AccountStatus,
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Look up the session token; `None` means no live session.
    async fn fetch(&self, token: &str) -> Result<Option<SessionContext>, RepoError>;
}
