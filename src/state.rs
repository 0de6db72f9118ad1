/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - db: PgPool, sessions: session provider
 * - Clone is cheap (PgPool and Arc are reference counted)
 * - Collaborators are injected here per process, never held as module-level
 *   singletons, so tests can swap them out
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::services::session::SessionProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    pub fn new(db: PgPool, sessions: Arc<dyn SessionProvider>) -> Self {
        Self { db, sessions }
    }
}
