/*
 * Responsibility
 * - Extractors handing the guard's SessionContext to handlers
 * - The guard middleware inserts the context into request extensions;
 *   handlers only ever see these types
 */
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::services::session::SessionContext;
use crate::state::AppState;

/// Required session. Routes behind `guard::require` always have one; a miss
/// means the middleware was not applied and is rejected with 401.
pub struct Session(pub SessionContext);

impl FromRequestParts<AppState> for Session {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .map(Session)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Optional session for public routes behind `guard::attach`: the access
/// policy wants the role when there is one, anonymous otherwise.
pub struct MaybeSession(pub Option<SessionContext>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(parts.extensions.get::<SessionContext>().cloned()))
    }
}
