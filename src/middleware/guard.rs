//! Session/role guard.
//!
//! Responsibility:
//! - Resolve the `session_token` cookie through the injected SessionProvider.
//! - Enforce active-account and minimum-role constraints for a route group.
//! - Failures are redirects, never error payloads: the request ends at
//!   `/login`, `/login?reason=blocked` or `/dashboard`.
//!
//! Per request:
//! 1. no token or unknown token -> redirect `/login`
//! 2. account not active        -> redirect `/login?reason=blocked`
//! 3. below the minimum role    -> redirect `/dashboard`
//! 4. otherwise SessionContext is inserted into request extensions and the
//!    request proceeds.
//!
//! Provider failures also land on `/login`: a caller we cannot identify is
//! treated as not signed in.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::role::Role;
use crate::services::session::SessionContext;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_token";

#[derive(Clone)]
struct GuardState {
    state: AppState,
    min_role: Option<Role>,
}

/// Require a live, active session for every route in `router`, and at least
/// `min_role` when one is given.
pub fn require(
    router: Router<AppState>,
    state: AppState,
    min_role: Option<Role>,
) -> Router<AppState> {
    // axum 0.8: from_fn cannot take a State extractor, so pass state explicitly
    router.layer(middleware::from_fn_with_state(
        GuardState { state, min_role },
        guard_middleware,
    ))
}

/// Attach the session when there is one, without gating: public routes use
/// this so the access policy can see the caller's role.
pub fn attach(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, attach_middleware))
}

async fn guard_middleware(
    State(guard): State<GuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(ctx) = resolve_session(&guard.state, req.headers()).await else {
        return Redirect::to("/login").into_response();
    };

    if !ctx.status.is_active() {
        return Redirect::to("/login?reason=blocked").into_response();
    }

    if let Some(min) = guard.min_role
        && !ctx.role.satisfies(min)
    {
        return Redirect::to("/dashboard").into_response();
    }

    // middleware -> extractor handoff
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

async fn attach_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(ctx) = resolve_session(&state, req.headers()).await
        && ctx.status.is_active()
    {
        req.extensions_mut().insert(ctx);
    }

    next.run(req).await
}

async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<SessionContext> {
    let token = session_token(headers)?;

    match state.sessions.fetch(&token).await {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::warn!(error = ?err, "session lookup failed");
            None
        }
    }
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        h
    }

    #[test]
    fn finds_the_session_cookie_among_others() {
        let h = headers("theme=dark; session_token=abc123; locale=id");
        assert_eq!(session_token(&h), Some("abc123".to_string()));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        assert_eq!(session_token(&headers("theme=dark")), None);
    }
}
