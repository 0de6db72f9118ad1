// Responsibility
// - v1 URL structure and which guard covers which group
// - public reads carry the session when present (policy sees the role),
//   member routes require an active session, /admin/* requires admin
use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::domain::role::Role;
use crate::middleware::guard;
use crate::state::AppState;

use crate::api::v1::handlers::{
    brews::{create_brew, create_review, get_brew, list_brews, set_brew_status},
    faq::list_faq,
    forum::{delete_draft, get_draft, list_threads, save_draft},
    health::health,
    notifications::{list_notifications, mark_notifications_read},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/brews", get(list_brews))
        .route("/brews/{brew_id}", get(get_brew))
        .route("/faq", get(list_faq));
    let public = guard::attach(public, state.clone());

    let member = Router::new()
        .route("/brews/{brew_id}/reviews", post(create_review))
        .route("/forum/threads", get(list_threads))
        .route(
            "/forum/draft",
            get(get_draft).put(save_draft).delete(delete_draft),
        )
        .route("/notifications", get(list_notifications))
        .route("/notifications/read", post(mark_notifications_read));
    let member = guard::require(member, state.clone(), None);

    let admin = Router::new()
        .route("/admin/brews", post(create_brew))
        .route("/admin/brews/{brew_id}/status", patch(set_brew_status));
    let admin = guard::require(admin, state, Some(Role::Admin));

    Router::new()
        .route("/health", get(health))
        .merge(public)
        .merge(member)
        .merge(admin)
}
