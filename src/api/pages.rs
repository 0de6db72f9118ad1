/*
 * Responsibility
 * - Page-level routes the guard redirects between: /login, /dashboard,
 *   /admin, /admin/site-config
 * - /login is the only unguarded page; it is the redirect target
 */
use axum::{
    Json,
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    api::v1::extractors::{RequestLocale, Session},
    domain::{locale::resolve_localized_config, role::Role},
    error::AppError,
    middleware::guard,
    repos::{brew_repo, config_repo, forum_repo, notification_repo},
    state::AppState,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let dashboard = guard::require(
        Router::new().route("/dashboard", get(dashboard)),
        state.clone(),
        None,
    );
    let admin = guard::require(
        Router::new().route("/admin", get(admin_overview)),
        state.clone(),
        Some(Role::Admin),
    );
    let superuser = guard::require(
        Router::new().route("/admin/site-config", get(site_config)),
        state,
        Some(Role::Superuser),
    );

    Router::new()
        .route("/login", get(login))
        .merge(dashboard)
        .merge(admin)
        .merge(superuser)
}

#[derive(Debug, Deserialize)]
struct LoginParams {
    reason: Option<String>,
}

async fn login(Query(params): Query<LoginParams>) -> Json<Value> {
    Json(json!({
        "page": "login",
        "reason": params.reason,
    }))
}

async fn dashboard(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<Json<Value>, AppError> {
    let unread = notification_repo::unread_count(&state.db, ctx.user_id).await?;
    let draft = forum_repo::get_draft(&state.db, ctx.user_id).await?;

    Ok(Json(json!({
        "user_id": ctx.user_id,
        "role": ctx.role.as_str(),
        "unread_notifications": unread,
        "has_forum_draft": draft.is_some(),
    })))
}

async fn admin_overview(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let counts = brew_repo::count_by_status(&state.db).await?;

    let mut brews = serde_json::Map::new();
    for (status, count) in counts {
        brews.insert(status, json!(count));
    }

    Ok(Json(json!({ "brews": brews })))
}

async fn site_config(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Result<Json<Value>, AppError> {
    let row = config_repo::get(&state.db).await?;

    let (en, id) = match &row {
        Some(row) => (
            row.config_en.as_ref().and_then(Value::as_object),
            row.config_id.as_ref().and_then(Value::as_object),
        ),
        None => (None, None),
    };

    let merged = resolve_localized_config(locale, en, id);

    Ok(Json(Value::Object(merged)))
}
