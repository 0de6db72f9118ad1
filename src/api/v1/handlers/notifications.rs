/*
 * Responsibility
 * - /notifications handlers (route group is session-gated)
 * - Presence touch is fire-and-forget: a failed touch never fails the
 *   primary request, it is logged and dropped
 */
use axum::{Json, extract::State};
use serde_json::json;
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::notifications::{MarkReadRequest, NotificationResponse},
        extractors::{RequestLocale, Session},
    },
    domain::locale::resolve_localized_text,
    error::AppError,
    repos::notification_repo,
    state::AppState,
};

fn touch_last_seen(state: &AppState, user_id: Uuid) {
    let db = state.db.clone();
    tokio::spawn(async move {
        if let Err(err) = notification_repo::touch_last_seen(&db, user_id).await {
            tracing::debug!(error = ?err, %user_id, "last-seen touch failed");
        }
    });
}

pub async fn list_notifications(
    State(state): State<AppState>,
    Session(ctx): Session,
    RequestLocale(locale): RequestLocale,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let rows = notification_repo::list_for_user(&state.db, ctx.user_id).await?;

    touch_last_seen(&state, ctx.user_id);

    let res = rows
        .into_iter()
        .map(|row| NotificationResponse {
            id: row.id,
            message: resolve_localized_text(
                locale,
                row.message_en.as_deref(),
                row.message_id.as_deref(),
            ),
            read: row.read,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(res))
}

pub async fn mark_notifications_read(
    State(state): State<AppState>,
    Session(ctx): Session,
    Json(req): Json<MarkReadRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let updated = notification_repo::mark_read(&state.db, ctx.user_id, &req.ids).await?;

    touch_last_seen(&state, ctx.user_id);

    Ok(Json(json!({ "updated": updated })))
}
