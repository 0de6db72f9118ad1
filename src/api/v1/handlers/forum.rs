/*
 * Responsibility
 * - /forum handlers (route group is session-gated)
 * - Draft endpoints are per-user autosave: GET/PUT/DELETE one row
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::forum::{DraftResponse, SaveDraftRequest, ThreadResponse},
        extractors::Session,
    },
    error::AppError,
    repos::forum_repo,
    state::AppState,
};

const THREAD_PAGE_SIZE: i64 = 50;

pub async fn list_threads(
    State(state): State<AppState>,
) -> Result<Json<Vec<ThreadResponse>>, AppError> {
    let rows = forum_repo::list_threads(&state.db, THREAD_PAGE_SIZE).await?;

    let res = rows
        .into_iter()
        .map(|row| ThreadResponse {
            id: row.id,
            author_id: row.author_id,
            title: row.title,
            body: row.body,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(res))
}

pub async fn get_draft(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<Json<DraftResponse>, AppError> {
    let row = forum_repo::get_draft(&state.db, ctx.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("draft"))?;

    Ok(Json(DraftResponse {
        title: row.title,
        body: row.body,
        updated_at: row.updated_at,
    }))
}

pub async fn save_draft(
    State(state): State<AppState>,
    Session(ctx): Session,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = forum_repo::upsert_draft(&state.db, ctx.user_id, &req.title, &req.body).await?;

    Ok(Json(DraftResponse {
        title: row.title,
        body: row.body,
        updated_at: row.updated_at,
    }))
}

pub async fn delete_draft(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<StatusCode, AppError> {
    let deleted = forum_repo::delete_draft(&state.db, ctx.user_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("draft"))
    }
}
