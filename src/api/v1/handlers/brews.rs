/*
 * Responsibility
 * - /brews read handlers (public, filtered through the access policy)
 * - /admin/brews mutation handlers (route group is admin-gated)
 * - /brews/{id}/reviews creation (session-gated)
 */
use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::brews::{
            BrewResponse, CreateBrewRequest, CreateReviewRequest, ReviewResponse,
            SetBrewStatusRequest,
        },
        extractors::{MaybeSession, RequestLocale, Session},
    },
    domain::{
        access::{ContentStatus, can_access_brew, can_read_unpublished_brew},
        locale::{Locale, resolve_localized_text},
        rating::{self, Rating, RatingSummary},
        role::Role,
    },
    error::AppError,
    repos::{
        brew_repo::{self, BrewRow, ReviewRow},
        error::RepoError,
    },
    state::AppState,
};

fn brew_status(row: &BrewRow) -> Result<ContentStatus, AppError> {
    ContentStatus::parse(&row.status).ok_or_else(|| RepoError::Corrupt("brews.status").into())
}

fn review_rating(row: &ReviewRow) -> Rating {
    Rating {
        acidity: row.acidity as u8,
        sweetness: row.sweetness as u8,
        body: row.body as u8,
        aroma: row.aroma as u8,
        balance: row.balance as u8,
    }
}

fn row_to_response(
    row: BrewRow,
    status: ContentStatus,
    locale: Locale,
    ratings: RatingSummary,
) -> BrewResponse {
    let description = resolve_localized_text(
        locale,
        row.description_en.as_deref(),
        row.description_id.as_deref(),
    );

    BrewResponse {
        id: row.id,
        name: row.name,
        origin: row.origin,
        roaster: row.roaster,
        description,
        status,
        ratings,
        created_at: row.created_at,
    }
}

pub async fn list_brews(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    RequestLocale(locale): RequestLocale,
) -> Result<Json<Vec<BrewResponse>>, AppError> {
    let role: Option<Role> = session.map(|ctx| ctx.role);

    // The query already narrows to published rows for ordinary callers; the
    // policy check below is what actually decides visibility.
    let published_only = !can_read_unpublished_brew(role);
    let rows = brew_repo::list(&state.db, published_only).await?;

    let mut visible = Vec::with_capacity(rows.len());
    for row in rows {
        let status = brew_status(&row)?;
        if can_access_brew(status, role) {
            visible.push((row, status));
        }
    }

    let ids: Vec<Uuid> = visible.iter().map(|(row, _)| row.id).collect();
    let mut by_brew: HashMap<Uuid, Vec<Rating>> = HashMap::new();
    for review in brew_repo::list_reviews_for(&state.db, &ids).await? {
        by_brew
            .entry(review.brew_id)
            .or_default()
            .push(review_rating(&review));
    }

    let res = visible
        .into_iter()
        .map(|(row, status)| {
            let summary = by_brew
                .get(&row.id)
                .map(|ratings| rating::aggregate(ratings))
                .unwrap_or_else(RatingSummary::empty);
            row_to_response(row, status, locale, summary)
        })
        .collect();

    Ok(Json(res))
}

pub async fn get_brew(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    RequestLocale(locale): RequestLocale,
    Path(brew_id): Path<Uuid>,
) -> Result<Json<BrewResponse>, AppError> {
    let role = session.map(|ctx| ctx.role);

    let row = brew_repo::get(&state.db, brew_id)
        .await?
        .ok_or_else(|| AppError::not_found("brew"))?;

    let status = brew_status(&row)?;
    if !can_access_brew(status, role) {
        // Same response as a missing row, so drafts do not leak existence.
        return Err(AppError::not_found("brew"));
    }

    let ratings: Vec<Rating> = brew_repo::list_reviews(&state.db, brew_id)
        .await?
        .iter()
        .map(review_rating)
        .collect();

    Ok(Json(row_to_response(
        row,
        status,
        locale,
        rating::aggregate(&ratings),
    )))
}

pub async fn create_brew(
    State(state): State<AppState>,
    Json(req): Json<CreateBrewRequest>,
) -> Result<(StatusCode, Json<BrewResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let row = brew_repo::create(
        &state.db,
        req.name.trim(),
        req.origin.trim(),
        req.roaster.as_deref(),
        req.description_en.as_deref(),
        req.description_id.as_deref(),
    )
    .await?;

    let status = brew_status(&row)?;
    let res = row_to_response(row, status, Locale::En, RatingSummary::empty());

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn set_brew_status(
    State(state): State<AppState>,
    Path(brew_id): Path<Uuid>,
    Json(req): Json<SetBrewStatusRequest>,
) -> Result<Json<BrewResponse>, AppError> {
    let status = req.validate().map_err(AppError::bad_request)?;

    let row = brew_repo::set_status(&state.db, brew_id, status.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("brew"))?;

    Ok(Json(row_to_response(
        row,
        status,
        Locale::En,
        RatingSummary::empty(),
    )))
}

pub async fn create_review(
    State(state): State<AppState>,
    Session(ctx): Session,
    Path(brew_id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let rating = req.validate().map_err(AppError::bad_request)?;

    let row = brew_repo::get(&state.db, brew_id)
        .await?
        .ok_or_else(|| AppError::not_found("brew"))?;
    if !can_access_brew(brew_status(&row)?, Some(ctx.role)) {
        return Err(AppError::not_found("brew"));
    }

    let review = brew_repo::insert_review(
        &state.db,
        brew_id,
        ctx.user_id,
        i16::from(rating.acidity),
        i16::from(rating.sweetness),
        i16::from(rating.body),
        i16::from(rating.aroma),
        i16::from(rating.balance),
        req.comment.as_deref(),
    )
    .await?;

    let res = ReviewResponse {
        id: review.id,
        author_id: review.author_id,
        acidity: rating.acidity,
        sweetness: rating.sweetness,
        body: rating.body,
        aroma: rating.aroma,
        balance: rating.balance,
        overall: rating.overall(),
        comment: review.comment,
        created_at: review.created_at,
    };

    Ok((StatusCode::CREATED, Json(res)))
}
