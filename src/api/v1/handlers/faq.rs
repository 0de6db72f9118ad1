/*
 * Responsibility
 * - GET /faq: bilingual items resolved for the request locale
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{dto::faq::FaqItemResponse, extractors::RequestLocale},
    domain::locale::resolve_localized_text,
    error::AppError,
    repos::faq_repo,
    state::AppState,
};

pub async fn list_faq(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Result<Json<Vec<FaqItemResponse>>, AppError> {
    let rows = faq_repo::list(&state.db).await?;

    let res = rows
        .into_iter()
        .map(|row| FaqItemResponse {
            id: row.id,
            question: resolve_localized_text(
                locale,
                row.question_en.as_deref(),
                row.question_id.as_deref(),
            ),
            answer: resolve_localized_text(
                locale,
                row.answer_en.as_deref(),
                row.answer_id.as_deref(),
            ),
        })
        .collect();

    Ok(Json(res))
}
