// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError, filter, models::question::CreateQuestionRequest, pagination, store,
};

/// Query parameters for paginated listings.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// The effective 1-based page number. Absent or non-positive values
    /// fall back to page 1.
    pub fn page(&self) -> usize {
        match self.page {
            Some(p) if p > 0 => p as usize,
            _ => 1,
        }
    }
}

/// Lists all questions, paginated, together with the category list.
///
/// A page past the end of the collection (or an empty collection) is
/// reported as not-found, mirroring how clients page through the list.
pub async fn list_questions(
    State(pool): State<PgPool>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store::all_questions(&pool).await?;
    let page = pagination::paginate(&questions, params.page(), pagination::QUESTIONS_PER_PAGE);

    if page.is_empty() {
        return Err(AppError::NotFound("resource not found".to_string()));
    }

    let categories = store::all_categories(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "total_questions": questions.len(),
        "categories": categories,
    })))
}

/// Creates a new question.
///
/// Malformed payloads (empty text, out-of-range difficulty) are bad
/// requests; a well-formed payload naming an unknown category is
/// unprocessable. Responds with the refreshed first page so list views
/// can update in place.
pub async fn create_question(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    store::category_by_id(&pool, payload.category)
        .await?
        .ok_or(AppError::Unprocessable("unprocessable".to_string()))?;

    let created_id = store::insert_question(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to insert question: {:?}", e);
        AppError::Internal(e.to_string())
    })?;

    let questions = store::all_questions(&pool).await?;
    let page = pagination::paginate(&questions, 1, pagination::QUESTIONS_PER_PAGE);

    Ok(Json(serde_json::json!({
        "success": true,
        "created": created_id,
        "questions": page,
        "total_questions": questions.len(),
    })))
}

/// Deletes a question by id.
pub async fn delete_question(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows_affected = store::delete_question(&pool, id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::Internal(e.to_string())
    })?;

    if rows_affected == 0 {
        return Err(AppError::NotFound("resource not found".to_string()));
    }

    let questions = store::all_questions(&pool).await?;
    let page = pagination::paginate(&questions, 1, pagination::QUESTIONS_PER_PAGE);

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": id,
        "questions": page,
        "total_questions": questions.len(),
    })))
}

/// Request body for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Searches question text for a case-insensitive substring, paginated.
///
/// An empty or missing term is a bad request. Zero matches is a success
/// with an empty list, not a failure.
pub async fn search_questions(
    State(pool): State<PgPool>,
    Query(params): Query<PageParams>,
    Json(payload): Json<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload.search_term.as_deref().map(str::trim).unwrap_or("");
    if term.is_empty() {
        return Err(AppError::BadRequest("bad request".to_string()));
    }

    let questions = store::all_questions(&pool).await?;
    let matching = filter::search_by_substring(&questions, term);
    let page = pagination::paginate(&matching, params.page(), pagination::QUESTIONS_PER_PAGE);

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "total_questions": matching.len(),
        "current_category": serde_json::Value::Null,
    })))
}
