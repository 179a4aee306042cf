// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{error::AppError, filter, pagination, store};

use super::questions::PageParams;

/// Lists all available categories.
pub async fn list_categories(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let categories = store::all_categories(&pool).await.map_err(|e| {
        tracing::error!("Failed to fetch categories: {:?}", e);
        AppError::Internal(e.to_string())
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": categories,
    })))
}

/// Lists the questions belonging to one category, paginated.
///
/// The category id must exist; an unknown id is rejected as unprocessable
/// rather than not-found. A real category with no questions is still a
/// success with an empty list.
pub async fn questions_in_category(
    State(pool): State<PgPool>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let category = store::category_by_id(&pool, category_id)
        .await?
        .ok_or(AppError::Unprocessable("unprocessable".to_string()))?;

    let questions = store::all_questions(&pool).await?;
    let matching = filter::by_category(&questions, category_id);
    let page = pagination::paginate(&matching, params.page(), pagination::QUESTIONS_PER_PAGE);

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": page,
        "total_questions": matching.len(),
        "current_category": category,
    })))
}
