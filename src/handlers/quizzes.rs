// src/handlers/quizzes.rs

use std::collections::HashSet;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{error::AppError, filter, quiz, store};

/// Category selector in a quiz request. Id 0 means "all categories".
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

/// Request body for one quiz round. The client holds the session state and
/// sends the full set of already-asked question ids on every call.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

/// Serves one random not-yet-seen question for the requested category.
///
/// When every question in the pool has been asked, responds with
/// `"question": null` so the client can end the session; exhaustion is a
/// normal outcome, not an error.
pub async fn play_quiz(
    State(pool): State<PgPool>,
    Json(payload): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store::all_questions(&pool).await?;

    let candidates = if payload.quiz_category.id == 0 {
        questions
    } else {
        store::category_by_id(&pool, payload.quiz_category.id)
            .await?
            .ok_or(AppError::Unprocessable("unprocessable".to_string()))?;

        filter::by_category(&questions, payload.quiz_category.id)
    };

    let asked_ids: HashSet<i64> = payload.previous_questions.iter().copied().collect();
    let next = quiz::next_question(&candidates, &asked_ids);

    Ok(Json(serde_json::json!({
        "success": true,
        "question": next.into_option(),
    })))
}
