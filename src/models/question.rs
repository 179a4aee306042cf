// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// Questions are immutable once created: they are inserted via the
/// add-question endpoint and removed via delete, never updated in place.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question: String,

    /// The answer text.
    pub answer: String,

    /// Reference to the owning category (categories.id).
    pub category: i64,

    /// Difficulty score, 1 (easiest) through 5 (hardest).
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000, message = "Question text must not be empty."))]
    pub question: String,
    #[validate(length(min = 1, max = 500, message = "Answer text must not be empty."))]
    pub answer: String,
    pub category: i64,
    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5."))]
    pub difficulty: i32,
}
