// src/store.rs

use sqlx::PgPool;

use crate::models::{category::Category, question::CreateQuestionRequest, question::Question};

/// Fetches every question, ordered by ascending id.
///
/// Pagination and filtering never happen in SQL; handlers work on this
/// snapshot so the slicing rules live in one place and stay testable.
pub async fn all_questions(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Fetches every category, ordered by ascending id.
pub async fn all_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, name, category_type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Looks up a single category by id.
pub async fn category_by_id(pool: &PgPool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, name, category_type FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts a question and returns its generated id.
pub async fn insert_question(
    pool: &PgPool,
    req: &CreateQuestionRequest,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&req.question)
    .bind(&req.answer)
    .bind(req.category)
    .bind(req.difficulty)
    .fetch_one(pool)
    .await
}

/// Deletes a question by id. Returns the number of rows removed
/// (0 when the id did not exist).
pub async fn delete_question(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
