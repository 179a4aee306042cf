// src/filter.rs

use crate::models::question::Question;

/// Returns the questions whose text contains `term`, case-insensitively.
/// Source order (ascending id) is preserved.
///
/// Validating that the term is non-empty is the caller's job; an empty
/// result here simply means nothing matched.
pub fn search_by_substring(items: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();

    items
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns the questions belonging to `category_id`, in source order.
///
/// The caller resolves category existence first; an unknown id reaching
/// this function just yields an empty result.
pub fn by_category(items: &[Question], category_id: i64) -> Vec<Question> {
    items
        .iter()
        .filter(|q| q.category == category_id)
        .cloned()
        .collect()
}
