// src/pagination.rs

use crate::models::question::Question;

/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slices an id-ordered question sequence into the requested 1-based page.
///
/// A non-positive page number is treated as page 1. Out-of-range pages
/// produce an empty slice, never an error; whether an empty page is a 404
/// is the caller's policy, not this function's.
pub fn paginate(items: &[Question], page: usize, page_size: usize) -> &[Question] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}
