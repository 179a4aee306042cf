// tests/core_tests.rs
//
// Tests for the pagination, filtering, and quiz-selection logic. These are
// pure functions over in-memory data, so no database is required.

use std::collections::HashSet;

use trivia_backend::filter;
use trivia_backend::models::question::Question;
use trivia_backend::pagination::{self, QUESTIONS_PER_PAGE};
use trivia_backend::quiz::{self, NextQuestion};

/// Builds a question with ascending-id-friendly defaults.
fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {}", id),
        category,
        difficulty: 3,
    }
}

/// Builds `count` questions with ids 1..=count, all in category 1.
fn questions(count: i64) -> Vec<Question> {
    (1..=count)
        .map(|id| question(id, &format!("question {}", id), 1))
        .collect()
}

fn ids(items: &[Question]) -> Vec<i64> {
    items.iter().map(|q| q.id).collect()
}

#[test]
fn paginate_splits_twelve_items_into_ten_and_two() {
    // Arrange
    let items = questions(12);

    // Act
    let first = pagination::paginate(&items, 1, QUESTIONS_PER_PAGE);
    let second = pagination::paginate(&items, 2, QUESTIONS_PER_PAGE);

    // Assert
    assert_eq!(ids(first), (1..=10).collect::<Vec<i64>>());
    assert_eq!(ids(second), vec![11, 12]);
}

#[test]
fn paginate_last_partial_page_and_beyond() {
    // Arrange
    let items = questions(23);

    // Act
    let third = pagination::paginate(&items, 3, QUESTIONS_PER_PAGE);
    let fourth = pagination::paginate(&items, 4, QUESTIONS_PER_PAGE);

    // Assert
    assert_eq!(ids(third), vec![21, 22, 23]);
    assert!(fourth.is_empty());
}

#[test]
fn paginate_never_exceeds_page_size() {
    let items = questions(23);

    for page in 1..=6 {
        let slice = pagination::paginate(&items, page, QUESTIONS_PER_PAGE);
        assert!(slice.len() <= QUESTIONS_PER_PAGE);
    }
}

#[test]
fn paginate_treats_page_zero_as_page_one() {
    let items = questions(5);

    let zero = pagination::paginate(&items, 0, QUESTIONS_PER_PAGE);
    let one = pagination::paginate(&items, 1, QUESTIONS_PER_PAGE);

    assert_eq!(ids(zero), ids(one));
}

#[test]
fn paginate_empty_collection_yields_empty_page() {
    let items: Vec<Question> = Vec::new();

    assert!(pagination::paginate(&items, 1, QUESTIONS_PER_PAGE).is_empty());
}

#[test]
fn search_is_case_insensitive() {
    // Arrange
    let items = vec![
        question(1, "What was the title of the 1990 fantasy film?", 5),
        question(2, "Whose autobiography is entitled this way?", 4),
        question(3, "Which country won the World Cup?", 6),
    ];

    // Act
    let upper = filter::search_by_substring(&items, "TITLE");
    let lower = filter::search_by_substring(&items, "title");

    // Assert
    assert_eq!(ids(&upper), vec![1, 2]);
    assert_eq!(ids(&upper), ids(&lower));
}

#[test]
fn search_preserves_id_order_and_handles_no_match() {
    let items = questions(12);

    let all = filter::search_by_substring(&items, "question");
    let none = filter::search_by_substring(&items, "no such text");

    assert_eq!(ids(&all), (1..=12).collect::<Vec<i64>>());
    assert!(none.is_empty());
}

#[test]
fn by_category_never_leaks_other_categories() {
    // Arrange
    let items = vec![
        question(1, "science one", 1),
        question(2, "art one", 2),
        question(3, "science two", 1),
        question(4, "sports one", 6),
    ];

    // Act
    let science = filter::by_category(&items, 1);
    let unknown = filter::by_category(&items, 99);

    // Assert
    assert_eq!(ids(&science), vec![1, 3]);
    assert!(science.iter().all(|q| q.category == 1));
    assert!(unknown.is_empty());
}

#[test]
fn quiz_never_returns_an_asked_question() {
    // Arrange
    let pool = questions(5);
    let asked: HashSet<i64> = [1, 2].into_iter().collect();

    // Act / Assert: the draw is random, so sample it many times.
    for _ in 0..100 {
        match quiz::next_question(&pool, &asked) {
            NextQuestion::Question(q) => {
                assert!(!asked.contains(&q.id));
                assert!(pool.iter().any(|p| p.id == q.id));
            }
            NextQuestion::Exhausted => panic!("pool still has unseen questions"),
        }
    }
}

#[test]
fn quiz_exhausts_when_every_question_was_asked() {
    let pool = questions(3);
    let asked: HashSet<i64> = pool.iter().map(|q| q.id).collect();

    assert_eq!(quiz::next_question(&pool, &asked), NextQuestion::Exhausted);
}

#[test]
fn quiz_exhausts_on_empty_pool() {
    let pool: Vec<Question> = Vec::new();
    let asked = HashSet::new();

    assert_eq!(quiz::next_question(&pool, &asked), NextQuestion::Exhausted);
}

#[test]
fn quiz_session_serves_each_remaining_question_exactly_once() {
    // Arrange: three questions in category 1, Q1 already asked.
    let pool = questions(3);
    let mut asked: HashSet<i64> = [1].into_iter().collect();
    let mut served = Vec::new();

    // Act: play until exhaustion, threading the asked set like a client.
    loop {
        match quiz::next_question(&pool, &asked) {
            NextQuestion::Question(q) => {
                assert!(q.id == 2 || q.id == 3);
                assert!(asked.insert(q.id), "question {} served twice", q.id);
                served.push(q.id);
            }
            NextQuestion::Exhausted => break,
        }
    }

    // Assert: both unseen questions came out, each once.
    served.sort();
    assert_eq!(served, vec![2, 3]);
}

#[test]
fn quiz_success_count_equals_unseen_pool_size() {
    // Arrange: six questions; two already asked plus one id not in the pool.
    let pool = questions(6);
    let mut asked: HashSet<i64> = [2, 5, 100].into_iter().collect();
    let mut successes = 0;

    // Act
    loop {
        match quiz::next_question(&pool, &asked) {
            NextQuestion::Question(q) => {
                asked.insert(q.id);
                successes += 1;
            }
            NextQuestion::Exhausted => break,
        }
        assert!(successes <= 6, "selector failed to terminate");
    }

    // Assert: |pool| - |asked ∩ pool| = 6 - 2
    assert_eq!(successes, 4);
}
