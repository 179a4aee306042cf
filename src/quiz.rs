// src/quiz.rs

use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashSet;

use crate::models::question::Question;

/// Outcome of a quiz draw.
#[derive(Debug, Clone, PartialEq)]
pub enum NextQuestion {
    /// A question not yet seen in this session.
    Question(Question),
    /// No unseen questions remain in the pool; the session is over.
    Exhausted,
}

impl NextQuestion {
    pub fn into_option(self) -> Option<Question> {
        match self {
            NextQuestion::Question(q) => Some(q),
            NextQuestion::Exhausted => None,
        }
    }
}

/// Picks the next quiz question: one uniformly random element of
/// `pool` whose id is not in `asked_ids`, or `Exhausted` when none remain.
///
/// The candidate set is materialized before the draw, so a single draw
/// either succeeds or the empty case is detected up front. Never samples
/// an index against the unfiltered pool and retries; that pattern can
/// loop forever or read out of bounds.
///
/// Holds no state between calls. The caller threads the full asked-id set
/// through every invocation.
pub fn next_question(pool: &[Question], asked_ids: &HashSet<i64>) -> NextQuestion {
    let remaining: Vec<&Question> = pool
        .iter()
        .filter(|q| !asked_ids.contains(&q.id))
        .collect();

    match remaining.choose(&mut thread_rng()) {
        Some(question) => NextQuestion::Question((*question).clone()),
        None => NextQuestion::Exhausted,
    }
}
