//! Quiz round selection: drop already-played questions from the candidate
//! list, then pick one uniformly at random from whatever remains.

use std::collections::HashSet;
use std::num::ParseIntError;

use rand::Rng;

use crate::db::Question;

pub fn parse_previous(raw: &str) -> Result<HashSet<i64>, ParseIntError> {
    raw.split(',')
        .map(|token| token.trim().parse::<i64>())
        .collect()
}

pub fn exclude_previous(mut candidates: Vec<Question>, previous: &HashSet<i64>) -> Vec<Question> {
    candidates.retain(|question| !previous.contains(&question.id));
    candidates
}

pub fn pick_random(mut candidates: Vec<Question>) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let idx = rand::thread_rng().gen_range(0..candidates.len());
    Some(candidates.swap_remove(idx))
}
