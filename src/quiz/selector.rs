//! Picks the next question in a quiz round.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    Error,
    category::CategoryId,
    question::{Question, QuestionId},
    stores::{CategoryStore, QuestionStore},
};

/// The category ID that clients send to mean "questions from any category".
pub const ALL_CATEGORIES: CategoryId = 0;

/// Rejected draws allowed per pool member before the selector stops drawing
/// from the whole pool and picks directly from the unseen questions.
const MAX_DRAWS_PER_QUESTION: usize = 4;

/// The category a quiz round draws its questions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Every question in the store.
    All,
    /// Only questions in the given category.
    Specific(CategoryId),
}

impl From<CategoryId> for QuizCategory {
    fn from(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            QuizCategory::Specific(id)
        }
    }
}

/// Choose a question from `pool` uniformly at random among those whose ID is
/// not in `previous_questions`.
///
/// Returns `None` when the pool is empty or every question in it has already
/// been served, i.e. the round is complete.
///
/// Questions are drawn from the whole pool and redrawn when they have been
/// seen before. The number of draws is bounded: once the bound is reached the
/// question is picked directly from the unseen questions. Both paths are
/// uniform over the unseen questions, so the bound only affects running time.
pub fn select_next_question<'a, R>(
    pool: &'a [Question],
    previous_questions: &[QuestionId],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng,
{
    let previous: HashSet<QuestionId> = previous_questions.iter().copied().collect();
    let served_count = pool
        .iter()
        .filter(|question| previous.contains(&question.id))
        .count();

    if served_count == pool.len() {
        return None;
    }

    let max_draws = pool.len().saturating_mul(MAX_DRAWS_PER_QUESTION);

    for _ in 0..max_draws {
        let candidate = &pool[rng.gen_range(0..pool.len())];

        if !previous.contains(&candidate.id) {
            return Some(candidate);
        }
    }

    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();

    tracing::debug!(
        "quiz selection fell back to the {} unseen questions after {max_draws} draws",
        unseen.len()
    );

    unseen.choose(rng).copied()
}

/// Get the next quiz question for `category`, skipping `previous_questions`.
///
/// The candidate pool is loaded from the stores on every call.
///
/// # Errors
///
/// Returns [Error::NotFound] if `category` is a specific category that does
/// not exist, or an error if a store query fails. An empty or exhausted pool
/// is not an error and gives `Ok(None)`.
pub fn next_quiz_question<C, Q, R>(
    category: QuizCategory,
    previous_questions: &[QuestionId],
    category_store: &C,
    question_store: &Q,
    rng: &mut R,
) -> Result<Option<Question>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
    R: Rng,
{
    let pool = match category {
        QuizCategory::All => question_store.get_all()?,
        QuizCategory::Specific(category_id) => {
            let category = category_store.get(category_id)?;
            question_store.get_by_category(category.id)?
        }
    };

    let question = select_next_question(&pool, previous_questions, rng).cloned();

    tracing::debug!(
        "selected quiz question {:?} from a pool of {} with {} previous questions",
        question.as_ref().map(|question| question.id),
        pool.len(),
        previous_questions.len()
    );

    Ok(question)
}
