//! Quiz rounds that serve random questions the player has not seen yet.

mod endpoint;
mod selector;

pub use endpoint::next_quiz_question_endpoint;
pub use selector::{QuizCategory, next_quiz_question};
