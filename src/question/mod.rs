//! Trivia questions and the endpoints for listing, creating, searching and
//! deleting them.

mod create;
mod delete;
mod domain;
mod list;
mod search;

pub use create::create_question_endpoint;
pub use delete::delete_question_endpoint;
pub use domain::{Difficulty, NewQuestion, Question, QuestionFormData, QuestionId};
pub use list::{QuestionsResponse, get_category_questions_endpoint, get_questions_endpoint};
pub use search::search_questions_endpoint;
