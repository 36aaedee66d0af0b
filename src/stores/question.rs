//! Defines the question store trait.

use crate::{
    Error,
    category::CategoryId,
    question::{NewQuestion, Question, QuestionId},
};

/// Handles the creation, retrieval and deletion of trivia questions.
///
/// Methods returning many questions return them ordered by ID.
pub trait QuestionStore {
    /// Create a new question in the store.
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error>;

    /// Retrieve a question from the store.
    ///
    /// Returns [Error::NotFound] if there is no question with `question_id`.
    fn get(&self, question_id: QuestionId) -> Result<Question, Error>;

    /// Retrieve every question in the store.
    fn get_all(&self) -> Result<Vec<Question>, Error>;

    /// Retrieve the questions in the category `category_id`.
    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, Error>;

    /// Retrieve the questions whose text contains `search_term`, ignoring case.
    fn search(&self, search_term: &str) -> Result<Vec<Question>, Error>;

    /// Delete a question from the store.
    ///
    /// Returns [Error::DeleteMissingQuestion] if there is no question with `question_id`.
    fn delete(&self, question_id: QuestionId) -> Result<(), Error>;

    /// The number of questions in the store.
    fn count(&self) -> Result<u64, Error>;
}
