//! Core question domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryId, deserializers::deserialize_optional_id};

/// Database identifier for a question.
pub type QuestionId = i64;

/// How hard a question is, a small positive integer where 1 is the easiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct Difficulty(i64);

impl Difficulty {
    /// Create a difficulty rating.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidDifficulty] if `value` is less than one.
    pub fn new(value: i64) -> Result<Self, Error> {
        if value < 1 {
            Err(Error::InvalidDifficulty(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a difficulty rating without validation.
    ///
    /// The caller should ensure that `value` is positive.
    pub fn new_unchecked(value: i64) -> Self {
        Self(value)
    }

    /// The difficulty as an integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// A trivia question and its answer.
///
/// This is also the record format returned by the API, i.e. a question
/// serializes to `{"id", "question", "answer", "category", "difficulty"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Question {
    /// The ID of the question.
    pub id: QuestionId,
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// The ID of the category the question belongs to.
    pub category: CategoryId,
    /// How hard the question is.
    pub difficulty: Difficulty,
}

/// A question that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Validate the fields for a new question.
    ///
    /// The question and answer text are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyField] naming the first field that is missing or
    /// empty, or [Error::InvalidDifficulty] if `difficulty` is not positive.
    pub fn new(
        question: Option<&str>,
        answer: Option<&str>,
        category: Option<CategoryId>,
        difficulty: Option<i64>,
    ) -> Result<Self, Error> {
        let question = non_empty(question, "question")?;
        let answer = non_empty(answer, "answer")?;
        let category = category.ok_or(Error::EmptyField("category"))?;
        let difficulty = difficulty.ok_or(Error::EmptyField("difficulty"))?;
        let difficulty = Difficulty::new(difficulty)?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The ID of the category the question belongs to.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// How hard the question is.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

fn non_empty(text: Option<&str>, field: &'static str) -> Result<String, Error> {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(Error::EmptyField(field)),
    }
}

/// The JSON body for `POST /questions`.
///
/// The same endpoint both creates questions and searches them: when
/// `searchTerm` is a non-empty string the request is a search and the other
/// fields are ignored. The term is used as is, whitespace included.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionFormData {
    /// The question text.
    #[serde(default)]
    pub question: Option<String>,
    /// The answer text.
    #[serde(default)]
    pub answer: Option<String>,
    /// The category ID, as a number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category: Option<CategoryId>,
    /// The difficulty, as a number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub difficulty: Option<i64>,
    /// Text to search question text for.
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl QuestionFormData {
    /// The search term if this request is a search, otherwise `None`.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    /// Validate the form as a new question.
    ///
    /// # Errors
    ///
    /// See [NewQuestion::new].
    pub fn into_new_question(self) -> Result<NewQuestion, Error> {
        NewQuestion::new(
            self.question.as_deref(),
            self.answer.as_deref(),
            self.category,
            self.difficulty,
        )
    }
}
