//! Question search endpoint.

use axum::extract::State;
use serde::Deserialize;

use crate::{
    Error,
    app_state::QuestionState,
    extract::Json,
    question::QuestionsResponse,
    stores::QuestionStore,
};

/// The JSON body for a question search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Text to look for in the question text, ignoring case.
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Get every question whose text contains `searchTerm`, ignoring case.
///
/// Responds with 404 if the search term is missing or empty, or if nothing matches.
pub async fn search_questions_endpoint<Q>(
    State(state): State<QuestionState<Q>>,
    Json(request): Json<SearchRequest>,
) -> Result<axum::Json<QuestionsResponse>, Error>
where
    Q: QuestionStore + Send + Sync,
{
    let search_term = request
        .search_term
        .as_deref()
        .filter(|term| !term.is_empty())
        .ok_or(Error::NotFound)?;

    let questions = state.question_store.search(search_term)?;

    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    let total_questions = questions.len() as u64;

    Ok(axum::Json(QuestionsResponse::new(questions, total_questions)))
}
