//! The endpoint that creates questions, or searches them when given a search term.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    Error,
    app_state::QuestionState,
    extract::Json,
    pagination::{PageQuery, paginate},
    question::{QuestionFormData, QuestionId, QuestionsResponse},
    stores::QuestionStore,
};

#[derive(Debug, Serialize)]
struct CreatedResponse {
    success: bool,
    created: QuestionId,
    total_questions: u64,
}

/// Create a question from the JSON body, or search questions if the body has
/// a non-empty `searchTerm`.
///
/// A search responds with page `?page=N` of the matches and 404 if nothing
/// matches. A new question must have all of `question`, `answer`, `category`
/// and `difficulty`, otherwise the endpoint responds with 422.
pub async fn create_question_endpoint<Q>(
    State(state): State<QuestionState<Q>>,
    Query(query): Query<PageQuery>,
    Json(form): Json<QuestionFormData>,
) -> Result<Response, Error>
where
    Q: QuestionStore + Send + Sync,
{
    if let Some(search_term) = form.search_term() {
        let matches = state.question_store.search(search_term)?;

        if matches.is_empty() {
            tracing::debug!("no questions match {search_term:?}");
            return Err(Error::NotFound);
        }

        let total_questions = matches.len() as u64;
        let page = query.page_number(&state.pagination_config);
        let questions = paginate(matches, page, state.pagination_config.page_size);

        return Ok(axum::Json(QuestionsResponse::new(questions, total_questions)).into_response());
    }

    let new_question = form.into_new_question()?;
    let question = state.question_store.create(new_question)?;
    tracing::info!("created question {}", question.id);

    let total_questions = state.question_store.count()?;

    Ok(axum::Json(CreatedResponse {
        success: true,
        created: question.id,
        total_questions,
    })
    .into_response())
}
