//! Endpoints for listing questions a page at a time.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{CategoryId, CategoryMap},
    pagination::{PageQuery, paginate},
    question::Question,
    stores::{CategoryStore, QuestionStore},
};

/// The body of a successful response that lists questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub(crate) success: bool,
    pub(crate) questions: Vec<Question>,
    pub(crate) total_questions: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) categories: Option<CategoryMap>,
    pub(crate) current_category: Option<String>,
}

impl QuestionsResponse {
    pub(crate) fn new(questions: Vec<Question>, total_questions: u64) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            categories: None,
            current_category: None,
        }
    }
}

/// Get a page of questions along with every category.
///
/// Responds with 404 if the requested page has no questions.
pub async fn get_questions_endpoint<C, Q>(
    State(state): State<AppState<C, Q>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, Error>
where
    C: CategoryStore + Send + Sync,
    Q: QuestionStore + Send + Sync,
{
    let page = query.page_number(&state.pagination_config);
    let questions = state.question_store.get_all()?;
    let total_questions = questions.len() as u64;
    let questions = paginate(questions, page, state.pagination_config.page_size);

    if questions.is_empty() {
        tracing::debug!("page {page} of {total_questions} questions is empty");
        return Err(Error::NotFound);
    }

    let categories = CategoryMap(state.category_store.get_all()?);

    Ok(Json(QuestionsResponse {
        categories: Some(categories),
        ..QuestionsResponse::new(questions, total_questions)
    }))
}

/// Get a page of the questions in one category.
///
/// `total_questions` counts every question in the store, not just the ones in
/// the category. Responds with 404 if the category does not exist.
pub async fn get_category_questions_endpoint<C, Q>(
    State(state): State<AppState<C, Q>>,
    Path(category_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, Error>
where
    C: CategoryStore + Send + Sync,
    Q: QuestionStore + Send + Sync,
{
    let category_id: CategoryId = category_id.parse().map_err(|_| Error::NotFound)?;
    let category = state.category_store.get(category_id)?;

    let page = query.page_number(&state.pagination_config);
    let questions = state.question_store.get_by_category(category.id)?;
    let questions = paginate(questions, page, state.pagination_config.page_size);
    let total_questions = state.question_store.count()?;

    Ok(Json(QuestionsResponse {
        current_category: Some(category.name.to_string()),
        ..QuestionsResponse::new(questions, total_questions)
    }))
}
