//! Application router configuration.

use axum::{
    Router,
    http::{
        Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::Response,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    category::get_categories_endpoint,
    endpoints, error_response,
    question::{
        create_question_endpoint, delete_question_endpoint, get_category_questions_endpoint,
        get_questions_endpoint, search_questions_endpoint,
    },
    quiz::next_quiz_question_endpoint,
    stores::{CategoryStore, QuestionStore},
};

/// Return a router with all the app's routes.
///
/// Every route allows cross-origin requests from any origin.
pub fn build_router<C, Q>(state: AppState<C, Q>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    Q: QuestionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint::<C>))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions_endpoint::<C, Q>),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions_endpoint::<C, Q>).post(create_question_endpoint::<Q>),
        )
        .route(
            endpoints::SEARCH_QUESTIONS,
            post(search_questions_endpoint::<Q>),
        )
        .route(endpoints::QUESTION, delete(delete_question_endpoint::<Q>))
        .route(endpoints::QUIZZES, post(next_quiz_question_endpoint::<C, Q>))
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn get_404_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND)
}

async fn get_405_method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED)
}
