//! The endpoint that serves the next question of a quiz round.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::CategoryId,
    deserializers::deserialize_optional_id,
    extract::Json,
    question::{Question, QuestionId},
    quiz::{QuizCategory, next_quiz_question},
    stores::{CategoryStore, QuestionStore},
};

/// The category part of a quiz request, e.g. `{"id": 5, "type": "Entertainment"}`.
///
/// Only the ID is read, other fields are ignored. An ID of `0` means every category.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategoryPayload {
    /// The category ID, as a number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<CategoryId>,
}

/// The JSON body of a quiz request.
///
/// The client keeps track of the round and sends the IDs of every question it
/// has been served so far.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    /// The questions already served this round.
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
    /// The category to draw questions from.
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryPayload>,
}

/// The body of a successful quiz response.
///
/// `question` is absent when the round is complete.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

/// Get a random question from the requested category that is not in
/// `previous_questions`.
///
/// Responds with 400 if either field is missing and 404 if the category does
/// not exist.
pub async fn next_quiz_question_endpoint<C, Q>(
    State(state): State<AppState<C, Q>>,
    Json(request): Json<QuizRequest>,
) -> Result<axum::Json<QuizResponse>, Error>
where
    C: CategoryStore + Send + Sync,
    Q: QuestionStore + Send + Sync,
{
    let previous_questions = request
        .previous_questions
        .ok_or(Error::MissingField("previous_questions"))?;
    let category_id = request
        .quiz_category
        .and_then(|category| category.id)
        .ok_or(Error::MissingField("quiz_category"))?;

    let question = next_quiz_question(
        QuizCategory::from(category_id),
        &previous_questions,
        &state.category_store,
        &state.question_store,
        &mut rand::thread_rng(),
    )?;

    Ok(axum::Json(QuizResponse {
        success: true,
        question,
    }))
}

#[cfg(test)]
mod next_quiz_question_endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        test_utils::{
            assert_error_envelope, create_test_category, create_test_question,
            get_test_app_state, get_test_server,
        },
    };

    #[tokio::test]
    async fn serves_the_only_unseen_question() {
        let state = get_test_app_state();
        let entertainment = create_test_category(&state, "Entertainment");
        let first = create_test_question(&state, "Who directed Jaws?", &entertainment);
        let second = create_test_question(&state, "Who played Neo?", &entertainment);
        let third = create_test_question(&state, "Who sang Thriller?", &entertainment);
        let server = get_test_server(state);

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [first.id, second.id],
                "quiz_category": {"id": entertainment.id, "type": "Entertainment"},
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["id"], third.id);
        assert_eq!(body["question"]["category"], entertainment.id);
    }

    #[tokio::test]
    async fn accepts_category_id_as_string() {
        let state = get_test_app_state();
        let sports = create_test_category(&state, "Sports");
        let question = create_test_question(&state, "How long is a marathon?", &sports);
        let server = get_test_server(state);

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [],
                "quiz_category": {"id": sports.id.to_string(), "type": "Sports"},
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["question"]["id"], question.id);
    }

    #[tokio::test]
    async fn all_categories_draws_from_any_category() {
        let state = get_test_app_state();
        let art = create_test_category(&state, "Art");
        let sports = create_test_category(&state, "Sports");
        let art_question = create_test_question(&state, "Who painted Guernica?", &art);
        let sports_question = create_test_question(&state, "How long is a marathon?", &sports);
        let server = get_test_server(state);

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [art_question.id],
                "quiz_category": {"id": 0, "type": "click"},
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["question"]["id"],
            sports_question.id
        );
    }

    #[tokio::test]
    async fn exhausted_round_has_no_question() {
        let state = get_test_app_state();
        let art = create_test_category(&state, "Art");
        let question = create_test_question(&state, "Who painted Guernica?", &art);
        let server = get_test_server(state);

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [question.id],
                "quiz_category": {"id": art.id, "type": "Art"},
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({"success": true}));
    }

    #[tokio::test]
    async fn missing_previous_questions_is_bad_request() {
        let server = get_test_server(get_test_app_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({"quiz_category": {"id": 0, "type": "click"}}))
            .await;

        assert_error_envelope(&response, StatusCode::BAD_REQUEST, "bad request");
    }

    #[tokio::test]
    async fn missing_quiz_category_is_bad_request() {
        let server = get_test_server(get_test_app_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({"previous_questions": []}))
            .await;

        assert_error_envelope(&response, StatusCode::BAD_REQUEST, "bad request");
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let server = get_test_server(get_test_app_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [],
                "quiz_category": {"id": 1000, "type": "Nope"},
            }))
            .await;

        assert_error_envelope(&response, StatusCode::NOT_FOUND, "resource not found");
    }
}
