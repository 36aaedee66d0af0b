//! Question deletion endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{
    Error,
    app_state::QuestionState,
    question::QuestionId,
    stores::QuestionStore,
};

/// The body of a successful response from [delete_question_endpoint].
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    success: bool,
    deleted: QuestionId,
}

/// Delete the question `question_id`.
///
/// Responds with 404 if there is no such question and 422 if the question
/// could not be deleted.
pub async fn delete_question_endpoint<Q>(
    State(state): State<QuestionState<Q>>,
    Path(question_id): Path<String>,
) -> Result<Json<DeletedResponse>, Error>
where
    Q: QuestionStore + Send + Sync,
{
    let question_id: QuestionId = question_id.parse().map_err(|_| Error::NotFound)?;

    match state.question_store.delete(question_id) {
        Ok(()) => {
            tracing::info!("deleted question {question_id}");
            Ok(Json(DeletedResponse {
                success: true,
                deleted: question_id,
            }))
        }
        Err(Error::DeleteMissingQuestion) => Err(Error::DeleteMissingQuestion),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting question {question_id}: {error}"
            );
            Err(Error::DeleteFailed(question_id, error.to_string()))
        }
    }
}

#[cfg(test)]
mod delete_question_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::{Value, json};

    use crate::{
        Error,
        app_state::QuestionState,
        endpoints::{self, format_endpoint},
        question::delete_question_endpoint,
        stores::QuestionStore,
        test_utils::{
            assert_error_envelope, create_test_category, create_test_question,
            get_test_app_state, get_test_server,
        },
    };

    #[tokio::test]
    async fn deletes_question() {
        let state = get_test_app_state();
        let science = create_test_category(&state, "Science");
        let question = create_test_question(&state, "What is H2O?", &science);
        let remaining = create_test_question(&state, "What is NaCl?", &science);
        let server = get_test_server(state.clone());

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, question.id))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"success": true, "deleted": question.id})
        );
        assert_eq!(state.question_store.get(question.id), Err(Error::NotFound));

        let listing = server.get(endpoints::QUESTIONS).await.json::<Value>();
        let listed_ids: Vec<i64> = listing["questions"]
            .as_array()
            .expect("questions is not an array")
            .iter()
            .filter_map(|question| question["id"].as_i64())
            .collect();
        assert_eq!(listed_ids, vec![remaining.id]);
        assert_eq!(listing["total_questions"], 1);
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let server = get_test_server(get_test_app_state());

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, 1000))
            .await;

        assert_error_envelope(&response, StatusCode::NOT_FOUND, "resource not found");
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let state = get_test_app_state();
        let science = create_test_category(&state, "Science");
        let question = create_test_question(&state, "What is H2O?", &science);
        let question_state = QuestionState {
            question_store: state.question_store.clone(),
            pagination_config: state.pagination_config.clone(),
        };

        let first = delete_question_endpoint(
            State(question_state.clone()),
            Path(question.id.to_string()),
        )
        .await
        .into_response();
        let second = delete_question_endpoint(State(question_state), Path(question.id.to_string()))
            .await
            .into_response();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}
