//! A small REST API for trivia questions.
//!
//! The API stores questions and the categories they belong to, lists them
//! page by page, searches question text, and serves quiz rounds of random
//! questions that the player has not seen yet.
//!
//! Every response is a JSON object with a `success` field. Error responses
//! also carry the numeric status code in `error` and a short `message`.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod db;
mod deserializers;
mod endpoints;
mod extract;
mod logging;
mod pagination;
mod question;
mod quiz;
mod routing;
pub mod stores;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryId, CategoryName};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use question::{Difficulty, NewQuestion, Question, QuestionId};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A field the endpoint needs was not in the request body.
    #[error("the request is missing the field \"{0}\"")]
    MissingField(&'static str),

    /// The request body could not be parsed as the expected JSON.
    #[error("could not parse the request body: {0}")]
    InvalidRequestBody(String),

    /// A required field of a new question or category was missing or empty.
    #[error("the field \"{0}\" cannot be empty")]
    EmptyField(&'static str),

    /// A question difficulty that is not a positive integer.
    #[error("{0} is not a valid difficulty, difficulty must be a positive integer")]
    InvalidDifficulty(i64),

    /// The category ID used to create a question did not match a valid category.
    #[error("the category ID does not refer to a valid category")]
    InvalidCategory(Option<CategoryId>),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a question that does not exist
    #[error("tried to delete a question that is not in the database")]
    DeleteMissingQuestion,

    /// Deleting a question that exists failed.
    #[error("could not delete question {0}: {1}")]
    DeleteFailed(QuestionId, String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 787 => {
                Error::InvalidCategory(None)
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text())
    }
}

impl Error {
    /// The HTTP status code that the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField(_) | Error::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::DeleteMissingQuestion => StatusCode::NOT_FOUND,
            Error::EmptyField(_)
            | Error::InvalidDifficulty(_)
            | Error::InvalidCategory(_)
            | Error::DeleteFailed(_, _) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("An unexpected error occurred: {}", self)
            }
            _ => tracing::debug!("Responding with {status}: {self}"),
        }

        error_response(status)
    }
}

/// The JSON error envelope for `status`, e.g.
/// `{"success": false, "error": 404, "message": "resource not found"}`.
pub(crate) fn error_response(status: StatusCode) -> Response {
    let message = match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    };

    let body = Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
    }));

    (status, body).into_response()
}
