use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};

use crate::{build_router, stores::sqlite::SQLAppState};

pub(crate) fn get_test_server(state: SQLAppState) -> TestServer {
    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

#[track_caller]
pub(crate) fn assert_error_envelope(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], status.as_u16());
    assert_eq!(body["message"], message);
}
