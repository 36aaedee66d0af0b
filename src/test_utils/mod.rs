#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod store;

pub(crate) use http::{assert_error_envelope, get_test_server};
pub(crate) use store::{create_test_category, create_test_question, get_test_app_state};
