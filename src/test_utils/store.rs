use rusqlite::Connection;

use crate::{
    category::{Category, CategoryName},
    pagination::PaginationConfig,
    question::{NewQuestion, Question},
    stores::{
        CategoryStore, QuestionStore,
        sqlite::{SQLAppState, create_app_state},
    },
};

pub(crate) fn get_test_app_state() -> SQLAppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    create_app_state(connection, PaginationConfig::default()).expect("Could not create app state")
}

#[track_caller]
pub(crate) fn create_test_category(state: &SQLAppState, name: &str) -> Category {
    state
        .category_store
        .create(CategoryName::new_unchecked(name))
        .expect("Could not create test category")
}

#[track_caller]
pub(crate) fn create_test_question(state: &SQLAppState, text: &str, category: &Category) -> Question {
    let new_question = NewQuestion::new(Some(text), Some("An answer"), Some(category.id), Some(1))
        .expect("Invalid test question");

    state
        .question_store
        .create(new_question)
        .expect("Could not create test question")
}
