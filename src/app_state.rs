//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{
    pagination::PaginationConfig,
    stores::{CategoryStore, QuestionStore},
};

/// The state of the REST server.
///
/// The stores are generic so that handlers work with any persistence backend,
/// see [crate::stores::sqlite::create_app_state] for the SQLite one.
#[derive(Debug, Clone)]
pub struct AppState<C, Q>
where
    C: CategoryStore + Send + Sync,
    Q: QuestionStore + Send + Sync,
{
    /// The store for managing [categories](crate::category::Category).
    pub category_store: C,
    /// The store for managing [questions](crate::question::Question).
    pub question_store: Q,
    /// The config that controls how questions are split into pages.
    pub pagination_config: PaginationConfig,
}

impl<C, Q> AppState<C, Q>
where
    C: CategoryStore + Send + Sync,
    Q: QuestionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(category_store: C, question_store: Q, pagination_config: PaginationConfig) -> Self {
        Self {
            category_store,
            question_store,
            pagination_config,
        }
    }
}

/// The state needed by endpoints that only use categories.
#[derive(Debug, Clone)]
pub struct CategoryState<C>
where
    C: CategoryStore + Send + Sync,
{
    /// The store for managing [categories](crate::category::Category).
    pub category_store: C,
}

impl<C, Q> FromRef<AppState<C, Q>> for CategoryState<C>
where
    C: CategoryStore + Clone + Send + Sync,
    Q: QuestionStore + Send + Sync,
{
    fn from_ref(state: &AppState<C, Q>) -> Self {
        Self {
            category_store: state.category_store.clone(),
        }
    }
}

/// The state needed by endpoints that only use questions.
#[derive(Debug, Clone)]
pub struct QuestionState<Q>
where
    Q: QuestionStore + Send + Sync,
{
    /// The store for managing [questions](crate::question::Question).
    pub question_store: Q,
    /// The config that controls how questions are split into pages.
    pub pagination_config: PaginationConfig,
}

impl<C, Q> FromRef<AppState<C, Q>> for QuestionState<Q>
where
    C: CategoryStore + Send + Sync,
    Q: QuestionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C, Q>) -> Self {
        Self {
            question_store: state.question_store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}
