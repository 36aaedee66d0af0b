//! Category listing endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    Error,
    app_state::CategoryState,
    category::CategoryMap,
    stores::CategoryStore,
};

/// The body of a successful response from [get_categories_endpoint].
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
    total_categories: usize,
}

/// Get every category as a map from ID to name.
///
/// Responds with 404 if there are no categories.
pub async fn get_categories_endpoint<C>(
    State(state): State<CategoryState<C>>,
) -> Result<Json<CategoriesResponse>, Error>
where
    C: CategoryStore + Send + Sync,
{
    let categories = CategoryMap(state.category_store.get_all()?);

    if categories.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}
