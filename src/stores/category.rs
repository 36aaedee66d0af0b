//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
};

/// Creates and retrieves question categories.
pub trait CategoryStore {
    /// Create a new category and add it the store.
    fn create(&self, name: CategoryName) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get all categories ordered by name.
    fn get_all(&self) -> Result<Vec<Category>, Error>;
}
