//! Categories that group trivia questions.

mod domain;
mod list;

pub use domain::{Category, CategoryId, CategoryMap, CategoryName};
pub use list::get_categories_endpoint;
