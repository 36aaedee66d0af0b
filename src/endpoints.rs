//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/questions/{question_id}', use [format_endpoint].

/// The route for listing all categories.
pub const CATEGORIES: &str = "/categories";
/// The route for listing the questions in a category.
pub const CATEGORY_QUESTIONS: &str = "/categories/{category_id}/questions";
/// The route for listing, creating and searching questions.
pub const QUESTIONS: &str = "/questions";
/// The route for deleting a single question.
pub const QUESTION: &str = "/questions/{question_id}";
/// The route for searching questions.
pub const SEARCH_QUESTIONS: &str = "/questions/search";
/// The route for getting the next question in a quiz round.
pub const QUIZZES: &str = "/quizzes";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with a right brace, e.g.
/// '{question_id}' in '/questions/{question_id}'. Only the first parameter
/// is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
