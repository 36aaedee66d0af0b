//! Contains traits and implementations for objects that store the trivia
//! [questions](crate::question::Question) and [categories](crate::category::Category).

mod category;
mod question;

pub mod sqlite;

pub use category::CategoryStore;
pub use question::QuestionStore;
