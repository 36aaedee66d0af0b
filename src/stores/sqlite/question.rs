//! Implements a SQLite backed question store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::CategoryId,
    db::{CreateTable, MapRow},
    question::{Difficulty, NewQuestion, Question, QuestionId},
    stores::QuestionStore,
};

use super::lock;

/// Creates, retrieves and deletes trivia questions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteQuestionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteQuestionStore {
    /// Create a new question store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Question>, Error> {
        lock(&self.connection)?
            .prepare(sql)?
            .query_map(params, SQLiteQuestionStore::map_row)?
            .map(|maybe_question| maybe_question.map_err(|error| error.into()))
            .collect()
    }
}

impl QuestionStore for SQLiteQuestionStore {
    /// Create a question in the database.
    ///
    /// # Errors
    /// This function will return an [Error::InvalidCategory] if the question's
    /// category does not exist, or an error if there is some other SQL error.
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let connection = lock(&self.connection)?;

        connection
            .execute(
                "INSERT INTO question (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4);",
                (
                    new_question.question(),
                    new_question.answer(),
                    new_question.category(),
                    new_question.difficulty().as_i64(),
                ),
            )
            .map_err(|error| match Error::from(error) {
                Error::InvalidCategory(None) => {
                    Error::InvalidCategory(Some(new_question.category()))
                }
                error => error,
            })?;

        let id = connection.last_insert_rowid();

        Ok(Question {
            id,
            question: new_question.question().to_owned(),
            answer: new_question.answer().to_owned(),
            category: new_question.category(),
            difficulty: new_question.difficulty(),
        })
    }

    fn get(&self, question_id: QuestionId) -> Result<Question, Error> {
        lock(&self.connection)?
            .prepare(
                "SELECT id, question, answer, category, difficulty FROM question WHERE id = :id;",
            )?
            .query_row(&[(":id", &question_id)], SQLiteQuestionStore::map_row)
            .map_err(|error| error.into())
    }

    fn get_all(&self) -> Result<Vec<Question>, Error> {
        self.query(
            "SELECT id, question, answer, category, difficulty FROM question ORDER BY id ASC;",
            [],
        )
    }

    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, Error> {
        self.query(
            "SELECT id, question, answer, category, difficulty FROM question
            WHERE category = ?1
            ORDER BY id ASC;",
            [category_id],
        )
    }

    /// Find questions containing `search_term`.
    ///
    /// Case is folded with Unicode rules, e.g. "école" matches "École".
    fn search(&self, search_term: &str) -> Result<Vec<Question>, Error> {
        let search_term = search_term.to_lowercase();

        Ok(self
            .get_all()?
            .into_iter()
            .filter(|question| question.question.to_lowercase().contains(&search_term))
            .collect())
    }

    fn delete(&self, question_id: QuestionId) -> Result<(), Error> {
        let rows_affected =
            lock(&self.connection)?.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingQuestion);
        }

        Ok(())
    }

    fn count(&self) -> Result<u64, Error> {
        let count: i64 =
            lock(&self.connection)?.query_row("SELECT COUNT(*) FROM question;", [], |row| {
                row.get(0)
            })?;

        u64::try_from(count)
            .map_err(|_| Error::SqlError(rusqlite::Error::IntegralValueOutOfRange(0, count)))
    }
}

impl CreateTable for SQLiteQuestionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS question (
                id INTEGER PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL,
                difficulty INTEGER NOT NULL,
                FOREIGN KEY(category) REFERENCES category(id) ON UPDATE CASCADE ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteQuestionStore {
    type ReturnType = Question;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_difficulty: i64 = row.get(offset + 4)?;

        Ok(Self::ReturnType {
            id: row.get(offset)?,
            question: row.get(offset + 1)?,
            answer: row.get(offset + 2)?,
            category: row.get(offset + 3)?,
            difficulty: Difficulty::new_unchecked(raw_difficulty),
        })
    }
}

#[cfg(test)]
mod question_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error,
        category::{CategoryId, CategoryName},
        db::initialize,
        question::{NewQuestion, Question},
        stores::{CategoryStore, sqlite::SQLiteCategoryStore},
    };

    use super::{QuestionStore, SQLiteQuestionStore};

    fn get_test_stores() -> (SQLiteQuestionStore, CategoryId, CategoryId) {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        let category_store = SQLiteCategoryStore::new(connection.clone());
        let science = category_store
            .create(CategoryName::new_unchecked("Science"))
            .unwrap();
        let history = category_store
            .create(CategoryName::new_unchecked("History"))
            .unwrap();

        (SQLiteQuestionStore::new(connection), science.id, history.id)
    }

    fn new_question(text: &str, category: CategoryId) -> NewQuestion {
        NewQuestion::new(Some(text), Some("An answer"), Some(category), Some(2)).unwrap()
    }

    #[test]
    fn create_question_succeeds() {
        let (store, science, _) = get_test_stores();

        let question = store
            .create(new_question("What is the boiling point of water?", science))
            .expect("Could not create question");

        assert!(question.id > 0);
        assert_eq!(question.question, "What is the boiling point of water?");
        assert_eq!(question.answer, "An answer");
        assert_eq!(question.category, science);
        assert_eq!(question.difficulty.as_i64(), 2);
    }

    #[test]
    fn create_question_with_unknown_category_fails() {
        let (store, _, _) = get_test_stores();

        let result = store.create(new_question("Orphan?", 999));

        assert_eq!(result, Err(Error::InvalidCategory(Some(999))));
    }

    #[test]
    fn get_question_succeeds() {
        let (store, science, _) = get_test_stores();
        let inserted = store.create(new_question("Q1", science)).unwrap();

        let selected = store.get(inserted.id);

        assert_eq!(selected, Ok(inserted));
    }

    #[test]
    fn get_question_with_invalid_id_returns_not_found() {
        let (store, _, _) = get_test_stores();

        assert_eq!(store.get(42), Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_questions_in_id_order() {
        let (store, science, history) = get_test_stores();
        let want: Vec<Question> = vec![
            store.create(new_question("Q1", science)).unwrap(),
            store.create(new_question("Q2", history)).unwrap(),
            store.create(new_question("Q3", science)).unwrap(),
        ];

        let got = store.get_all().unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn get_by_category_filters_questions() {
        let (store, science, history) = get_test_stores();
        let first = store.create(new_question("Q1", science)).unwrap();
        store.create(new_question("Q2", history)).unwrap();
        let third = store.create(new_question("Q3", science)).unwrap();

        let got = store.get_by_category(science).unwrap();

        assert_eq!(got, vec![first, third]);
    }

    #[test]
    fn search_ignores_case() {
        let (store, science, _) = get_test_stores();
        let want = store
            .create(new_question("What is the Title of the book?", science))
            .unwrap();
        store.create(new_question("Who wrote it?", science)).unwrap();

        let got = store.search("tItLe").unwrap();

        assert_eq!(got, vec![want]);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let (store, science, _) = get_test_stores();
        let want = store
            .create(new_question("Which city hosts the École Polytechnique?", science))
            .unwrap();
        store.create(new_question("Who wrote it?", science)).unwrap();

        let got = store.search("ÉCOLE").unwrap();

        assert_eq!(got, vec![want]);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let (store, science, _) = get_test_stores();
        store.create(new_question("Profit?", science)).unwrap();

        assert_eq!(store.search("of "), Ok(vec![]));
    }

    #[test]
    fn search_without_match_is_empty() {
        let (store, science, _) = get_test_stores();
        store.create(new_question("Who wrote it?", science)).unwrap();

        assert_eq!(store.search("ball"), Ok(vec![]));
    }

    #[test]
    fn search_treats_wildcards_literally() {
        let (store, science, _) = get_test_stores();
        let want = store.create(new_question("Is 100% a lot?", science)).unwrap();
        store.create(new_question("Is 100 a lot?", science)).unwrap();

        let got = store.search("100%").unwrap();

        assert_eq!(got, vec![want]);
    }

    #[test]
    fn delete_question_succeeds() {
        let (store, science, _) = get_test_stores();
        let question = store.create(new_question("ToDelete", science)).unwrap();

        let result = store.delete(question.id);

        assert_eq!(result, Ok(()));
        assert_eq!(store.get(question.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_question_with_invalid_id_returns_error() {
        let (store, _, _) = get_test_stores();

        assert_eq!(store.delete(999999), Err(Error::DeleteMissingQuestion));
    }

    #[test]
    fn count_questions() {
        let (store, science, history) = get_test_stores();
        store.create(new_question("Q1", science)).unwrap();
        store.create(new_question("Q2", history)).unwrap();

        assert_eq!(store.count(), Ok(2));
    }

    #[test]
    fn count_empty_store_is_zero() {
        let (store, _, _) = get_test_stores();

        assert_eq!(store.count(), Ok(0));
    }
}
