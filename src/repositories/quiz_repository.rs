use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, title: &str, description: &str) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    async fn list(&self) -> AppResult<Vec<Quiz>>;
    /// Returns the number of rows affected; zero means the id does not exist.
    async fn update(&self, id: i64, title: &str, description: &str) -> AppResult<usize>;
    /// Returns the number of rows affected. Associated questions are removed
    /// by the store's cascade rule.
    async fn delete(&self, id: i64) -> AppResult<usize>;
}

pub struct SqliteQuizRepository {
    db: Database,
}

impl SqliteQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

fn quiz_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quiz> {
    Ok(Quiz {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
    })
}

#[async_trait]
impl QuizRepository for SqliteQuizRepository {
    async fn create(&self, title: &str, description: &str) -> AppResult<Quiz> {
        let title = title.to_string();
        let description = description.to_string();
        self.db
            .run(move |conn| {
                let quiz = conn.query_row(
                    "INSERT INTO quizzes (title, description) VALUES (?1, ?2)
                     RETURNING id, title, description",
                    params![title, description],
                    quiz_from_row,
                )?;
                Ok(quiz)
            })
            .await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        self.db
            .run(move |conn| {
                let quiz = conn
                    .query_row(
                        "SELECT id, title, description FROM quizzes WHERE id = ?1",
                        params![id],
                        quiz_from_row,
                    )
                    .optional()?;
                Ok(quiz)
            })
            .await
    }

    async fn list(&self) -> AppResult<Vec<Quiz>> {
        self.db
            .run(|conn| {
                let mut stmt =
                    conn.prepare("SELECT id, title, description FROM quizzes ORDER BY id")?;
                let quizzes = stmt
                    .query_map([], quiz_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(quizzes)
            })
            .await
    }

    async fn update(&self, id: i64, title: &str, description: &str) -> AppResult<usize> {
        let title = title.to_string();
        let description = description.to_string();
        self.db
            .run(move |conn| {
                let affected = conn.execute(
                    "UPDATE quizzes SET title = ?1, description = ?2 WHERE id = ?3",
                    params![title, description, id],
                )?;
                Ok(affected)
            })
            .await
    }

    async fn delete(&self, id: i64) -> AppResult<usize> {
        self.db
            .run(move |conn| {
                let affected = conn.execute("DELETE FROM quizzes WHERE id = ?1", params![id])?;
                Ok(affected)
            })
            .await
    }
}
