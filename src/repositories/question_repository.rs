use async_trait::async_trait;
use rusqlite::params;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::question::{decode_options, encode_options, Question},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(
        &self,
        quiz_id: i64,
        text: &str,
        options: &[String],
        correct_option: i64,
    ) -> AppResult<Question>;
    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>>;
    /// Returns the number of rows affected; zero means the id does not exist.
    async fn update(
        &self,
        id: i64,
        text: &str,
        options: &[String],
        correct_option: i64,
    ) -> AppResult<usize>;
    async fn delete(&self, id: i64) -> AppResult<usize>;
}

pub struct SqliteQuestionRepository {
    db: Database,
}

impl SqliteQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

// The options column is read as raw TEXT here and decoded afterwards, so a
// corrupt row surfaces as an AppError rather than a rusqlite conversion error.
fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, i64, String, String, i64)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn question_from_raw(raw: (i64, i64, String, String, i64)) -> AppResult<Question> {
    let (id, quiz_id, text, encoded_options, correct_option) = raw;
    Ok(Question {
        id,
        quiz_id,
        text,
        options: decode_options(&encoded_options)?,
        correct_option,
    })
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn create(
        &self,
        quiz_id: i64,
        text: &str,
        options: &[String],
        correct_option: i64,
    ) -> AppResult<Question> {
        let text = text.to_string();
        let encoded = encode_options(options)?;
        self.db
            .run(move |conn| {
                let raw = conn.query_row(
                    "INSERT INTO questions (quiz_id, text, options, correct_option)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING id, quiz_id, text, options, correct_option",
                    params![quiz_id, text, encoded, correct_option],
                    raw_from_row,
                )?;
                question_from_raw(raw)
            })
            .await
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        self.db
            .run(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, quiz_id, text, options, correct_option
                     FROM questions WHERE quiz_id = ?1 ORDER BY id",
                )?;
                let raw_rows = stmt
                    .query_map(params![quiz_id], raw_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                raw_rows.into_iter().map(question_from_raw).collect()
            })
            .await
    }

    async fn update(
        &self,
        id: i64,
        text: &str,
        options: &[String],
        correct_option: i64,
    ) -> AppResult<usize> {
        let text = text.to_string();
        let encoded = encode_options(options)?;
        self.db
            .run(move |conn| {
                let affected = conn.execute(
                    "UPDATE questions SET text = ?1, options = ?2, correct_option = ?3
                     WHERE id = ?4",
                    params![text, encoded, correct_option, id],
                )?;
                Ok(affected)
            })
            .await
    }

    async fn delete(&self, id: i64) -> AppResult<usize> {
        self.db
            .run(move |conn| {
                let affected = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
                Ok(affected)
            })
            .await
    }
}
