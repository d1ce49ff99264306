use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::{config::Config, errors::AppResult};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS admins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        identifier TEXT NOT NULL UNIQUE,
        secret_hash TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS quizzes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        quiz_id INTEGER NOT NULL REFERENCES quizzes(id) ON DELETE CASCADE,
        text TEXT NOT NULL,
        options TEXT NOT NULL,
        correct_option INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_questions_quiz_id ON questions(quiz_id);
"#;

#[derive(Clone)]
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    pub fn connect(config: &Config) -> AppResult<Self> {
        // Foreign keys are off by default in SQLite and the setting is
        // per-connection, so it has to go in the pool initializer.
        let init = |conn: &mut Connection| conn.execute_batch("PRAGMA foreign_keys = ON;");

        let (manager, max_size) = if config.database_path == ":memory:" {
            // Each :memory: connection is its own database; a single-connection
            // pool keeps every operation on the same store.
            (SqliteConnectionManager::memory().with_init(init), 1)
        } else {
            (
                SqliteConnectionManager::file(&config.database_path).with_init(init),
                config.max_pool_size,
            )
        };

        let pool = Pool::builder()
            .max_size(max_size)
            .connection_timeout(Duration::from_secs(5))
            .build(manager)?;

        pool.get()?.execute_batch(SCHEMA)?;

        log::info!(
            "connected to SQLite store at {} (pool size {})",
            config.database_path,
            max_size
        );

        Ok(Self { pool })
    }

    /// Runs a closure against a pooled connection on the blocking thread pool.
    /// The connection is acquired per call and released when the closure
    /// returns, on both success and error paths.
    pub async fn run<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            f(&conn)
        })
        .await
        .map_err(|e| crate::errors::AppError::InternalError(format!("blocking task failed: {}", e)))?
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.run(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            Ok(())
        })
        .await
    }

    pub fn pool(&self) -> &Pool<SqliteConnectionManager> {
        &self.pool
    }

    #[cfg(test)]
    pub fn memory() -> Self {
        Self::connect(&Config::test_config()).expect("in-memory database should connect")
    }
}
