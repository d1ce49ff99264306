use std::future::Future;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

pub mod auth_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

pub use auth_handler::admin_login;
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use question_handler::{create_question, delete_question, get_questions, update_question};
pub use quiz_handler::{create_quiz, delete_quiz, get_quizzes, update_quiz};

/// Bounds every store-backed request; a wedged connection fails the request
/// with a timeout error instead of hanging the client.
pub(crate) async fn with_request_timeout<T>(
    duration: Duration,
    fut: impl Future<Output = AppResult<T>>,
) -> AppResult<T> {
    tokio::time::timeout(duration, fut)
        .await
        .map_err(|_| AppError::Timeout("request exceeded the configured deadline".to_string()))?
}
