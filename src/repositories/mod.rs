pub mod admin_repository;
pub mod question_repository;
pub mod quiz_repository;

pub use admin_repository::{AdminRepository, SqliteAdminRepository};
pub use question_repository::{QuestionRepository, SqliteQuestionRepository};
pub use quiz_repository::{QuizRepository, SqliteQuizRepository};
