use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{SqliteAdminRepository, SqliteQuestionRepository, SqliteQuizRepository},
    services::{AuthService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth_service: Arc<AuthService>,
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config)?;

        let admin_repository = Arc::new(SqliteAdminRepository::new(&db));
        let auth_service = Arc::new(AuthService::new(admin_repository));

        let quiz_repository = Arc::new(SqliteQuizRepository::new(&db));
        let quiz_service = Arc::new(QuizService::new(quiz_repository.clone()));

        let question_repository = Arc::new(SqliteQuestionRepository::new(&db));
        let question_service = Arc::new(QuestionService::new(
            question_repository,
            quiz_repository,
        ));

        Ok(Self {
            db,
            auth_service,
            quiz_service,
            question_service,
            config: Arc::new(config),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        self.config.request_timeout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_against_memory_store() {
        let state = AppState::new(Config::test_config()).expect("state should build");
        assert_eq!(state.request_timeout(), Duration::from_secs(5));
    }
}
