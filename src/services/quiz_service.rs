use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{request::QuizRequest, response::AckResponse},
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(&self, request: QuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        self.repository
            .create(&request.title, &request.description)
            .await
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.list().await
    }

    pub async fn update_quiz(&self, id: i64, request: QuizRequest) -> AppResult<AckResponse> {
        request.validate()?;

        let affected = self
            .repository
            .update(id, &request.title, &request.description)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        Ok(AckResponse::new("Quiz updated successfully!"))
    }

    pub async fn delete_quiz(&self, id: i64) -> AppResult<AckResponse> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        Ok(AckResponse::new("Quiz deleted successfully!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::quiz_repository::MockQuizRepository;

    fn request(title: &str, description: &str) -> QuizRequest {
        QuizRequest {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_quiz_returns_stored_record() {
        let mut repository = MockQuizRepository::new();
        repository.expect_create().returning(|title, description| {
            Ok(Quiz {
                id: 1,
                title: title.to_string(),
                description: description.to_string(),
            })
        });

        let service = QuizService::new(Arc::new(repository));
        let quiz = service
            .create_quiz(request("Math", "Basic"))
            .await
            .expect("create should succeed");

        assert_eq!(quiz.id, 1);
        assert_eq!(quiz.title, "Math");
        assert_eq!(quiz.description, "Basic");
    }

    #[actix_web::test]
    async fn test_create_quiz_rejects_empty_title() {
        let mut repository = MockQuizRepository::new();
        repository.expect_create().never();

        let service = QuizService::new(Arc::new(repository));
        let err = service
            .create_quiz(request("", "Basic"))
            .await
            .expect_err("empty title should be rejected");

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_update_quiz_maps_zero_rows_to_not_found() {
        let mut repository = MockQuizRepository::new();
        repository.expect_update().returning(|_, _, _| Ok(0));

        let service = QuizService::new(Arc::new(repository));
        let err = service
            .update_quiz(42, request("Math", "Basic"))
            .await
            .expect_err("missing id should be NotFound");

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_update_quiz_acks_on_success() {
        let mut repository = MockQuizRepository::new();
        repository.expect_update().returning(|_, _, _| Ok(1));

        let service = QuizService::new(Arc::new(repository));
        let ack = service
            .update_quiz(1, request("Math", "Basic"))
            .await
            .expect("update should succeed");

        assert_eq!(ack.message, "Quiz updated successfully!");
    }

    #[actix_web::test]
    async fn test_delete_quiz_maps_zero_rows_to_not_found() {
        let mut repository = MockQuizRepository::new();
        repository.expect_delete().returning(|_| Ok(0));

        let service = QuizService::new(Arc::new(repository));
        let err = service
            .delete_quiz(42)
            .await
            .expect_err("missing id should be NotFound");

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
