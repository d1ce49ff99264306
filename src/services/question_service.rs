use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Question,
        dto::{request::QuestionRequest, response::AckResponse},
    },
    repositories::{QuestionRepository, QuizRepository},
};

pub struct QuestionService {
    question_repository: Arc<dyn QuestionRepository>,
    quiz_repository: Arc<dyn QuizRepository>,
}

impl QuestionService {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        quiz_repository: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            question_repository,
            quiz_repository,
        }
    }

    pub async fn create_question(
        &self,
        quiz_id: i64,
        request: QuestionRequest,
    ) -> AppResult<Question> {
        validate_question(&request)?;

        // Existence check ahead of the insert gives a 404 instead of a bare
        // foreign key violation from the store.
        self.quiz_repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        self.question_repository
            .create(quiz_id, &request.text, &request.options, request.correct_option)
            .await
    }

    pub async fn list_questions(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        self.question_repository.list_by_quiz(quiz_id).await
    }

    pub async fn update_question(
        &self,
        id: i64,
        request: QuestionRequest,
    ) -> AppResult<AckResponse> {
        validate_question(&request)?;

        let affected = self
            .question_repository
            .update(id, &request.text, &request.options, request.correct_option)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(AckResponse::new("Question updated successfully!"))
    }

    pub async fn delete_question(&self, id: i64) -> AppResult<AckResponse> {
        let affected = self.question_repository.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(AckResponse::new("Question deleted successfully!"))
    }
}

fn validate_question(request: &QuestionRequest) -> AppResult<()> {
    request.validate()?;

    // correct_option is an index into options, checked at the gateway
    // boundary rather than trusted from the client.
    if request.correct_option < 0 || request.correct_option as usize >= request.options.len() {
        return Err(AppError::ValidationError(format!(
            "correctOption {} is not a valid index into {} options",
            request.correct_option,
            request.options.len()
        )));
    }

    Ok(())
}
