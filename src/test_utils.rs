#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::{QuestionRequest, QuizRequest};

    /// Creates a standard quiz body
    pub fn quiz_request() -> QuizRequest {
        QuizRequest {
            title: "Math".to_string(),
            description: "Basic".to_string(),
        }
    }

    /// Creates a quiz body with a custom title
    pub fn quiz_request_with_title(title: &str) -> QuizRequest {
        QuizRequest {
            title: title.to_string(),
            description: format!("{} description", title),
        }
    }

    /// Creates a standard multiple-choice question body
    pub fn question_request() -> QuestionRequest {
        QuestionRequest {
            text: "What is 2 + 2?".to_string(),
            options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            correct_option: 1,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    use crate::{app_state::AppState, config::Config};

    /// Builds an AppState backed by a fresh in-memory store
    pub fn seeded_test_state() -> AppState {
        AppState::new(Config::test_config()).expect("test state should build")
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_quiz_request() {
        let request = quiz_request();
        assert_eq!(request.title, "Math");
        assert_eq!(request.description, "Basic");
    }

    #[test]
    fn test_fixtures_question_request() {
        let request = question_request();
        assert_eq!(request.options.len(), 3);
        assert_eq!(request.correct_option, 1);
    }
}
