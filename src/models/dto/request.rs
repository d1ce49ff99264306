use secrecy::SecretString;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub identifier: String,
    /// SecretString keeps the submitted secret out of Debug output and logs.
    pub secret: SecretString,
}

/// Body shared by quiz create and update; both require the full field set.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: String,
}

/// Body shared by question create and update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1, max = 2000, message = "text is required"))]
    pub text: String,

    #[validate(length(min = 1, message = "at least one option is required"))]
    pub options: Vec<String>,

    #[serde(rename = "correctOption")]
    pub correct_option: i64,
}
