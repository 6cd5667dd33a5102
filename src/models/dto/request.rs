use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Difficulty, QuizQuestion};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 256, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, max = 100))]
    pub quiz_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectAnswerRequest {
    #[validate(length(min = 1, max = 100))]
    pub question_id: String,

    #[validate(length(max = 1000))]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub module_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, message = "A quiz needs at least one question"))]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveModuleRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: String,

    #[validate(range(min = 0))]
    pub order: i32,
}
