use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{QuestionType, Quiz, QuizQuestion},
        dto::request::SaveQuizRequest,
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

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.list_quizzes().await
    }

    pub async fn quizzes_for_module(&self, module_id: &str) -> AppResult<Vec<Quiz>> {
        self.repository.find_by_module(module_id).await
    }

    /// Creates or replaces the quiz stored under `id`.
    pub async fn save_quiz(&self, id: &str, request: SaveQuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        validate_questions(&request.questions)?;

        let created_at = self
            .repository
            .find_by_id(id)
            .await?
            .and_then(|existing| existing.created_at)
            .unwrap_or_else(Utc::now);

        let quiz = Quiz {
            id: id.to_string(),
            module_id: request.module_id,
            title: request.title,
            questions: request.questions,
            created_at: Some(created_at),
            modified_at: Some(Utc::now()),
        };

        let saved = self.repository.upsert(quiz).await?;
        log::info!(
            "Saved quiz '{}' with {} questions",
            saved.id,
            saved.questions.len()
        );
        Ok(saved)
    }
}

fn validate_questions(questions: &[QuizQuestion]) -> AppResult<()> {
    let mut seen = HashSet::new();

    for question in questions {
        if question.id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Question id cannot be empty".to_string(),
            ));
        }
        if !seen.insert(question.id.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Duplicate question id '{}'",
                question.id
            )));
        }
        if question.text.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has no text",
                question.id
            )));
        }
        if question.question_type == QuestionType::MultipleChoice && question.options.len() < 2 {
            return Err(AppError::ValidationError(format!(
                "Multiple-choice question '{}' needs at least two options",
                question.id
            )));
        }
        if question.correct_answer().map_or(true, |answer| answer.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has no correct answer",
                question.id
            )));
        }
    }

    Ok(())
}
