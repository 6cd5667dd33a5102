use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::domain::{Difficulty, QuestionType, Quiz, QuizQuestion},
    session::QuizSession,
};

/// A question as shown to a learner: option texts only, no correctness flags.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuestionForTaking {
    pub id: String,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&QuizQuestion> for QuestionForTaking {
    fn from(question: &QuizQuestion) -> Self {
        QuestionForTaking {
            id: question.id.clone(),
            text: question.text.clone(),
            question_type: question.question_type,
            options: question.options.iter().map(|o| o.text.clone()).collect(),
            difficulty: question.difficulty,
            image_url: question.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizForTaking {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub question_count: usize,
    pub difficulties: Vec<DifficultyCount>,
    pub questions: Vec<QuestionForTaking>,
}

impl QuizForTaking {
    pub fn from_quiz(quiz: &Quiz) -> Self {
        let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .into_iter()
            .map(|difficulty| DifficultyCount {
                difficulty,
                count: quiz.count_by_difficulty(difficulty),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        QuizForTaking {
            id: quiz.id.clone(),
            module_id: quiz.module_id.clone(),
            title: quiz.title.clone(),
            question_count: quiz.questions.len(),
            difficulties,
            questions: quiz.questions.iter().map(QuestionForTaking::from).collect(),
        }
    }
}

/// Snapshot of a quiz session for the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub current_index: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionForTaking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<String>,
    pub answered_count: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl SessionView {
    pub fn from_session(session_id: Uuid, session: &QuizSession) -> Self {
        let current = session.current_question();

        SessionView {
            session_id,
            quiz_id: session.quiz_bank().map(|quiz| quiz.id.clone()),
            difficulty: session.difficulty(),
            current_index: session.current_index(),
            total_questions: session.total_questions(),
            current_question: current.map(QuestionForTaking::from),
            selected_answer: current
                .and_then(|q| session.user_answer(&q.id))
                .map(str::to_string),
            answered_count: session.answered_count(),
            completed: session.is_completed(),
            score: session.is_completed().then(|| session.score()),
        }
    }
}

/// Outward contract of the identity provider: a success flag, plus an error
/// message when the action failed.
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthOutcome {
    pub fn succeeded() -> Self {
        AuthOutcome {
            success: true,
            error: None,
            token: None,
            email: None,
            expires_at: None,
        }
    }

    pub fn logged_in(session: LoginSession) -> Self {
        AuthOutcome {
            token: Some(session.token),
            email: Some(session.email),
            expires_at: Some(session.expires_at),
            ..Self::succeeded()
        }
    }

    pub fn failed(err: &AppError) -> Self {
        AuthOutcome {
            success: false,
            error: Some(err.message().to_string()),
            ..Self::succeeded()
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
