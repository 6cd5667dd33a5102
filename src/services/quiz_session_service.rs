use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::Difficulty,
        dto::{request::SelectAnswerRequest, response::SessionView},
    },
    services::quiz_service::QuizService,
    session::{Advance, QuizSession, QuizSessionRegistry},
};

/// Connects the content source to in-memory quiz sessions. Every call
/// returns a fresh `SessionView` of the session it touched.
pub struct QuizSessionService {
    quiz_service: Arc<QuizService>,
    registry: Arc<QuizSessionRegistry>,
    question_limit: usize,
}

impl QuizSessionService {
    pub fn new(
        quiz_service: Arc<QuizService>,
        registry: Arc<QuizSessionRegistry>,
        question_limit: usize,
    ) -> Self {
        Self {
            quiz_service,
            registry,
            question_limit,
        }
    }

    /// Fetches the quiz bank once and opens a session over it. No questions
    /// are active until `start_session` picks a difficulty.
    pub async fn create_session(&self, quiz_id: &str) -> AppResult<SessionView> {
        let quiz = self.quiz_service.get_quiz(quiz_id).await?;

        let mut session = QuizSession::with_question_limit(self.question_limit);
        session.load_quiz_bank(quiz);
        let id = self.registry.insert(session).await?;

        log::info!("Opened quiz session {} on quiz '{}'", id, quiz_id);
        self.registry
            .with_session(&id, |session| SessionView::from_session(id, session))
            .await
    }

    pub async fn start_session(&self, id: &Uuid, difficulty: Difficulty) -> AppResult<SessionView> {
        self.registry
            .with_session_mut(id, |session| -> AppResult<SessionView> {
                session.start_session(difficulty)?;
                Ok(SessionView::from_session(*id, session))
            })
            .await?
    }

    pub async fn select_answer(
        &self,
        id: &Uuid,
        request: SelectAnswerRequest,
    ) -> AppResult<SessionView> {
        request.validate()?;

        self.registry
            .with_session_mut(id, |session| {
                session.select_answer(&request.question_id, &request.answer);
                SessionView::from_session(*id, session)
            })
            .await
    }

    pub async fn next_question(&self, id: &Uuid) -> AppResult<SessionView> {
        self.registry
            .with_session_mut(id, |session| {
                if let Advance::Completed { score } = session.advance() {
                    log::info!("Quiz session {} completed with score {}", id, score);
                }
                SessionView::from_session(*id, session)
            })
            .await
    }

    pub async fn previous_question(&self, id: &Uuid) -> AppResult<SessionView> {
        self.registry
            .with_session_mut(id, |session| {
                session.retreat();
                SessionView::from_session(*id, session)
            })
            .await
    }

    pub async fn reset_session(&self, id: &Uuid) -> AppResult<SessionView> {
        self.registry
            .with_session_mut(id, |session| -> AppResult<SessionView> {
                session.reset_session()?;
                Ok(SessionView::from_session(*id, session))
            })
            .await?
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<SessionView> {
        self.registry
            .with_session(id, |session| SessionView::from_session(*id, session))
            .await
    }

    pub async fn end_session(&self, id: &Uuid) -> AppResult<()> {
        self.registry.remove(id).await?;
        log::debug!("Closed quiz session {}", id);
        Ok(())
    }
}
