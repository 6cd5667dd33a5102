pub mod quiz_session;
pub mod registry;

pub use quiz_session::{Advance, QuizSession, SessionError, DEFAULT_QUESTION_LIMIT};
pub use registry::{
    QuizSessionRegistry, DEFAULT_MAX_LIVE_SESSIONS, DEFAULT_SESSION_IDLE_MINUTES,
};
