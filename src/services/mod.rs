pub mod auth_service;
pub mod module_service;
pub mod quiz_service;
pub mod quiz_session_service;

pub use auth_service::AuthService;
pub use module_service::ModuleService;
pub use quiz_service::QuizService;
pub use quiz_session_service::QuizSessionService;
