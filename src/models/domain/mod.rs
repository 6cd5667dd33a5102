pub mod admin_user;
pub mod auth_token;
pub mod learning_module;
pub mod quiz;
pub mod quiz_question;
pub use admin_user::AdminUser;
pub use auth_token::AuthToken;
pub use learning_module::LearningModule;
pub use quiz::Quiz;
pub use quiz_question::{Difficulty, QuestionOption, QuestionType, QuizQuestion};
