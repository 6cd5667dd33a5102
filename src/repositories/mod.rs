pub mod admin_user_repository;
pub mod auth_token_repository;
pub mod module_repository;
pub mod quiz_repository;

pub use admin_user_repository::{AdminUserRepository, MongoAdminUserRepository};
pub use auth_token_repository::{AuthTokenRepository, MongoAuthTokenRepository};
pub use module_repository::{ModuleRepository, MongoModuleRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
