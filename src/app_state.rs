use std::sync::Arc;

use chrono::Duration;
use secrecy::ExposeSecret as _;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AdminUserRepository, AuthTokenRepository, ModuleRepository, MongoAdminUserRepository,
        MongoAuthTokenRepository, MongoModuleRepository, MongoQuizRepository, QuizRepository,
    },
    services::{AuthService, ModuleService, QuizService, QuizSessionService},
    session::QuizSessionRegistry,
};

/// Storage backends the services are built on.
pub struct Repositories {
    pub quizzes: Arc<dyn QuizRepository>,
    pub modules: Arc<dyn ModuleRepository>,
    pub admins: Arc<dyn AdminUserRepository>,
    pub auth_tokens: Arc<dyn AuthTokenRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub module_service: Arc<ModuleService>,
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<QuizSessionService>,
    pub sessions: Arc<QuizSessionRegistry>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;
        let modules = Arc::new(MongoModuleRepository::new(&db));
        modules.ensure_indexes().await?;
        let admins = Arc::new(MongoAdminUserRepository::new(&db));
        admins.ensure_indexes().await?;
        let auth_tokens = Arc::new(MongoAuthTokenRepository::new(&db));
        auth_tokens.ensure_indexes().await?;

        let repositories = Repositories {
            quizzes,
            modules,
            admins,
            auth_tokens,
        };
        let state = Self::from_repositories(config, repositories, Some(db));
        state.bootstrap_admin().await?;
        state.spawn_session_sweeper();

        Ok(state)
    }

    /// Wires the services over the given repositories. `db` is only used by
    /// the readiness check.
    pub fn from_repositories(config: Config, repos: Repositories, db: Option<Database>) -> Self {
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        let quiz_service = Arc::new(QuizService::new(repos.quizzes));
        let module_service = Arc::new(ModuleService::new(repos.modules));
        let auth_service = Arc::new(AuthService::new(repos.admins, repos.auth_tokens, jwt));
        let registry = Arc::new(QuizSessionRegistry::with_limits(
            Duration::minutes(config.session_idle_minutes),
            config.max_live_sessions,
        ));
        let session_service = Arc::new(QuizSessionService::new(
            Arc::clone(&quiz_service),
            Arc::clone(&registry),
            config.session_question_limit,
        ));

        Self {
            quiz_service,
            module_service,
            auth_service,
            session_service,
            sessions: registry,
            config: Arc::new(config),
            db,
        }
    }

    /// Sweeps idle quiz sessions once a minute for the life of the process.
    fn spawn_session_sweeper(&self) {
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(std::time::Duration::from_secs(60));
            loop {
                ticker.tick().await;
                let evicted = sessions.evict_expired().await;
                if evicted > 0 {
                    log::info!("Evicted {} idle quiz sessions", evicted);
                }
            }
        });
    }

    async fn bootstrap_admin(&self) -> AppResult<()> {
        if let (Some(email), Some(password)) =
            (&self.config.admin_email, &self.config.admin_password)
        {
            self.auth_service
                .ensure_admin(email, password.expose_secret())
                .await?;
        }
        Ok(())
    }
}
