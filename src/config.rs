use std::env;
use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    session::{DEFAULT_MAX_LIVE_SESSIONS, DEFAULT_QUESTION_LIMIT, DEFAULT_SESSION_IDLE_MINUTES},
};

const DEV_JWT_SECRET: &str = "dev_secret_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub quizzes_collection: String,
    pub modules_collection: String,
    pub admins_collection: String,
    pub auth_tokens_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub session_question_limit: usize,
    pub session_idle_minutes: i64,
    pub max_live_sessions: usize,
    pub admin_email: Option<String>,
    pub admin_password: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "pythagoras-local".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            modules_collection: env::var("MODULES_COLLECTION")
                .unwrap_or_else(|_| "modules".to_string()),
            admins_collection: env::var("ADMINS_COLLECTION")
                .unwrap_or_else(|_| "admins".to_string()),
            auth_tokens_collection: env::var("AUTH_TOKENS_COLLECTION")
                .unwrap_or_else(|_| "auth_tokens".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            session_question_limit: env::var("SESSION_QUESTION_LIMIT")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_QUESTION_LIMIT),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES),
            max_live_sessions: env::var("MAX_LIVE_SESSIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_MAX_LIVE_SESSIONS),
            admin_email: env::var("ADMIN_EMAIL").ok().filter(|e| !e.trim().is_empty()),
            admin_password: env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty())
                .map(SecretString::from),
        }
    }

    /// Rejects secrets that are still on their development defaults.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEV_JWT_SECRET {
            return Err(AppError::InternalError(
                "JWT_SECRET is using the default value; set it to a secure random string"
                    .to_string(),
            ));
        }

        if jwt_secret.len() < 32 {
            return Err(AppError::InternalError(format!(
                "JWT_SECRET is too short ({}); it must be at least 32 characters",
                jwt_secret.len()
            )));
        }

        if let Some(password) = &self.admin_password {
            if password.expose_secret().len() < 8 {
                return Err(AppError::InternalError(
                    "ADMIN_PASSWORD must be at least 8 characters".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "pythagoras-test".to_string(),
            quizzes_collection: "quizzes".to_string(),
            modules_collection: "modules".to_string(),
            admins_collection: "admins".to_string(),
            auth_tokens_collection: "auth_tokens".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            session_question_limit: DEFAULT_QUESTION_LIMIT,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            max_live_sessions: 100,
            admin_email: None,
            admin_password: None,
        }
    }
}
