use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{hash_password, verify_password, Claims, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::{
            admin_user::normalize_email,
            auth_token::hash_token,
            AdminUser, AuthToken,
        },
        dto::{request::LoginRequest, response::LoginSession},
    },
    repositories::{AdminUserRepository, AuthTokenRepository},
};

// Verified when the email is unknown so both failure paths cost one argon2 run.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$J0PcjoDuOuukeAGDDaZcGA$Pw2PkfnhkPd9AN27YpLGfQRcZ9udgUqFYbNV5QsrqJk";

/// Email/password login for the admin area. The only question the rest of
/// the service asks it is whether a bearer token belongs to a live login.
pub struct AuthService {
    users: Arc<dyn AdminUserRepository>,
    tokens: Arc<dyn AuthTokenRepository>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn AdminUserRepository>,
        tokens: Arc<dyn AuthTokenRepository>,
        jwt: JwtService,
    ) -> Self {
        Self { users, tokens, jwt }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginSession> {
        request.validate()?;

        let email = normalize_email(&request.email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            let _ = verify_password(&request.password, DUMMY_PASSWORD_HASH);
            log::warn!("Rejected login for '{}': unknown email", email);
            return Err(invalid_credentials());
        };

        if !verify_password(&request.password, &user.password_hash)? {
            log::warn!("Rejected login for '{}': wrong password", email);
            return Err(invalid_credentials());
        }

        let issued = self.jwt.create_token(&user)?;
        let expires_at = issued.expires_at();
        self.tokens
            .create(AuthToken::new(&user.id, hash_token(&issued.token), expires_at))
            .await?;

        log::info!("Admin '{}' logged in", user.email);

        Ok(LoginSession {
            token: issued.token,
            email: user.email,
            expires_at,
        })
    }

    pub async fn logout(&self, token: &str) -> AppResult<()> {
        let claims = self.jwt.validate_token(token)?;

        self.tokens
            .revoke_by_token_hash(&hash_token(token))
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => AppError::Unauthorized("Session is not active".to_string()),
                other => other,
            })?;

        log::info!("Admin '{}' logged out", claims.email);
        Ok(())
    }

    /// Claims of a token that is correctly signed, unexpired and not logged out.
    pub async fn authenticate(&self, token: &str) -> AppResult<Claims> {
        let claims = self.jwt.validate_token(token)?;

        match self.tokens.find_by_token_hash(&hash_token(token)).await? {
            Some(stored) if stored.is_valid() => Ok(claims),
            _ => Err(AppError::Unauthorized(
                "Session has ended, please log in again".to_string(),
            )),
        }
    }

    pub async fn is_authenticated(&self, token: &str) -> bool {
        self.authenticate(token).await.is_ok()
    }

    /// Creates the admin account if no account with that email exists yet.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> AppResult<AdminUser> {
        let email = normalize_email(email);
        if let Some(existing) = self.users.find_by_email(&email).await? {
            return Ok(existing);
        }

        let user = AdminUser::new(&email, &hash_password(password)?);
        let created = self.users.create(user).await?;
        log::info!("Created admin account '{}'", created.email);
        Ok(created)
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid email or password".to_string())
}
