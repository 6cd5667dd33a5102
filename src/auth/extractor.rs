use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::Claims,
    errors::AppError,
};

/// Extractor for handlers that require a logged-in admin. Rejects requests
/// without a bearer token, with an invalid signature, or whose token was
/// revoked by logout.
pub struct AuthenticatedUser {
    pub claims: Claims,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let credentials = BearerAuth::extract(&req)
                .await
                .map_err(|_| AppError::Unauthorized("Missing bearer token".to_string()))?;

            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

            let claims = state.auth_service.authenticate(credentials.token()).await?;

            Ok(AuthenticatedUser { claims })
        })
    }
}
