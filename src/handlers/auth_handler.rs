use actix_web::{get, post, web, HttpResponse, ResponseError as _};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::{
    app_state::AppState,
    models::dto::{
        request::LoginRequest,
        response::{AuthOutcome, AuthStatus},
    },
};

// Login and logout always answer with an `AuthOutcome` body, also on failure.

#[post("/auth/login")]
async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    match state.auth_service.login(request.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(AuthOutcome::logged_in(session)),
        Err(err) => HttpResponse::build(err.status_code()).json(AuthOutcome::failed(&err)),
    }
}

#[post("/auth/logout")]
async fn logout(state: web::Data<AppState>, credentials: BearerAuth) -> HttpResponse {
    match state.auth_service.logout(credentials.token()).await {
        Ok(()) => HttpResponse::Ok().json(AuthOutcome::succeeded()),
        Err(err) => HttpResponse::build(err.status_code()).json(AuthOutcome::failed(&err)),
    }
}

#[get("/auth/me")]
async fn me(state: web::Data<AppState>, credentials: Option<BearerAuth>) -> HttpResponse {
    let status = match credentials {
        Some(credentials) => match state.auth_service.authenticate(credentials.token()).await {
            Ok(claims) => AuthStatus {
                authenticated: true,
                email: Some(claims.email),
            },
            Err(_) => AuthStatus {
                authenticated: false,
                email: None,
            },
        },
        None => AuthStatus {
            authenticated: false,
            email: None,
        },
    };

    HttpResponse::Ok().json(status)
}
