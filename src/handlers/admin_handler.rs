use actix_web::{put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{SaveModuleRequest, SaveQuizRequest},
};

#[put("/api/admin/quizzes/{id}")]
async fn save_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SaveQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .save_quiz(&id, request.into_inner())
        .await?;
    log::info!("Quiz '{}' saved by {}", quiz.id, auth.claims.email);
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/admin/modules/{id}")]
async fn save_module(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SaveModuleRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let module = state
        .module_service
        .save_module(&id, request.into_inner())
        .await?;
    log::info!("Module '{}' saved by {}", module.id, auth.claims.email);
    Ok(HttpResponse::Ok().json(module))
}
