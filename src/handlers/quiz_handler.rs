use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::QuizForTaking};

#[get("/api/modules")]
async fn list_modules(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let modules = state.module_service.list_modules().await?;
    Ok(HttpResponse::Ok().json(modules))
}

#[get("/api/modules/{id}")]
async fn get_module(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let module = state.module_service.get_module(&id).await?;
    let quizzes: Vec<QuizForTaking> = state
        .quiz_service
        .quizzes_for_module(&module.id)
        .await?
        .iter()
        .map(QuizForTaking::from_quiz)
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "module": module,
        "quizzes": quizzes,
    })))
}

#[get("/api/quizzes")]
async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes: Vec<QuizForTaking> = state
        .quiz_service
        .list_quizzes()
        .await?
        .iter()
        .map(QuizForTaking::from_quiz)
        .collect();
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizForTaking::from_quiz(&quiz)))
}
