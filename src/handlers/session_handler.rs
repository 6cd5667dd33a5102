use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateSessionRequest, SelectAnswerRequest, StartSessionRequest},
};

#[post("/api/sessions")]
async fn create_session(
    state: web::Data<AppState>,
    request: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .session_service
        .create_session(&request.quiz_id)
        .await?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/api/sessions/{id}")]
async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[delete("/api/sessions/{id}")]
async fn end_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.session_service.end_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/sessions/{id}/start")]
async fn start_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<StartSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .session_service
        .start_session(&id, request.difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/answers")]
async fn select_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .session_service
        .select_answer(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/next")]
async fn next_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.next_question(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/previous")]
async fn previous_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.previous_question(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/reset")]
async fn reset_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.reset_session(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}
