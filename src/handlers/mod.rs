pub mod admin_handler;
pub mod auth_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod session_handler;

use actix_web::web;

use crate::graphql;

/// Registers every route. The GraphQL routes expect a `web::Data<Schema>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(quiz_handler::list_modules)
        .service(quiz_handler::get_module)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::get_quiz)
        .service(session_handler::create_session)
        .service(session_handler::get_session)
        .service(session_handler::end_session)
        .service(session_handler::start_session)
        .service(session_handler::select_answer)
        .service(session_handler::next_question)
        .service(session_handler::previous_question)
        .service(session_handler::reset_session)
        .service(auth_handler::login)
        .service(auth_handler::logout)
        .service(auth_handler::me)
        .service(admin_handler::save_quiz)
        .service(admin_handler::save_module)
        .route("/graphql", web::post().to(graphql::graphql_handler))
        .route("/graphiql", web::get().to(graphql::graphiql));
}
