use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    models::{domain::LearningModule, dto::response::QuizForTaking},
};

pub struct QueryRoot;

// Errors are extended so clients receive the `code` extension.
#[Object]
impl QueryRoot {
    async fn modules(&self, ctx: &Context<'_>) -> Result<Vec<LearningModule>> {
        let state = ctx.data::<AppState>()?;
        state
            .module_service
            .list_modules()
            .await
            .map_err(|err| err.extend())
    }

    async fn module(&self, ctx: &Context<'_>, id: ID) -> Result<LearningModule> {
        let state = ctx.data::<AppState>()?;
        state
            .module_service
            .get_module(&id)
            .await
            .map_err(|err| err.extend())
    }

    /// A quiz as presented to students; correct answers are not exposed.
    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> Result<QuizForTaking> {
        let state = ctx.data::<AppState>()?;
        let quiz = state
            .quiz_service
            .get_quiz(&id)
            .await
            .map_err(|err| err.extend())?;
        Ok(QuizForTaking::from_quiz(&quiz))
    }

    async fn quizzes(&self, ctx: &Context<'_>, module_id: Option<ID>) -> Result<Vec<QuizForTaking>> {
        let state = ctx.data::<AppState>()?;
        let quizzes = match module_id {
            Some(module_id) => state.quiz_service.quizzes_for_module(&module_id).await,
            None => state.quiz_service.list_quizzes().await,
        }
        .map_err(|err| err.extend())?;
        Ok(quizzes.iter().map(QuizForTaking::from_quiz).collect())
    }
}
