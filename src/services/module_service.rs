use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::LearningModule, dto::request::SaveModuleRequest},
    repositories::ModuleRepository,
};

pub struct ModuleService {
    repository: Arc<dyn ModuleRepository>,
}

impl ModuleService {
    pub fn new(repository: Arc<dyn ModuleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_modules(&self) -> AppResult<Vec<LearningModule>> {
        self.repository.list_ordered().await
    }

    pub async fn get_module(&self, id: &str) -> AppResult<LearningModule> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Module with id '{}' not found", id)))
    }

    pub async fn save_module(
        &self,
        id: &str,
        request: SaveModuleRequest,
    ) -> AppResult<LearningModule> {
        request.validate()?;

        let module = LearningModule {
            id: id.to_string(),
            title: request.title,
            description: request.description,
            order: request.order,
        };

        let saved = self.repository.upsert(module).await?;
        log::info!("Saved module '{}'", saved.id);
        Ok(saved)
    }
}
