use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::LearningModule};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LearningModule>>;
    /// All modules in ascending `order`.
    async fn list_ordered(&self) -> AppResult<Vec<LearningModule>>;
    async fn upsert(&self, module: LearningModule) -> AppResult<LearningModule>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoModuleRepository {
    collection: Collection<LearningModule>,
}

impl MongoModuleRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.modules(),
        }
    }
}

#[async_trait]
impl ModuleRepository for MongoModuleRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LearningModule>> {
        let module = self.collection.find_one(doc! { "id": id }).await?;
        Ok(module)
    }

    async fn list_ordered(&self) -> AppResult<Vec<LearningModule>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "order": 1 })
            .await?;
        let modules: Vec<LearningModule> = cursor.try_collect().await?;
        Ok(modules)
    }

    async fn upsert(&self, module: LearningModule) -> AppResult<LearningModule> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "id": &module.id }, &module)
            .with_options(options)
            .await?;
        Ok(module)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        log::info!("Created unique index on modules.id");

        Ok(())
    }
}
