use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>>;
    async fn find_by_module(&self, module_id: &str) -> AppResult<Vec<Quiz>>;
    async fn upsert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.quizzes(),
        }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "title": 1 })
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn find_by_module(&self, module_id: &str) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! { "module_id": module_id })
            .sort(doc! { "title": 1 })
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn upsert(&self, quiz: Quiz) -> AppResult<Quiz> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "id": &quiz.id }, &quiz)
            .with_options(options)
            .await?;
        Ok(quiz)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let module_index = IndexModel::builder()
            .keys(doc! { "module_id": 1 })
            .options(IndexOptions::builder().name("module_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(module_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}
