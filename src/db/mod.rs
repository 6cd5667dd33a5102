use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{AdminUser, AuthToken, LearningModule, Quiz},
};

const APP_NAME: &str = "pythagoras-server";

/// Collection names for each stored document type, taken from `Config`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionNames {
    pub quizzes: String,
    pub modules: String,
    pub admins: String,
    pub auth_tokens: String,
}

impl CollectionNames {
    pub fn from_config(config: &Config) -> Self {
        Self {
            quizzes: config.quizzes_collection.clone(),
            modules: config.modules_collection.clone(),
            admins: config.admins_collection.clone(),
            auth_tokens: config.auth_tokens_collection.clone(),
        }
    }
}

/// Handle on the quiz content database with typed collections.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
    collections: CollectionNames,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(10);
        options.min_pool_size = Some(2);
        options.connect_timeout = Some(Duration::from_secs(5));
        options.server_selection_timeout = Some(Duration::from_secs(5));

        let db = Self {
            client: Client::with_options(options)?,
            db_name: config.mongo_db_name.clone(),
            collections: CollectionNames::from_config(config),
        };
        db.health_check().await?;

        log::info!(
            "Connected to MongoDB database '{}' (quizzes: '{}', modules: '{}')",
            db.db_name,
            db.collections.quizzes,
            db.collections.modules
        );
        Ok(db)
    }

    pub fn quizzes(&self) -> Collection<Quiz> {
        self.collection(&self.collections.quizzes)
    }

    pub fn modules(&self) -> Collection<LearningModule> {
        self.collection(&self.collections.modules)
    }

    pub fn admins(&self) -> Collection<AdminUser> {
        self.collection(&self.collections.admins)
    }

    pub fn auth_tokens(&self) -> Collection<AuthToken> {
        self.collection(&self.collections.auth_tokens)
    }

    /// Pings the server; the error names the database it was checking.
    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| {
                AppError::DatabaseError(format!(
                    "MongoDB database '{}' is unreachable: {}",
                    self.db_name, err
                ))
            })
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.db_name).collection(name)
    }
}
