use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::AdminUser,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn create(&self, user: AdminUser) -> AppResult<AdminUser>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<AdminUser>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoAdminUserRepository {
    collection: Collection<AdminUser>,
}

impl MongoAdminUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.admins(),
        }
    }
}

#[async_trait]
impl AdminUserRepository for MongoAdminUserRepository {
    async fn create(&self, user: AdminUser) -> AppResult<AdminUser> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Admin with email '{}' already exists",
                user.email
            )));
        }

        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<AdminUser>> {
        let user = self.collection.find_one(doc! { "id": id }).await?;
        Ok(user)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("email_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on admins.email");

        Ok(())
    }
}
