use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
}

impl LearningModule {
    pub fn new(id: &str, title: &str, description: &str, order: i32) -> Self {
        LearningModule {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            order,
        }
    }
}
