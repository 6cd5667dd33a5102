use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::{Difficulty, QuizQuestion};

/// A quiz bank as stored in the `quizzes` collection. Questions are embedded
/// in the quiz document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    #[serde(alias = "moduleId")]
    pub module_id: String, // Foreign key to modules collection
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(id: &str, module_id: &str, title: &str, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            id: id.to_string(),
            module_id: module_id.to_string(),
            title: title.to_string(),
            questions,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn questions_with_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> impl Iterator<Item = &QuizQuestion> + '_ {
        self.questions
            .iter()
            .filter(move |question| question.difficulty == difficulty)
    }

    pub fn count_by_difficulty(&self, difficulty: Difficulty) -> usize {
        self.questions_with_difficulty(difficulty).count()
    }
}
