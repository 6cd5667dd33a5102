use async_graphql::Enum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    pub difficulty: Difficulty,
    // Older quiz documents keep the answer here instead of flagging an option
    #[serde(default, alias = "correctAnswer", skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub text: String,
    #[serde(default, alias = "isCorrect")]
    pub is_correct: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    FillInTheBlank,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QuizQuestion {
    /// The value a learner's answer is compared against: the explicit
    /// `correct_answer` when present, otherwise the first option flagged correct.
    pub fn correct_answer(&self) -> Option<&str> {
        self.correct_answer.as_deref().or_else(|| {
            self.options
                .iter()
                .find(|option| option.is_correct)
                .map(|option| option.text.as_str())
        })
    }

    /// An empty answer never counts, even against an empty key.
    pub fn is_correct(&self, answer: &str) -> bool {
        !answer.is_empty() && self.correct_answer() == Some(answer)
    }
}
