#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use pythagoras_server::{
    app_state::{AppState, Repositories},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        AdminUser, AuthToken, Difficulty, LearningModule, QuestionOption, QuestionType, Quiz,
        QuizQuestion,
    },
    repositories::{AdminUserRepository, AuthTokenRepository, ModuleRepository, QuizRepository},
};

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        let mut items: Vec<Quiz> = self.quizzes.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }

    async fn find_by_module(&self, module_id: &str) -> AppResult<Vec<Quiz>> {
        let mut items: Vec<Quiz> = self
            .quizzes
            .read()
            .await
            .values()
            .filter(|q| q.module_id == module_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }

    async fn upsert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes
            .write()
            .await
            .insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryModuleRepository {
    modules: RwLock<HashMap<String, LearningModule>>,
}

#[async_trait]
impl ModuleRepository for InMemoryModuleRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LearningModule>> {
        Ok(self.modules.read().await.get(id).cloned())
    }

    async fn list_ordered(&self) -> AppResult<Vec<LearningModule>> {
        let mut items: Vec<LearningModule> =
            self.modules.read().await.values().cloned().collect();
        items.sort_by_key(|m| m.order);
        Ok(items)
    }

    async fn upsert(&self, module: LearningModule) -> AppResult<LearningModule> {
        self.modules
            .write()
            .await
            .insert(module.id.clone(), module.clone());
        Ok(module)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAdminUserRepository {
    users: RwLock<HashMap<String, AdminUser>>,
}

#[async_trait]
impl AdminUserRepository for InMemoryAdminUserRepository {
    async fn create(&self, user: AdminUser) -> AppResult<AdminUser> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::AlreadyExists(format!(
                "Admin with email '{}' already exists",
                user.email
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<AdminUser>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAuthTokenRepository {
    tokens: RwLock<HashMap<String, AuthToken>>,
}

#[async_trait]
impl AuthTokenRepository for InMemoryAuthTokenRepository {
    async fn create(&self, token: AuthToken) -> AppResult<AuthToken> {
        self.tokens
            .write()
            .await
            .insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token_hash(&self, hash: &str) -> AppResult<Option<AuthToken>> {
        Ok(self.tokens.read().await.get(hash).cloned())
    }

    async fn revoke_by_token_hash(&self, hash: &str) -> AppResult<()> {
        match self.tokens.write().await.get_mut(hash) {
            Some(token) if !token.revoked => {
                token.revoked = true;
                Ok(())
            }
            _ => Err(AppError::NotFound("Auth token not found".to_string())),
        }
    }

    async fn revoke_all_for_user(&self, user_id: &str) -> AppResult<u64> {
        let mut revoked = 0;
        for token in self.tokens.write().await.values_mut() {
            if token.user_id == user_id && !token.revoked {
                token.revoked = true;
                revoked += 1;
            }
        }
        Ok(revoked)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub const ADMIN_EMAIL: &str = "guru@sekolah.id";
pub const ADMIN_PASSWORD: &str = "segitiga-siku";

pub fn question(id: &str, difficulty: Difficulty, correct: &str) -> QuizQuestion {
    let mut options = vec![QuestionOption {
        text: correct.to_string(),
        is_correct: true,
    }];
    options.extend(["1 cm", "2 cm", "3 cm"].into_iter().map(|text| QuestionOption {
        text: text.to_string(),
        is_correct: false,
    }));

    QuizQuestion {
        id: id.to_string(),
        text: format!("Berapakah panjang sisi miring pada soal {}?", id),
        question_type: QuestionType::MultipleChoice,
        options,
        difficulty,
        correct_answer: None,
        image_url: None,
    }
}

/// Seven easy, two medium and one hard question.
pub fn pythagoras_quiz() -> Quiz {
    let mut questions: Vec<QuizQuestion> = (1..=7)
        .map(|n| question(&format!("p-easy-{}", n), Difficulty::Easy, "5 cm"))
        .collect();
    questions.push(question("p-medium-1", Difficulty::Medium, "12 cm"));
    questions.push(question("p-medium-2", Difficulty::Medium, "8 cm"));
    questions.push(question("p-hard-1", Difficulty::Hard, "7 cm"));

    Quiz::new(
        "quiz-pythagoras-1",
        "pythagoras-v1",
        "Kuis Pythagoras Dasar",
        questions,
    )
}

pub fn pythagoras_module() -> LearningModule {
    LearningModule::new(
        "pythagoras-v1",
        "Petualangan Teorema Pythagoras",
        "Menjelajahi rahasia di balik segitiga siku-siku.",
        1,
    )
}

pub fn correct_answer_for(quiz: &Quiz, question_id: &str) -> String {
    quiz.questions
        .iter()
        .find(|q| q.id == question_id)
        .and_then(|q| q.correct_answer())
        .map(str::to_string)
        .unwrap_or_default()
}

/// App state over seeded in-memory repositories with one admin account.
pub async fn seeded_state() -> AppState {
    let quizzes = Arc::new(InMemoryQuizRepository::default());
    quizzes
        .upsert(pythagoras_quiz())
        .await
        .expect("seed quiz");
    let modules = Arc::new(InMemoryModuleRepository::default());
    modules
        .upsert(pythagoras_module())
        .await
        .expect("seed module");

    let state = AppState::from_repositories(
        Config::test_config(),
        Repositories {
            quizzes,
            modules,
            admins: Arc::new(InMemoryAdminUserRepository::default()),
            auth_tokens: Arc::new(InMemoryAuthTokenRepository::default()),
        },
        None,
    );
    state
        .auth_service
        .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("seed admin");
    state
}
