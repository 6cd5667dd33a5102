use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account allowed into the admin area. Only admins log in; learners take
/// quizzes anonymously.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminUser {
    pub fn new(email: &str, password_hash: &str) -> Self {
        AdminUser {
            id: Uuid::new_v4().to_string(),
            email: normalize_email(email),
            password_hash: password_hash.to_string(),
            display_name: None,
            created_at: Some(Utc::now()),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_user_creation_normalizes_email() {
        let user = AdminUser::new("  Guru@Sekolah.id ", "$argon2id$stub");

        assert_eq!(user.email, "guru@sekolah.id");
        assert_eq!(user.password_hash, "$argon2id$stub");
        assert!(user.created_at.is_some());
        assert!(Uuid::parse_str(&user.id).is_ok());
    }
}
