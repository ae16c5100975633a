use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `?user_id=` on per-user endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Identity pair supplied by the sign-in flow. Used for greeting text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            name: "Rockstar".to_string(),
            email: "demo@example.com".to_string(),
        }
    }
}

impl UserIdentity {
    pub fn greeting(&self) -> String {
        let first = self
            .name
            .split_whitespace()
            .next()
            .map(str::to_string)
            .or_else(|| {
                self.email
                    .split('@')
                    .next()
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "there".to_string());
        format!("Welcome back, {first}!")
    }
}

/// The onboarding form as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingProfile {
    pub full_name: String,
    pub email: String,
    pub avatar_url: String,
    pub interests: Vec<String>,
    pub career_focus: String,
    pub goals: Vec<String>,
    pub hours: u32,
    pub region: String,
    pub learning_style: String,
    pub budget: String,
}
