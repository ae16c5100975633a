//! Typed accessors over the raw string store.
//!
//! Reads are tolerant: a value that fails to parse is logged and treated as
//! absent. Only backend failures surface as errors.

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::career_plan::{CareerPlan, CareerResponse};
use crate::models::{CvAnalysis, OnboardingProfile, UserIdentity};
use crate::store::{ProfileStore, StoreError};

/// The keys a profile may hold. Names match what the web client used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKey {
    CvAnalysis,
    SavedCourses,
    AuthUser,
    OnboardingComplete,
    UserProfile,
    CareerResponses,
    CareerPlan,
}

impl ProfileKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKey::CvAnalysis => "cv_analysis",
            ProfileKey::SavedCourses => "saved_courses",
            ProfileKey::AuthUser => "auth_user",
            ProfileKey::OnboardingComplete => "onboardingComplete",
            ProfileKey::UserProfile => "userProfile",
            ProfileKey::CareerResponses => "career_responses",
            ProfileKey::CareerPlan => "career_plan",
        }
    }
}

async fn load_json<T: DeserializeOwned>(
    store: &dyn ProfileStore,
    user_id: Uuid,
    key: ProfileKey,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(user_id, key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Ignoring malformed {} for user {user_id}: {e}", key.as_str());
            Ok(None)
        }
    }
}

async fn save_json<T: Serialize>(
    store: &dyn ProfileStore,
    user_id: Uuid,
    key: ProfileKey,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(user_id, key, raw).await
}

pub async fn load_analysis(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<Option<CvAnalysis>, StoreError> {
    load_json(store, user_id, ProfileKey::CvAnalysis).await
}

/// Anonymous requests have no stored analysis.
pub async fn load_analysis_for(
    store: &dyn ProfileStore,
    user_id: Option<Uuid>,
) -> Result<Option<CvAnalysis>, StoreError> {
    match user_id {
        Some(id) => load_analysis(store, id).await,
        None => Ok(None),
    }
}

/// Overwrites any previous analysis.
pub async fn save_analysis(
    store: &dyn ProfileStore,
    user_id: Uuid,
    analysis: &CvAnalysis,
) -> Result<(), StoreError> {
    save_json(store, user_id, ProfileKey::CvAnalysis, analysis).await
}

pub async fn clear_analysis(store: &dyn ProfileStore, user_id: Uuid) -> Result<(), StoreError> {
    store.remove(user_id, ProfileKey::CvAnalysis).await
}

pub async fn load_saved_courses(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<Vec<String>, StoreError> {
    Ok(load_json(store, user_id, ProfileKey::SavedCourses)
        .await?
        .unwrap_or_default())
}

/// Adds the id if absent, removes it if present. The list is written back even
/// when it ends up empty.
pub async fn toggle_saved_course(
    store: &dyn ProfileStore,
    user_id: Uuid,
    course_id: &str,
) -> Result<Vec<String>, StoreError> {
    let mut saved = load_saved_courses(store, user_id).await?;
    if let Some(pos) = saved.iter().position(|id| id == course_id) {
        saved.remove(pos);
    } else {
        saved.push(course_id.to_string());
    }
    save_json(store, user_id, ProfileKey::SavedCourses, &saved).await?;
    Ok(saved)
}

/// Falls back to the default demo identity when none (or garbage) is stored.
pub async fn load_identity(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<UserIdentity, StoreError> {
    Ok(load_json(store, user_id, ProfileKey::AuthUser)
        .await?
        .unwrap_or_default())
}

/// Written by the sign-in flow once the identity provider has answered.
pub async fn save_identity(
    store: &dyn ProfileStore,
    user_id: Uuid,
    identity: &UserIdentity,
) -> Result<(), StoreError> {
    save_json(store, user_id, ProfileKey::AuthUser, identity).await
}

pub async fn load_onboarding(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<Option<OnboardingProfile>, StoreError> {
    load_json(store, user_id, ProfileKey::UserProfile).await
}

pub async fn save_onboarding(
    store: &dyn ProfileStore,
    user_id: Uuid,
    profile: &OnboardingProfile,
) -> Result<(), StoreError> {
    save_json(store, user_id, ProfileKey::UserProfile, profile).await?;
    store
        .set(user_id, ProfileKey::OnboardingComplete, "true".to_string())
        .await
}

pub async fn onboarding_complete(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<bool, StoreError> {
    Ok(store
        .get(user_id, ProfileKey::OnboardingComplete)
        .await?
        .is_some_and(|v| v == "true"))
}

pub async fn load_career_responses(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<Vec<CareerResponse>, StoreError> {
    Ok(load_json(store, user_id, ProfileKey::CareerResponses)
        .await?
        .unwrap_or_default())
}

pub async fn save_career_responses(
    store: &dyn ProfileStore,
    user_id: Uuid,
    responses: &[CareerResponse],
) -> Result<(), StoreError> {
    save_json(store, user_id, ProfileKey::CareerResponses, &responses).await
}

pub async fn load_career_plan(
    store: &dyn ProfileStore,
    user_id: Uuid,
) -> Result<Option<CareerPlan>, StoreError> {
    load_json(store, user_id, ProfileKey::CareerPlan).await
}

/// Replaces the previous plan; only the latest one is kept.
pub async fn save_career_plan(
    store: &dyn ProfileStore,
    user_id: Uuid,
    plan: &CareerPlan,
) -> Result<(), StoreError> {
    save_json(store, user_id, ProfileKey::CareerPlan, plan).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImprovementArea;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_malformed_analysis_loads_as_none() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        store
            .set(user, ProfileKey::CvAnalysis, "{not json".to_string())
            .await
            .unwrap();
        assert_eq!(load_analysis(&store, user).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_analysis_round_trip_keeps_shapes() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let analysis = CvAnalysis {
            skills: vec!["Rust".into()],
            areas_for_improvement: vec![ImprovementArea::from("Kubernetes")],
            ..Default::default()
        };
        save_analysis(&store, user, &analysis).await.unwrap();
        assert_eq!(load_analysis(&store, user).await.unwrap(), Some(analysis));

        clear_analysis(&store, user).await.unwrap();
        assert_eq!(load_analysis(&store, user).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_toggle_saved_course_writes_empty_list() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();

        assert_eq!(toggle_saved_course(&store, user, "3").await.unwrap(), vec!["3"]);
        assert!(toggle_saved_course(&store, user, "3").await.unwrap().is_empty());
        assert_eq!(
            store.get(user, ProfileKey::SavedCourses).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_identity_defaults_when_malformed() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        store
            .set(user, ProfileKey::AuthUser, "42".to_string())
            .await
            .unwrap();
        assert_eq!(load_identity(&store, user).await.unwrap().name, "Rockstar");
    }

    #[tokio::test]
    async fn test_saved_identity_is_loaded_back() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let identity = UserIdentity {
            name: "Sam Rivera".into(),
            email: "sam@example.com".into(),
        };
        save_identity(&store, user, &identity).await.unwrap();
        assert_eq!(load_identity(&store, user).await.unwrap(), identity);
    }

    #[tokio::test]
    async fn test_saving_onboarding_marks_complete() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        assert!(!onboarding_complete(&store, user).await.unwrap());

        let profile = OnboardingProfile {
            full_name: "Ada Lovelace".into(),
            hours: 5,
            ..Default::default()
        };
        save_onboarding(&store, user, &profile).await.unwrap();

        assert!(onboarding_complete(&store, user).await.unwrap());
        assert_eq!(load_onboarding(&store, user).await.unwrap(), Some(profile));
    }
}
