use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::dashboard::{build_summary, DashboardSummary};
use crate::errors::AppError;
use crate::models::{OnboardingProfile, UserIdQuery, UserIdentity};
use crate::state::AppState;
use crate::store::profile::{
    load_analysis, load_identity, load_onboarding, load_saved_courses, onboarding_complete,
    save_identity, save_onboarding,
};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<OnboardingProfile>,
    pub onboarding_complete: bool,
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub identity: UserIdentity,
    pub greeting: String,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let store = state.store.as_ref();
    let identity = load_identity(store, params.user_id).await?;
    let analysis = load_analysis(store, params.user_id).await?;
    let saved = load_saved_courses(store, params.user_id).await?;
    let onboarded = onboarding_complete(store, params.user_id).await?;

    Ok(Json(build_summary(
        &identity,
        analysis.as_ref(),
        saved.len(),
        onboarded,
        &state.catalog,
    )))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let store = state.store.as_ref();
    Ok(Json(ProfileResponse {
        profile: load_onboarding(store, params.user_id).await?,
        onboarding_complete: onboarding_complete(store, params.user_id).await?,
    }))
}

/// PUT /api/v1/profile
/// Saving the form also marks onboarding as complete.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(profile): Json<OnboardingProfile>,
) -> Result<Json<ProfileResponse>, AppError> {
    save_onboarding(state.store.as_ref(), params.user_id, &profile).await?;
    Ok(Json(ProfileResponse {
        profile: Some(profile),
        onboarding_complete: true,
    }))
}

/// PUT /api/v1/identity
/// Records the name and email the identity provider returned after sign-in.
pub async fn handle_put_identity(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(identity): Json<UserIdentity>,
) -> Result<Json<IdentityResponse>, AppError> {
    if identity.name.trim().is_empty() && identity.email.trim().is_empty() {
        return Err(AppError::Validation("A name or email is required".to_string()));
    }
    save_identity(state.store.as_ref(), params.user_id, &identity).await?;
    Ok(Json(IdentityResponse {
        greeting: identity.greeting(),
        identity,
    }))
}
