use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::career_plan::{
    answered_by_type, build_plan, record_responses, set_item_status, set_skill_progress,
    CareerPlan, CareerQuestion, CareerResponse, ItemStatus,
};
use crate::errors::AppError;
use crate::models::UserIdQuery;
use crate::state::AppState;
use crate::store::profile::{
    load_analysis, load_career_plan, load_career_responses, save_career_plan,
    save_career_responses,
};

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<CareerQuestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsesRequest {
    pub responses: Vec<CareerResponse>,
}

#[derive(Debug, Serialize)]
pub struct ResponsesResponse {
    /// Answers recorded by this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<usize>,
    pub responses: Vec<CareerResponse>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Option<CareerPlan>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: String,
    pub status: ItemStatus,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub progress_percentage: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub id: String,
    pub progress_percentage: i64,
}

async fn require_plan(state: &AppState, params: &UserIdQuery) -> Result<CareerPlan, AppError> {
    load_career_plan(state.store.as_ref(), params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No career plan has been generated yet".to_string()))
}

/// GET /api/v1/career/questions
pub async fn handle_career_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.catalog.career_questions.clone(),
    })
}

/// GET /api/v1/career/responses
pub async fn handle_get_responses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResponsesResponse>, AppError> {
    let responses = load_career_responses(state.store.as_ref(), params.user_id).await?;
    Ok(Json(ResponsesResponse {
        saved: None,
        responses,
    }))
}

/// POST /api/v1/career/responses
/// Answers replace earlier answers to the same question.
pub async fn handle_submit_responses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<ResponsesRequest>,
) -> Result<Json<ResponsesResponse>, AppError> {
    let store = state.store.as_ref();
    let mut responses = load_career_responses(store, params.user_id).await?;
    let saved = record_responses(&mut responses, req.responses, &state.catalog.career_questions)?;
    if saved > 0 {
        save_career_responses(store, params.user_id, &responses).await?;
    }
    Ok(Json(ResponsesResponse {
        saved: Some(saved),
        responses,
    }))
}

/// POST /api/v1/career/plan
/// Builds a fresh plan from the stored analysis, replacing any earlier plan.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    let store = state.store.as_ref();
    let analysis = load_analysis(store, params.user_id)
        .await?
        .ok_or_else(|| AppError::Validation("Please upload your CV first.".to_string()))?;
    let responses = load_career_responses(store, params.user_id).await?;

    let plan = build_plan(&analysis, Utc::now());
    info!(
        "Career plan {} generated for {} ({} answers: {:?})",
        plan.id,
        params.user_id,
        responses.len(),
        answered_by_type(&responses, &state.catalog.career_questions)
    );
    save_career_plan(store, params.user_id, &plan).await?;
    Ok(Json(PlanResponse { plan: Some(plan) }))
}

/// GET /api/v1/career/plan
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = load_career_plan(state.store.as_ref(), params.user_id).await?;
    Ok(Json(PlanResponse { plan }))
}

/// POST /api/v1/career/plan/items/:id/status
pub async fn handle_item_status(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let status: ItemStatus = req.status.parse()?;
    let mut plan = require_plan(&state, &params).await?;
    set_item_status(&mut plan, &item_id, status)?;
    save_career_plan(state.store.as_ref(), params.user_id, &plan).await?;
    Ok(Json(StatusResponse {
        id: item_id,
        status,
    }))
}

/// POST /api/v1/career/plan/skills/:id/progress
pub async fn handle_skill_progress(
    State(state): State<AppState>,
    Path(skill_id): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let progress = req
        .progress_percentage
        .ok_or_else(|| AppError::Validation("Invalid progress percentage".to_string()))?;
    let mut plan = require_plan(&state, &params).await?;
    set_skill_progress(&mut plan, &skill_id, progress)?;
    save_career_plan(state.store.as_ref(), params.user_id, &plan).await?;
    Ok(Json(ProgressResponse {
        id: skill_id,
        progress_percentage: progress,
    }))
}
