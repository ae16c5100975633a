use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::CvAnalysis;
use crate::planner::goals::{ALL_CATEGORIES, Goal, GoalStats};
use crate::planner::milestones::{accept_suggestion, remove_milestone, set_status, MilestoneStatus};
use crate::planner::{
    add_milestone, default_goals, default_milestones, filter_goals, goal_stats, progress,
    suggest_milestones, Milestone, MilestoneDraft, PlanProgress,
};
use crate::state::AppState;
use crate::store::profile::load_analysis_for;

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub user_id: Option<Uuid>,
    /// Takes precedence over the stored analysis.
    pub analysis: Option<CvAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Milestone>,
}

#[derive(Debug, Deserialize)]
pub struct AddMilestoneRequest {
    pub milestones: Option<Vec<Milestone>>,
    pub draft: MilestoneDraft,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub milestones: Option<Vec<Milestone>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanAction {
    SetStatus { id: String, status: MilestoneStatus },
    Remove { id: String },
    AcceptSuggestion { id: String, suggestions: Vec<Milestone> },
}

#[derive(Debug, Deserialize)]
pub struct PlanActionRequest {
    pub milestones: Option<Vec<Milestone>>,
    #[serde(flatten)]
    pub action: PlanAction,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub milestones: Vec<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Milestone>>,
    pub progress: PlanProgress,
}

impl PlanResponse {
    fn new(milestones: Vec<Milestone>) -> Self {
        let progress = progress(&milestones);
        Self {
            milestones,
            suggestions: None,
            progress,
        }
    }
}

/// POST /api/v1/planner/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let analysis = match req.analysis {
        Some(a) => Some(a),
        None => load_analysis_for(state.store.as_ref(), req.user_id).await?,
    };
    let today = Utc::now().date_naive();
    let suggestions = analysis
        .map(|a| suggest_milestones(&a, today))
        .unwrap_or_default();
    Ok(Json(SuggestionsResponse { suggestions }))
}

/// POST /api/v1/planner/milestones
pub async fn handle_add_milestone(
    Json(req): Json<AddMilestoneRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let mut milestones = req.milestones.unwrap_or_else(default_milestones);
    add_milestone(&mut milestones, req.draft)?;
    Ok(Json(PlanResponse::new(milestones)))
}

/// POST /api/v1/planner/actions
pub async fn handle_plan_action(
    Json(req): Json<PlanActionRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let mut milestones = req.milestones.unwrap_or_else(default_milestones);
    let mut remaining = None;

    match req.action {
        PlanAction::SetStatus { id, status } => set_status(&mut milestones, &id, status)?,
        PlanAction::Remove { id } => remove_milestone(&mut milestones, &id),
        PlanAction::AcceptSuggestion { id, mut suggestions } => {
            accept_suggestion(&mut milestones, &mut suggestions, &id)?;
            remaining = Some(suggestions);
        }
    }

    let mut response = PlanResponse::new(milestones);
    response.suggestions = remaining;
    Ok(Json(response))
}

/// POST /api/v1/planner/progress
pub async fn handle_progress(Json(req): Json<PlanRequest>) -> Json<PlanResponse> {
    Json(PlanResponse::new(
        req.milestones.unwrap_or_else(default_milestones),
    ))
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_string()
}

#[derive(Debug, Deserialize)]
pub struct GoalsRequest {
    pub goals: Option<Vec<Goal>>,
    #[serde(default = "all_categories")]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub hours_percent: u32,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<GoalView>,
    /// Computed over every goal, not just the filtered ones.
    pub stats: GoalStats,
}

/// POST /api/v1/goals/summary
pub async fn handle_goals_summary(Json(req): Json<GoalsRequest>) -> Json<GoalsResponse> {
    let goals = req.goals.unwrap_or_else(default_goals);
    let stats = goal_stats(&goals);
    let views = filter_goals(&goals, &req.category)
        .into_iter()
        .map(|g| GoalView {
            hours_percent: g.hours_percent(),
            goal: g.clone(),
        })
        .collect();
    Json(GoalsResponse {
        goals: views,
        stats,
    })
}
