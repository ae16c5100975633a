use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::coerce::lenient_list;
use crate::models::{CvAnalysis, RawCourse};
use crate::recommendations::{
    recommend_courses, recommend_jobs, trend_insights, CourseFilters, CourseRecommendations,
    RecommendedJob, TrendInsights,
};
use crate::state::AppState;
use crate::store::profile::load_analysis_for;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CourseRecommendationRequest {
    pub user_id: Option<Uuid>,
    /// Takes precedence over the stored analysis.
    pub analysis: Option<CvAnalysis>,
    /// Pre-scored courses returned by the analyzer alongside the analysis.
    #[serde(deserialize_with = "lenient_list")]
    pub remote: Vec<RawCourse>,
    #[serde(flatten)]
    pub filters: CourseFilters,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub user_id: Option<Uuid>,
    pub analysis: Option<CvAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct JobRecommendationsResponse {
    pub has_analysis: bool,
    pub jobs: Vec<RecommendedJob>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrendsRequest {
    pub user_id: Option<Uuid>,
    pub analysis: Option<CvAnalysis>,
    pub search: String,
}

async fn resolve_analysis(
    state: &AppState,
    analysis: Option<CvAnalysis>,
    user_id: Option<Uuid>,
) -> Result<Option<CvAnalysis>, AppError> {
    match analysis {
        Some(a) => Ok(Some(a)),
        None => Ok(load_analysis_for(state.store.as_ref(), user_id).await?),
    }
}

/// POST /api/v1/recommendations/courses
pub async fn handle_recommend_courses(
    State(state): State<AppState>,
    Json(req): Json<CourseRecommendationRequest>,
) -> Result<Json<CourseRecommendations>, AppError> {
    let analysis = resolve_analysis(&state, req.analysis, req.user_id).await?;
    let remote: Vec<_> = req.remote.into_iter().map(RawCourse::into_course).collect();

    let recommendations = recommend_courses(
        analysis.as_ref(),
        &remote,
        &state.catalog.courses,
        &req.filters,
    );
    tracing::debug!(
        "{} course recommendations ({:?})",
        recommendations.courses.len(),
        recommendations.source
    );
    Ok(Json(recommendations))
}

/// POST /api/v1/recommendations/jobs
/// Without an analysis there is nothing to match against: the job list is empty.
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<JobRecommendationsResponse>, AppError> {
    let analysis = resolve_analysis(&state, req.analysis, req.user_id).await?;
    let jobs = analysis
        .as_ref()
        .map(|a| recommend_jobs(a, &state.catalog.jobs, &state.catalog.salary_bands))
        .unwrap_or_default();
    Ok(Json(JobRecommendationsResponse {
        has_analysis: analysis.is_some(),
        jobs,
    }))
}

/// POST /api/v1/insights/trends
pub async fn handle_trend_insights(
    State(state): State<AppState>,
    Json(req): Json<TrendsRequest>,
) -> Result<Json<TrendInsights>, AppError> {
    let analysis = resolve_analysis(&state, req.analysis, req.user_id).await?;
    Ok(Json(trend_insights(
        analysis.as_ref(),
        &state.catalog.trends,
        &req.search,
    )))
}
