use axum::{extract::State, Json};

use crate::catalog::{JobProfile, MarketTrend, SalaryBand};
use crate::models::Course;
use crate::state::AppState;

/// GET /api/v1/catalog/courses
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog.courses.clone())
}

/// GET /api/v1/catalog/trends
pub async fn handle_list_trends(State(state): State<AppState>) -> Json<Vec<MarketTrend>> {
    Json(state.catalog.trends.clone())
}

/// GET /api/v1/catalog/salaries
pub async fn handle_list_salaries(State(state): State<AppState>) -> Json<Vec<SalaryBand>> {
    Json(state.catalog.salary_bands.clone())
}

/// GET /api/v1/catalog/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobProfile>> {
    Json(state.catalog.jobs.clone())
}
