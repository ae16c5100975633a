use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::UserIdQuery;
use crate::state::AppState;
use crate::store::profile::{load_saved_courses, toggle_saved_course};

#[derive(Debug, Serialize)]
pub struct SavedCoursesResponse {
    pub saved_courses: Vec<String>,
}

/// GET /api/v1/saved-courses
pub async fn handle_get_saved_courses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedCoursesResponse>, AppError> {
    let saved_courses = load_saved_courses(state.store.as_ref(), params.user_id).await?;
    Ok(Json(SavedCoursesResponse { saved_courses }))
}

/// POST /api/v1/saved-courses/:course_id/toggle
pub async fn handle_toggle_saved_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedCoursesResponse>, AppError> {
    let saved_courses =
        toggle_saved_course(state.store.as_ref(), params.user_id, &course_id).await?;
    Ok(Json(SavedCoursesResponse { saved_courses }))
}
