use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::{customized_questions, score_assessment, AssessmentQuestion, CategoryResult};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::profile::load_analysis_for;

#[derive(Debug, Deserialize)]
pub struct AssessmentQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentSubmission {
    pub user_id: Option<Uuid>,
    /// Question id to answer value (1–5).
    #[serde(default)]
    pub answers: HashMap<String, u8>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResults {
    pub results: Vec<CategoryResult>,
    pub cv_adjusted: bool,
}

/// GET /api/v1/assessment/questions
pub async fn handle_assessment_questions(
    State(state): State<AppState>,
    Query(params): Query<AssessmentQuery>,
) -> Result<Json<Vec<AssessmentQuestion>>, AppError> {
    let analysis = load_analysis_for(state.store.as_ref(), params.user_id).await?;
    Ok(Json(customized_questions(analysis.as_ref())))
}

/// POST /api/v1/assessment/results
pub async fn handle_assessment_results(
    State(state): State<AppState>,
    Json(req): Json<AssessmentSubmission>,
) -> Result<Json<AssessmentResults>, AppError> {
    let analysis = load_analysis_for(state.store.as_ref(), req.user_id).await?;
    let questions = customized_questions(analysis.as_ref());
    let results = score_assessment(&questions, &req.answers, analysis.as_ref());
    Ok(Json(AssessmentResults {
        results,
        cv_adjusted: analysis.is_some(),
    }))
}
