use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::{
    filter_questions, practice_stats, toggle_flag, PracticeStats, Question, QuestionFilter,
    QuestionFlag,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsRequest {
    /// The client's current list; the built-in bank when omitted.
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
    #[serde(default)]
    pub filter: QuestionFilter,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    pub stats: PracticeStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub questions: Vec<Question>,
}

/// POST /api/v1/interview/questions
pub async fn handle_filter_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionsRequest>,
) -> Json<QuestionsResponse> {
    let questions = req
        .questions
        .unwrap_or_else(|| state.catalog.questions.clone());
    let filtered: Vec<Question> = filter_questions(&questions, &req.filter)
        .into_iter()
        .cloned()
        .collect();
    let stats = practice_stats(&questions, filtered.len());
    Json(QuestionsResponse {
        questions: filtered,
        stats,
    })
}

/// POST /api/v1/interview/questions/:id/:flag
pub async fn handle_toggle_question(
    State(state): State<AppState>,
    Path((id, flag)): Path<(String, QuestionFlag)>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut questions = req
        .questions
        .unwrap_or_else(|| state.catalog.questions.clone());
    toggle_flag(&mut questions, &id, flag)?;
    Ok(Json(ToggleResponse { questions }))
}
