use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cv::{CvUpload, UploadedFile};
use crate::errors::AppError;
use crate::models::{Course, CvAnalysis, UserIdQuery};
use crate::state::AppState;
use crate::store::profile::{clear_analysis, load_analysis, save_analysis};

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: CvAnalysis,
    pub recommendations: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct StoredAnalysisResponse {
    pub analysis: Option<CvAnalysis>,
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}

/// POST /api/v1/cv/analyze
/// Multipart fields: `file`, `target_job`, optional `user_id`.
/// On success the analysis replaces whatever was stored for the user.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file = None;
    let mut target_job = None;
    let mut user_id = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("cv").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("target_job") => {
                target_job = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("user_id") => {
                let raw = field.text().await.map_err(multipart_error)?;
                let id = Uuid::parse_str(raw.trim())
                    .map_err(|_| AppError::Validation(format!("Invalid user_id: {raw}")))?;
                user_id = Some(id);
            }
            _ => {}
        }
    }

    let upload = CvUpload::validate(file, target_job)?;
    info!(
        "Analyzing CV '{}' for '{}' via {} analyzer",
        upload.file.file_name,
        upload.target_job,
        state.analyzer.backend()
    );

    let outcome = state.analyzer.analyze(&upload).await?;

    if let Some(id) = user_id {
        save_analysis(state.store.as_ref(), id, &outcome.analysis).await?;
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: outcome.analysis,
        recommendations: outcome.recommendations,
    }))
}

/// GET /api/v1/cv/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StoredAnalysisResponse>, AppError> {
    let analysis = load_analysis(state.store.as_ref(), params.user_id).await?;
    Ok(Json(StoredAnalysisResponse { analysis }))
}

/// DELETE /api/v1/cv/analysis
pub async fn handle_clear_analysis(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StoredAnalysisResponse>, AppError> {
    clear_analysis(state.store.as_ref(), params.user_id).await?;
    Ok(Json(StoredAnalysisResponse { analysis: None }))
}
