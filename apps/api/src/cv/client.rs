/// HTTP client for the external CV analysis service.
///
/// One POST per upload to `{base_url}/analyze/`, multipart `file` + `target_job`.
/// No retries: a failed analysis is reported to the user, who can upload again.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cv::{AnalyzeOutcome, AnalyzerError, CvAnalyzer, CvUpload};
use crate::models::coerce::{flag, text};
use crate::models::{Course, CvAnalysis, RawCourse};

const FALLBACK_REJECTION: &str = "Failed to analyze CV";
const UNREADABLE_RESPONSE: &str = "The analysis service returned an unreadable response";
const UNREADABLE_ANALYSIS: &str = "The analysis service returned an unreadable analysis";

/// The analyzer's response envelope. Every field is optional and loosely typed
/// on the wire; each one is read on its own so a bad field cannot sink the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalyzerResponse {
    success: Option<Value>,
    analysis: Option<Value>,
    recommendations: Option<Value>,
    error: Option<Value>,
}

impl AnalyzerResponse {
    fn error_text(&self) -> Option<String> {
        self.error.as_ref().and_then(text)
    }
}

/// Entries that are not objects are dropped; the rest get course defaults.
fn remote_courses(recommendations: Option<Value>) -> Vec<Course> {
    match recommendations {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(RawCourse::from_value)
            .map(RawCourse::into_course)
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Clone)]
pub struct HttpCvAnalyzer {
    client: Client,
    endpoint: String,
}

impl HttpCvAnalyzer {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/analyze/", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CvAnalyzer for HttpCvAnalyzer {
    async fn analyze(&self, upload: &CvUpload) -> Result<AnalyzeOutcome, AnalyzerError> {
        let mut part = Part::bytes(upload.file.bytes.to_vec()).file_name(upload.file.file_name.clone());
        if let Some(ct) = upload.file.content_type.as_deref() {
            part = part.mime_str(ct)?;
        }
        let form = Form::new()
            .part("file", part)
            .text("target_job", upload.target_job.clone());

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("CV analyzer returned {status}");
            let message = serde_json::from_str::<AnalyzerResponse>(&body)
                .ok()
                .and_then(|r| r.error_text())
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));
            return Err(AnalyzerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnalyzerResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("CV analyzer response was not a JSON object: {e}");
            AnalyzerError::Rejected(UNREADABLE_RESPONSE.to_string())
        })?;

        let success = parsed.success.as_ref().and_then(flag).unwrap_or(false);
        let raw_analysis = match parsed.analysis {
            Some(ref a) if success && !a.is_null() => a.clone(),
            _ => {
                return Err(AnalyzerError::Rejected(
                    parsed
                        .error_text()
                        .unwrap_or_else(|| FALLBACK_REJECTION.to_string()),
                ))
            }
        };

        let analysis: CvAnalysis = serde_json::from_value(raw_analysis).map_err(|e| {
            warn!("CV analyzer analysis was not an object: {e}");
            AnalyzerError::Rejected(UNREADABLE_ANALYSIS.to_string())
        })?;
        let recommendations = remote_courses(parsed.recommendations);

        debug!(
            "CV analyzed remotely: {} skills, {} recommendations",
            analysis.skills.len(),
            recommendations.len()
        );
        Ok(AnalyzeOutcome {
            analysis,
            recommendations,
        })
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::UploadedFile;
    use axum::{http::StatusCode, routing::post, Router};
    use bytes::Bytes;
    use serde_json::{json, Value};

    /// Serves `reply` on `/analyze/` from an ephemeral local port.
    async fn serve(reply: (StatusCode, String)) -> String {
        let app = Router::new().route(
            "/analyze/",
            post(move || {
                let reply = reply.clone();
                async move { reply }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn upload() -> CvUpload {
        CvUpload::validate(
            Some(UploadedFile {
                file_name: "cv.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: Bytes::from_static(b"%PDF-1.4 fake"),
            }),
            Some("Frontend Developer".into()),
        )
        .unwrap()
    }

    fn body(v: Value) -> String {
        v.to_string()
    }

    #[tokio::test]
    async fn test_success_defaults_remote_courses() {
        let url = serve((
            StatusCode::OK,
            body(json!({
                "success": true,
                "analysis": {"skills": ["React"], "strengths": [], "areas_for_improvement": ["Testing"]},
                "recommendations": [{"title": "Jest Basics", "skills": ["testing"]}]
            })),
        ))
        .await;
        let analyzer = HttpCvAnalyzer::new(&url, 5).unwrap();

        let outcome = analyzer.analyze(&upload()).await.unwrap();
        assert_eq!(outcome.analysis.skills, vec!["React"]);
        assert_eq!(outcome.recommendations.len(), 1);
        assert_eq!(outcome.recommendations[0].duration, "10h");
        assert!(outcome.recommendations[0].is_free);
    }

    #[tokio::test]
    async fn test_non_2xx_uses_error_field() {
        let url = serve((StatusCode::BAD_REQUEST, body(json!({"error": "No file provided"})))).await;
        let err = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No file provided");
    }

    #[tokio::test]
    async fn test_non_2xx_without_json_reports_status() {
        let url = serve((StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string())).await;
        let err = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[tokio::test]
    async fn test_unsuccessful_body_is_rejected() {
        let url = serve((StatusCode::OK, body(json!({"success": false})))).await;
        let err = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to analyze CV");

        let url = serve((StatusCode::OK, body(json!({"success": false, "error": "Unsupported file"})))).await;
        let err = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Rejected(ref m) if m == "Unsupported file"));
    }

    #[tokio::test]
    async fn test_mistyped_fields_keep_the_analysis() {
        let url = serve((
            StatusCode::OK,
            body(json!({
                "success": "true",
                "analysis": {
                    "skills": ["Go"],
                    "experience_years": 3.5,
                    "areas_for_improvement": [{"description": "Kubernetes depth"}]
                },
                "recommendations": [
                    {"title": "Go Basics", "price": 0, "isFree": "true"},
                    "not a course"
                ]
            })),
        ))
        .await;
        let outcome = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap();
        assert_eq!(outcome.analysis.experience_years, Some(4));
        assert_eq!(outcome.analysis.area_titles().next(), Some("Kubernetes depth"));
        assert_eq!(outcome.recommendations.len(), 1);
        assert_eq!(outcome.recommendations[0].price, "Free");
        assert!(outcome.recommendations[0].is_free);
    }

    #[tokio::test]
    async fn test_unparseable_body_has_its_own_message() {
        let url = serve((StatusCode::OK, "<html>oops</html>".to_string())).await;
        let err = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), UNREADABLE_RESPONSE);

        let url = serve((StatusCode::OK, body(json!({"success": true, "analysis": "text"})))).await;
        let err = HttpCvAnalyzer::new(&url, 5)
            .unwrap()
            .analyze(&upload())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), UNREADABLE_ANALYSIS);
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        let analyzer = HttpCvAnalyzer::new("http://127.0.0.1:9", 1).unwrap();
        let err = analyzer.analyze(&upload()).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Http(_)));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let analyzer = HttpCvAnalyzer::new("http://localhost:8000/api/cv/public/", 5).unwrap();
        assert_eq!(analyzer.endpoint(), "http://localhost:8000/api/cv/public/analyze/");
    }
}
