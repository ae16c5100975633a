//! CV analysis: upload validation and the pluggable analyzer backends.
//!
//! Default: `HttpCvAnalyzer` when `CV_ANALYZER_URL` is configured, otherwise
//! `LocalCvAnalyzer` (text extraction plus pattern matching, no network).
//!
//! `AppState` holds an `Arc<dyn CvAnalyzer>`, chosen at startup via config.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::{Course, CvAnalysis};

pub mod client;
pub mod handlers;
pub mod local;

pub use client::HttpCvAnalyzer;
pub use local::LocalCvAnalyzer;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Every message here is shown to the user as-is.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Please upload a CV and enter a target job position")]
    MissingInput,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Extraction(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Upload
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A validated analysis request: a non-empty file and a non-blank target job.
#[derive(Debug, Clone)]
pub struct CvUpload {
    pub file: UploadedFile,
    pub target_job: String,
}

impl CvUpload {
    /// Rejects the request before any analyzer is contacted.
    pub fn validate(file: Option<UploadedFile>, target_job: Option<String>) -> Result<Self, AnalyzerError> {
        let file = file
            .filter(|f| !f.bytes.is_empty())
            .ok_or(AnalyzerError::MissingInput)?;
        let target_job = target_job
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(AnalyzerError::MissingInput)?;
        Ok(Self { file, target_job })
    }

    pub fn is_pdf(&self) -> bool {
        self.file.content_type.as_deref() == Some("application/pdf")
            || self.file.file_name.to_lowercase().ends_with(".pdf")
            || self.file.bytes.starts_with(b"%PDF")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOutcome {
    pub analysis: CvAnalysis,
    /// Courses the analyzer ranked for this upload, already defaulted.
    pub recommendations: Vec<Course>,
}

#[async_trait]
pub trait CvAnalyzer: Send + Sync {
    async fn analyze(&self, upload: &CvUpload) -> Result<AnalyzeOutcome, AnalyzerError>;

    /// Backend name for logs.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(bytes: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: "cv.txt".into(),
            content_type: Some("text/plain".into()),
            bytes: Bytes::from_static(bytes),
        }
    }

    #[test]
    fn test_missing_file_or_job_is_rejected() {
        let err = CvUpload::validate(None, Some("Engineer".into())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please upload a CV and enter a target job position"
        );
        assert!(CvUpload::validate(Some(file(b"")), Some("Engineer".into())).is_err());
        assert!(CvUpload::validate(Some(file(b"hello")), Some("   ".into())).is_err());
        assert!(CvUpload::validate(Some(file(b"hello")), None).is_err());
    }

    #[test]
    fn test_valid_upload_trims_job() {
        let upload = CvUpload::validate(Some(file(b"hello")), Some(" Engineer ".into())).unwrap();
        assert_eq!(upload.target_job, "Engineer");
        assert!(!upload.is_pdf());
    }

    #[test]
    fn test_pdf_detection_by_magic_bytes() {
        let upload = CvUpload::validate(Some(file(b"%PDF-1.7 ...")), Some("x".into())).unwrap();
        assert!(upload.is_pdf());
    }

    #[test]
    fn test_error_messages_pass_through() {
        let err = AnalyzerError::Api {
            status: 500,
            message: "Server error: 500".into(),
        };
        assert_eq!(err.to_string(), "Server error: 500");
        assert_eq!(AnalyzerError::Rejected("nope".into()).to_string(), "nope");
    }
}
