// Per-user landing summary and the onboarding profile.

pub mod handlers;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Course, CvAnalysis, UserIdentity};
use crate::recommendations::{recommend_courses, recommend_jobs, CourseFilters, RecommendedJob};

/// Courses and jobs shown on the dashboard.
pub const DASHBOARD_PREVIEW: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub greeting: String,
    pub has_analysis: bool,
    pub saved_course_count: usize,
    pub onboarding_complete: bool,
    pub top_courses: Vec<Course>,
    /// Empty until a CV has been analysed.
    pub top_jobs: Vec<RecommendedJob>,
}

pub fn build_summary(
    identity: &UserIdentity,
    analysis: Option<&CvAnalysis>,
    saved_course_count: usize,
    onboarding_complete: bool,
    catalog: &Catalog,
) -> DashboardSummary {
    let mut top_courses =
        recommend_courses(analysis, &[], &catalog.courses, &CourseFilters::default()).courses;
    top_courses.truncate(DASHBOARD_PREVIEW);

    let top_jobs = analysis
        .map(|a| {
            let mut jobs = recommend_jobs(a, &catalog.jobs, &catalog.salary_bands);
            jobs.truncate(DASHBOARD_PREVIEW);
            jobs
        })
        .unwrap_or_default();

    DashboardSummary {
        greeting: identity.greeting(),
        has_analysis: analysis.is_some(),
        saved_course_count,
        onboarding_complete,
        top_courses,
        top_jobs,
    }
}
