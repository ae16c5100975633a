pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{
    assessment, career_plan, catalog, cv, dashboard, interview, leaderboard, planner,
    recommendations, store,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV analysis
        .route("/api/v1/cv/analyze", post(cv::handlers::handle_analyze_cv))
        .route(
            "/api/v1/cv/analysis",
            get(cv::handlers::handle_get_analysis).delete(cv::handlers::handle_clear_analysis),
        )
        // Reference data
        .route(
            "/api/v1/catalog/courses",
            get(catalog::handlers::handle_list_courses),
        )
        .route(
            "/api/v1/catalog/trends",
            get(catalog::handlers::handle_list_trends),
        )
        .route(
            "/api/v1/catalog/salaries",
            get(catalog::handlers::handle_list_salaries),
        )
        .route("/api/v1/catalog/jobs", get(catalog::handlers::handle_list_jobs))
        // Recommendations
        .route(
            "/api/v1/recommendations/courses",
            post(recommendations::handlers::handle_recommend_courses),
        )
        .route(
            "/api/v1/recommendations/jobs",
            post(recommendations::handlers::handle_recommend_jobs),
        )
        .route(
            "/api/v1/insights/trends",
            post(recommendations::handlers::handle_trend_insights),
        )
        // Saved courses
        .route(
            "/api/v1/saved-courses",
            get(store::handlers::handle_get_saved_courses),
        )
        .route(
            "/api/v1/saved-courses/:course_id/toggle",
            post(store::handlers::handle_toggle_saved_course),
        )
        // Planner and goals
        .route(
            "/api/v1/planner/suggestions",
            post(planner::handlers::handle_suggestions),
        )
        .route(
            "/api/v1/planner/milestones",
            post(planner::handlers::handle_add_milestone),
        )
        .route(
            "/api/v1/planner/actions",
            post(planner::handlers::handle_plan_action),
        )
        .route(
            "/api/v1/planner/progress",
            post(planner::handlers::handle_progress),
        )
        .route(
            "/api/v1/goals/summary",
            post(planner::handlers::handle_goals_summary),
        )
        // Interview practice
        .route(
            "/api/v1/interview/questions",
            post(interview::handlers::handle_filter_questions),
        )
        .route(
            "/api/v1/interview/questions/:id/:flag",
            post(interview::handlers::handle_toggle_question),
        )
        // Community
        .route(
            "/api/v1/leaderboard",
            get(leaderboard::handlers::handle_leaderboard),
        )
        // Skill assessment
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handlers::handle_assessment_questions),
        )
        .route(
            "/api/v1/assessment/results",
            post(assessment::handlers::handle_assessment_results),
        )
        // Dashboard and profile
        .route("/api/v1/dashboard", get(dashboard::handlers::handle_dashboard))
        .route(
            "/api/v1/profile",
            get(dashboard::handlers::handle_get_profile).put(dashboard::handlers::handle_put_profile),
        )
        .route("/api/v1/identity", put(dashboard::handlers::handle_put_identity))
        // Career plan
        .route(
            "/api/v1/career/questions",
            get(career_plan::handlers::handle_career_questions),
        )
        .route(
            "/api/v1/career/responses",
            get(career_plan::handlers::handle_get_responses)
                .post(career_plan::handlers::handle_submit_responses),
        )
        .route(
            "/api/v1/career/plan",
            get(career_plan::handlers::handle_get_plan)
                .post(career_plan::handlers::handle_generate_plan),
        )
        .route(
            "/api/v1/career/plan/items/:id/status",
            post(career_plan::handlers::handle_item_status),
        )
        .route(
            "/api/v1/career/plan/skills/:id/progress",
            post(career_plan::handlers::handle_skill_progress),
        )
        .with_state(state)
}
