// Skill-matching recommendation engine.
// Course scoring, job matching and market-trend personalisation all share the
// token-set relation in `tokens`.

pub mod courses;
pub mod handlers;
pub mod jobs;
pub mod relevance;
pub mod tokens;
pub mod trends;

pub use courses::{recommend_courses, CourseFilters, CourseRecommendations};
pub use jobs::{recommend_jobs, RecommendedJob};
pub use trends::{trend_insights, TrendInsights};
