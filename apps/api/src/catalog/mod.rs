// Static reference data: courses, market tables, job profiles.
// Loaded once at startup and shared read-only through AppState.

pub mod courses;
pub mod handlers;
pub mod market;

pub use courses::course_catalog;
pub use market::{
    job_profiles, market_trends, salary_bands, JobProfile, JobTitle, MarketTrend, SalaryBand,
};

use crate::career_plan::{career_questions, CareerQuestion};
use crate::interview::{seed_questions, Question};
use crate::leaderboard::{seed_entries, LeaderboardEntry};
use crate::models::Course;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub trends: Vec<MarketTrend>,
    pub salary_bands: Vec<SalaryBand>,
    pub jobs: Vec<JobProfile>,
    pub questions: Vec<Question>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub career_questions: Vec<CareerQuestion>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            courses: course_catalog(),
            trends: market_trends(),
            salary_bands: salary_bands(),
            jobs: job_profiles(),
            questions: seed_questions(),
            leaderboard: seed_entries(),
            career_questions: career_questions(),
        }
    }
}
