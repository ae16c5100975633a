use serde::Serialize;

use crate::catalog::{JobProfile, SalaryBand};
use crate::models::CvAnalysis;
use crate::recommendations::tokens::SkillSet;

/// At most this many job matches are returned.
pub const MAX_JOB_MATCHES: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedJob {
    pub title: String,
    /// Percentage of the profile's requirements covered by the CV, 0–100.
    pub match_score: u32,
    pub salary_range: String,
    pub average_salary: u32,
    pub growth: u32,
    pub required_skills: Vec<String>,
    pub why_match: String,
}

/// `round(matches / required * 100)`; an empty requirement list scores 0.
/// A profile with any unmatched requirement never reaches 100.
pub fn match_score<S: AsRef<str>>(cv_skills: &SkillSet, required: &[S]) -> u32 {
    if required.is_empty() {
        return 0;
    }
    let matches = required
        .iter()
        .filter(|r| cv_skills.matches_str(r.as_ref()))
        .count();
    let score = ((matches as f64 / required.len() as f64) * 100.0).round() as u32;
    if matches < required.len() {
        score.min(99)
    } else {
        score
    }
}

/// Scores every job profile against the CV and returns the best matches.
pub fn recommend_jobs(
    analysis: &CvAnalysis,
    profiles: &[JobProfile],
    bands: &[SalaryBand],
) -> Vec<RecommendedJob> {
    let cv_skills = SkillSet::new(&analysis.skills);

    let mut jobs: Vec<RecommendedJob> = profiles
        .iter()
        .map(|profile| {
            let band = bands.iter().find(|b| b.role == profile.title);
            RecommendedJob {
                title: profile.title.to_string(),
                match_score: match_score(&cv_skills, profile.match_skills),
                salary_range: band.map(SalaryBand::range_label).unwrap_or_default(),
                average_salary: band.map(|b| b.average).unwrap_or_default(),
                growth: profile.growth,
                required_skills: profile.display_skills.iter().map(|s| s.to_string()).collect(),
                why_match: why_match(&cv_skills, profile).to_string(),
            }
        })
        .collect();

    jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    jobs.truncate(MAX_JOB_MATCHES);
    jobs
}

fn why_match(cv_skills: &SkillSet, profile: &JobProfile) -> &'static str {
    let strong = profile
        .strong_signals
        .iter()
        .all(|group| group.iter().any(|signal| cv_skills.matches_str(signal)));
    if strong {
        profile.strong_reason
    } else {
        profile.weak_reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{job_profiles, salary_bands};

    fn analysis(skills: &[&str]) -> CvAnalysis {
        CvAnalysis {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_match_score_bounds() {
        let set = SkillSet::new(["react", "javascript", "typescript", "css", "html"]);
        assert_eq!(match_score(&set, &["react", "javascript", "typescript", "css", "html"]), 100);
        assert_eq!(match_score(&set, &["rust"]), 0);
        assert_eq!(match_score(&set, &["react", "rust", "go"]), 33);
        assert_eq!(match_score::<&str>(&set, &[]), 0);
    }

    #[test]
    fn test_hundred_only_when_all_required_match() {
        let set = SkillSet::new(["react", "javascript", "typescript", "css"]);
        let score = match_score(&set, &["react", "javascript", "typescript", "css", "html"]);
        assert_eq!(score, 80);
    }

    #[test]
    fn test_one_missing_requirement_out_of_many_stays_below_hundred() {
        let have: Vec<String> = (0..199).map(|i| format!("skill{i}")).collect();
        let mut required = have.clone();
        required.push("missing".to_string());
        let set = SkillSet::new(&have);
        assert_eq!(match_score(&set, &required), 99);
        assert_eq!(match_score(&set, &have), 100);
    }

    #[test]
    fn test_frontend_cv_ranks_frontend_first() {
        let jobs = recommend_jobs(
            &analysis(&["React", "JavaScript", "TypeScript", "CSS", "HTML"]),
            &job_profiles(),
            &salary_bands(),
        );
        assert_eq!(jobs.len(), 6);
        assert_eq!(jobs[0].title, "Frontend Developer");
        assert_eq!(jobs[0].match_score, 100);
        assert_eq!(jobs[0].salary_range, "$70K - $140K");
        assert_eq!(jobs[0].average_salary, 105_000);
        assert!(jobs[0].why_match.starts_with("Strong match"));
        for pair in jobs.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_scores_stay_in_range() {
        let jobs = recommend_jobs(
            &analysis(&["python", "machine learning", "sql", "docker"]),
            &job_profiles(),
            &salary_bands(),
        );
        assert!(jobs.iter().all(|j| j.match_score <= 100));
    }

    #[test]
    fn test_full_stack_needs_both_sides_for_strong_reason() {
        let profiles = job_profiles();
        let full_stack = profiles.iter().find(|p| p.title == "Full Stack Developer").unwrap();

        let front_only = SkillSet::new(["react"]);
        assert!(why_match(&front_only, full_stack).starts_with("Good potential"));

        let both = SkillSet::new(["react", "node.js"]);
        assert!(why_match(&both, full_stack).starts_with("Excellent match"));
    }

    #[test]
    fn test_empty_cv_keeps_catalog_order() {
        let jobs = recommend_jobs(&analysis(&[]), &job_profiles(), &salary_bands());
        assert!(jobs.iter().all(|j| j.match_score == 0));
        assert_eq!(jobs[0].title, "Frontend Developer");
        assert!(jobs.iter().all(|j| j.why_match.starts_with("Good potential")));
    }
}
