//! Upload-time course relevance used by the built-in analyzer.
//!
//! Unlike `courses::score_courses` this works on raw lowercase substrings and
//! also weighs the target job the user typed, so the analyzer can hand back a
//! ready list with the analysis.

use crate::models::{Course, CvAnalysis, ImprovementArea};

pub const MAX_RELEVANT_COURSES: usize = 10;
pub const FALLBACK_COURSES: usize = 6;

const AREA_SKILL_POINTS: u32 = 5;
const AREA_TEXT_POINTS: u32 = 3;
const EXACT_SKILL_POINTS: u32 = 4;
const PARTIAL_SKILL_POINTS: u32 = 2;
const SKILL_TEXT_POINTS: u32 = 1;
const JOB_SKILL_POINTS: u32 = 3;
const JOB_TITLE_POINTS: u32 = 2;

/// Words longer than three characters.
fn meaningful_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|w| w.chars().count() > 3)
}

/// Lowercase improvement phrases: titles and plain entries as-is, plus each
/// meaningful word of a structured entry's description as its own phrase.
fn improvement_phrases(areas: &[ImprovementArea]) -> Vec<String> {
    let mut phrases = Vec::new();
    for area in areas {
        match area {
            ImprovementArea::Text(s) => phrases.push(s.to_lowercase()),
            ImprovementArea::Detailed(d) => {
                phrases.push(d.title.to_lowercase());
                let description = d.description.to_lowercase();
                phrases.extend(meaningful_words(&description).map(str::to_string));
            }
        }
    }
    phrases
}

struct CourseText {
    skills: Vec<String>,
    title: String,
    description: String,
}

impl CourseText {
    fn new(course: &Course) -> Self {
        Self {
            skills: course.skills.iter().map(|s| s.to_lowercase()).collect(),
            title: course.title.to_lowercase(),
            description: course.description.to_lowercase(),
        }
    }

    fn mentions(&self, word: &str) -> bool {
        self.title.contains(word) || self.description.contains(word)
    }
}

pub fn relevance_score(course: &Course, phrases: &[String], skills: &[String], target_job: &str) -> u32 {
    let text = CourseText::new(course);
    let mut score = 0;

    for word in phrases.iter().flat_map(|p| meaningful_words(p)) {
        if text.skills.iter().any(|s| s.contains(word)) {
            score += AREA_SKILL_POINTS;
        }
        if text.mentions(word) {
            score += AREA_TEXT_POINTS;
        }
    }

    for skill in skills {
        if text.skills.iter().any(|s| s == skill) {
            score += EXACT_SKILL_POINTS;
        } else if text
            .skills
            .iter()
            .any(|s| s.contains(skill.as_str()) || skill.contains(s.as_str()))
        {
            score += PARTIAL_SKILL_POINTS;
        }
        if text.mentions(skill) {
            score += SKILL_TEXT_POINTS;
        }
    }

    let target = target_job.to_lowercase();
    for keyword in meaningful_words(&target) {
        if text.skills.iter().any(|s| s.contains(keyword)) {
            score += JOB_SKILL_POINTS;
        }
        if text.title.contains(keyword) {
            score += JOB_TITLE_POINTS;
        }
    }

    score
}

/// Up to ten courses scoring above zero, best first (ties keep catalog order).
/// With no positive score: courses with a skill named inside the target job,
/// then the first six catalog courses.
pub fn recommend_for_upload(analysis: &CvAnalysis, target_job: &str, catalog: &[Course]) -> Vec<Course> {
    let phrases = improvement_phrases(&analysis.areas_for_improvement);
    let skills: Vec<String> = analysis
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut scored: Vec<(u32, &Course)> = catalog
        .iter()
        .map(|c| (relevance_score(c, &phrases, &skills, target_job), c))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let top: Vec<Course> = scored
        .iter()
        .filter(|(score, _)| *score > 0)
        .take(MAX_RELEVANT_COURSES)
        .map(|(_, c)| (*c).clone())
        .collect();
    if !top.is_empty() {
        return top;
    }

    let target = target_job.trim().to_lowercase();
    if !target.is_empty() {
        let for_job: Vec<Course> = catalog
            .iter()
            .filter(|c| c.skills.iter().any(|s| target.contains(&s.to_lowercase())))
            .take(FALLBACK_COURSES)
            .cloned()
            .collect();
        if !for_job.is_empty() {
            return for_job;
        }
    }

    catalog.iter().take(FALLBACK_COURSES).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::course_catalog;

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_improvement_words_outweigh_plain_skill_matches() {
        let analysis = CvAnalysis {
            skills: vec!["React".into()],
            areas_for_improvement: vec!["Performance tuning".into()],
            ..Default::default()
        };
        let courses = recommend_for_upload(&analysis, "", &course_catalog());
        assert_eq!(courses[0].id, "2");
        assert_eq!(courses[1].id, "1");
    }

    #[test]
    fn test_target_job_boosts_matching_courses() {
        let courses = recommend_for_upload(&CvAnalysis::default(), "DevOps Engineer", &course_catalog());
        assert_eq!(ids(&courses), vec!["5", "10"]);

        let catalog = course_catalog();
        let devops = catalog.iter().find(|c| c.id == "5").unwrap();
        assert_eq!(relevance_score(devops, &[], &[], "DevOps Engineer"), 5);
    }

    #[test]
    fn test_scores_cap_at_ten_courses() {
        let analysis = CvAnalysis {
            skills: vec!["python".into(), "react".into(), "javascript".into(), "docker".into()],
            areas_for_improvement: vec!["Machine learning and cloud infrastructure".into()],
            ..Default::default()
        };
        let courses = recommend_for_upload(&analysis, "Backend Developer", &course_catalog());
        assert!(courses.len() <= MAX_RELEVANT_COURSES);
        assert!(!courses.is_empty());
    }

    #[test]
    fn test_falls_back_to_skills_named_in_target_job() {
        // No keyword is longer than three characters, so nothing scores.
        let courses = recommend_for_upload(&CvAnalysis::default(), "AWS Dev", &course_catalog());
        assert_eq!(ids(&courses), vec!["6"]);
    }

    #[test]
    fn test_falls_back_to_first_six() {
        let courses = recommend_for_upload(&CvAnalysis::default(), "Chef", &course_catalog());
        assert_eq!(ids(&courses), vec!["1", "2", "3", "4", "5", "6"]);

        let courses = recommend_for_upload(&CvAnalysis::default(), "", &course_catalog());
        assert_eq!(courses.len(), FALLBACK_COURSES);
    }

    #[test]
    fn test_structured_area_description_words_count() {
        let analysis: CvAnalysis = serde_json::from_str(
            r#"{"areas_for_improvement": [{"title": "", "description": "Learn kubernetes"}]}"#,
        )
        .unwrap();
        let courses = recommend_for_upload(&analysis, "", &course_catalog());
        assert_eq!(courses[0].id, "10");
    }
}
