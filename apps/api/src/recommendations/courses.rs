//! Course recommendation pipeline.
//!
//! 1. Remote (pre-scored) recommendations bypass local scoring.
//! 2. With a CV analysis, catalog courses are scored against skills and gaps.
//! 3. Without one, the catalog is filtered by the job title's default skills.
//! 4. Level / free-only / search filters are applied to whichever list won.
//! 5. If the filters leave nothing while an analysis exists, the unfiltered
//!    fallback list is returned instead of an empty page.

use serde::{Deserialize, Serialize};

use crate::catalog::JobTitle;
use crate::models::{Course, CourseLevel, CvAnalysis};
use crate::recommendations::tokens::{improvement_tokens, SkillSet, SkillTerm};

/// Size of the catalog head shown when matching produced nothing.
pub const FALLBACK_COURSE_COUNT: usize = 6;

const GAP_POINTS: u32 = 2;
const SKILL_POINTS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCourse {
    pub course: Course,
    pub score: u32,
}

/// Where the returned list came from; lets clients explain the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Remote,
    Scored,
    CatalogHead,
    JobDefault,
    UnfilteredFallback,
}

/// User-selected filters, re-applied on every request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseFilters {
    pub job: JobTitle,
    pub level: Option<CourseLevel>,
    pub free_only: bool,
    pub search: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseRecommendations {
    pub courses: Vec<Course>,
    pub source: RecommendationSource,
}

/// Scores every catalog course against CV skills and improvement areas.
///
/// Per course skill: 2 points when an improvement token names it, otherwise
/// 1 point when a CV skill matches it. Zero-score courses are dropped and the
/// rest stably sorted by descending score.
pub fn score_courses<S, A>(skills: &[S], areas: &[A], catalog: &[Course]) -> Vec<ScoredCourse>
where
    S: AsRef<str>,
    A: AsRef<str>,
{
    let cv_skills = SkillSet::new(skills);
    let gap_tokens = improvement_tokens(areas.iter().map(|a| a.as_ref()));

    let mut scored: Vec<ScoredCourse> = catalog
        .iter()
        .map(|course| {
            let score = course
                .skills
                .iter()
                .map(|raw| {
                    let skill = SkillTerm::new(raw);
                    if gap_tokens.iter().any(|t| skill.has_token(t)) {
                        GAP_POINTS
                    } else if cv_skills.matches(&skill) {
                        SKILL_POINTS
                    } else {
                        0
                    }
                })
                .sum();
            ScoredCourse {
                course: course.clone(),
                score,
            }
        })
        .filter(|s| s.score > 0)
        .collect();

    // sort_by is stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Scores using the text of an analysis (plain strings or structured titles).
pub fn score_analysis(analysis: &CvAnalysis, catalog: &[Course]) -> Vec<ScoredCourse> {
    let areas: Vec<&str> = analysis.area_titles().collect();
    score_courses(&analysis.skills, &areas, catalog)
}

/// Runs the full recommendation pipeline for one request.
pub fn recommend_courses(
    analysis: Option<&CvAnalysis>,
    remote: &[Course],
    catalog: &[Course],
    filters: &CourseFilters,
) -> CourseRecommendations {
    let (base, source) = if !remote.is_empty() {
        (remote.to_vec(), RecommendationSource::Remote)
    } else if let Some(analysis) = analysis {
        let scored = score_analysis(analysis, catalog);
        if scored.is_empty() {
            tracing::debug!("no course scored above zero, using catalog head");
            (catalog_head(catalog), RecommendationSource::CatalogHead)
        } else {
            (
                scored.into_iter().map(|s| s.course).collect(),
                RecommendationSource::Scored,
            )
        }
    } else {
        (
            courses_for_job(filters.job, catalog),
            RecommendationSource::JobDefault,
        )
    };

    let had_courses = !base.is_empty();
    let filtered = apply_filters(base, filters);

    if filtered.is_empty() && had_courses && analysis.is_some() {
        tracing::debug!("filters removed every course, returning unfiltered recommendations");
        let courses = if remote.is_empty() {
            catalog_head(catalog)
        } else {
            remote.to_vec()
        };
        return CourseRecommendations {
            courses,
            source: RecommendationSource::UnfilteredFallback,
        };
    }

    CourseRecommendations {
        courses: filtered,
        source,
    }
}

/// Catalog courses sharing at least one skill with the job's default skill set.
pub fn courses_for_job(job: JobTitle, catalog: &[Course]) -> Vec<Course> {
    let job_skills = SkillSet::new(job.default_skills());
    catalog
        .iter()
        .filter(|c| c.skills.iter().any(|s| job_skills.contains_phrase(s)))
        .cloned()
        .collect()
}

pub fn apply_filters(courses: Vec<Course>, filters: &CourseFilters) -> Vec<Course> {
    let needle = filters.search.trim().to_lowercase();
    courses
        .into_iter()
        .filter(|c| filters.level.map_or(true, |level| c.level == level))
        .filter(|c| !filters.free_only || c.is_free)
        .filter(|c| needle.is_empty() || matches_search(c, &needle))
        .collect()
}

fn matches_search(course: &Course, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
        || course.skills.iter().any(|s| s.to_lowercase().contains(needle))
}

fn catalog_head(catalog: &[Course]) -> Vec<Course> {
    catalog.iter().take(FALLBACK_COURSE_COUNT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::course_catalog;
    use crate::models::ImprovementArea;

    fn make_course(id: &str, skills: &[&str], level: CourseLevel, free: bool) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {id}"),
            provider: "Test".to_string(),
            url: "https://example.com".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            level,
            duration: "10h".to_string(),
            rating: 4.5,
            price: if free { "Free".into() } else { "$10".into() },
            is_free: free,
            description: format!("About {}", skills.join(" ")),
        }
    }

    fn analysis(skills: &[&str], areas: &[&str]) -> CvAnalysis {
        CvAnalysis {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            areas_for_improvement: areas.iter().map(|a| ImprovementArea::from(*a)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_react_performance_scenario_ranks_gap_course_first() {
        let catalog = vec![
            make_course("css", &["css", "layout"], CourseLevel::Beginner, true),
            make_course("perf", &["react", "hooks", "performance"], CourseLevel::Advanced, false),
        ];
        let scored = score_courses(&["react", "css"], &["React performance"], &catalog);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].course.id, "perf");
        // "react" and "performance" are both gap tokens; "hooks" matches nothing.
        assert_eq!(scored[0].score, 4);
        assert_eq!(scored[1].course.id, "css");
        assert_eq!(scored[1].score, 1);
    }

    #[test]
    fn test_gap_overlap_scores_at_least_two() {
        let catalog = course_catalog();
        let areas = ["Kubernetes orchestration", "Testing and quality"];
        let scored = score_courses::<&str, &str>(&[], &areas, &catalog);
        let tokens = improvement_tokens(areas);
        for course in &catalog {
            let overlaps = course
                .skills
                .iter()
                .any(|s| tokens.iter().any(|t| SkillTerm::new(s).has_token(t)));
            if overlaps {
                let entry = scored.iter().find(|s| s.course.id == course.id).unwrap();
                assert!(entry.score >= 2, "course {} scored {}", course.id, entry.score);
            }
        }
        assert!(scored.iter().any(|s| s.course.id == "10"));
    }

    #[test]
    fn test_empty_inputs_score_nothing() {
        let scored = score_courses::<&str, &str>(&[], &[], &course_catalog());
        assert!(scored.is_empty());
    }

    #[test]
    fn test_empty_analysis_falls_back_to_catalog_head() {
        let catalog = course_catalog();
        let recs = recommend_courses(
            Some(&analysis(&[], &[])),
            &[],
            &catalog,
            &CourseFilters::default(),
        );
        assert_eq!(recs.source, RecommendationSource::CatalogHead);
        assert_eq!(recs.courses.len(), FALLBACK_COURSE_COUNT);
        assert_eq!(recs.courses[0].id, "1");
    }

    #[test]
    fn test_scoring_is_idempotent_and_stable() {
        let catalog = course_catalog();
        let a = analysis(&["python", "docker"], &["Cloud deployment"]);
        let first = score_analysis(&a, &catalog);
        let second = score_analysis(&a, &catalog);
        assert_eq!(first, second);

        // Equal scores keep catalog order.
        for pair in first.windows(2) {
            if pair[0].score == pair[1].score {
                let i = catalog.iter().position(|c| c.id == pair[0].course.id).unwrap();
                let j = catalog.iter().position(|c| c.id == pair[1].course.id).unwrap();
                assert!(i < j);
            }
        }
    }

    #[test]
    fn test_structured_area_titles_are_used() {
        let catalog = course_catalog();
        let json = r#"{"skills": [], "areas_for_improvement": [{"title": "Kubernetes", "description": "x"}]}"#;
        let a: CvAnalysis = serde_json::from_str(json).unwrap();
        let scored = score_analysis(&a, &catalog);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].course.id, "10");
        assert_eq!(scored[0].score, 2);
    }

    #[test]
    fn test_remote_recommendations_bypass_scoring() {
        let catalog = course_catalog();
        let remote = vec![make_course("r1", &["rust"], CourseLevel::Advanced, false)];
        let recs = recommend_courses(
            Some(&analysis(&["react"], &[])),
            &remote,
            &catalog,
            &CourseFilters::default(),
        );
        assert_eq!(recs.source, RecommendationSource::Remote);
        assert_eq!(recs.courses, remote);
    }

    #[test]
    fn test_no_analysis_uses_job_defaults() {
        let catalog = course_catalog();
        let filters = CourseFilters {
            job: JobTitle::DevopsEngineer,
            ..Default::default()
        };
        let recs = recommend_courses(None, &[], &catalog, &filters);
        assert_eq!(recs.source, RecommendationSource::JobDefault);
        let ids: Vec<_> = recs.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6", "10"]);
    }

    #[test]
    fn test_filters_apply_to_scored_list() {
        let catalog = course_catalog();
        let filters = CourseFilters {
            free_only: true,
            ..Default::default()
        };
        let recs = recommend_courses(Some(&analysis(&["react"], &[])), &[], &catalog, &filters);
        assert_eq!(recs.source, RecommendationSource::Scored);
        assert!(recs.courses.iter().all(|c| c.is_free));
        assert_eq!(recs.courses[0].id, "1");
    }

    #[test]
    fn test_filters_emptying_list_return_unfiltered_fallback() {
        let catalog = course_catalog();
        let filters = CourseFilters {
            search: "haskell".to_string(),
            ..Default::default()
        };
        let recs = recommend_courses(Some(&analysis(&["react"], &[])), &[], &catalog, &filters);
        assert_eq!(recs.source, RecommendationSource::UnfilteredFallback);
        assert_eq!(recs.courses.len(), FALLBACK_COURSE_COUNT);
    }

    #[test]
    fn test_filters_emptying_remote_list_return_remote() {
        let remote = vec![make_course("r1", &["rust"], CourseLevel::Advanced, false)];
        let filters = CourseFilters {
            free_only: true,
            ..Default::default()
        };
        let recs = recommend_courses(
            Some(&analysis(&["rust"], &[])),
            &remote,
            &course_catalog(),
            &filters,
        );
        assert_eq!(recs.source, RecommendationSource::UnfilteredFallback);
        assert_eq!(recs.courses, remote);
    }

    #[test]
    fn test_filters_without_analysis_may_return_empty() {
        let filters = CourseFilters {
            search: "haskell".to_string(),
            ..Default::default()
        };
        let recs = recommend_courses(None, &[], &course_catalog(), &filters);
        assert!(recs.courses.is_empty());
        assert_eq!(recs.source, RecommendationSource::JobDefault);
    }

    #[test]
    fn test_search_matches_title_description_and_skills() {
        let catalog = course_catalog();
        let by_skill = apply_filters(
            catalog.clone(),
            &CourseFilters {
                search: "KUBERNETES".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_skill.len(), 1);

        let by_description = apply_filters(
            catalog,
            &CourseFilters {
                search: "certification exam".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_description[0].id, "6");
    }

    #[test]
    fn test_level_filter() {
        let filtered = apply_filters(
            course_catalog(),
            &CourseFilters {
                level: Some(CourseLevel::Advanced),
                ..Default::default()
            },
        );
        assert!(filtered.iter().all(|c| c.level == CourseLevel::Advanced));
        assert_eq!(filtered.len(), 2);
    }
}
