//! Built-in CV analyzer used when no external service is configured.
//!
//! Text comes from `pdf-extract` for PDFs and a lossy UTF-8 decode for
//! everything else. Skills are found with fixed pattern families; strengths
//! and improvement areas follow the dominant technology (Python track,
//! React/JavaScript track, generic track). Catalog courses are ranked for the
//! upload's target job and returned with the analysis.

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::cv::{AnalyzeOutcome, AnalyzerError, CvAnalyzer, CvUpload};
use crate::models::{AreaDetail, Course, CvAnalysis, ImprovementArea, Strength, StrengthDetail};
use crate::recommendations::relevance::recommend_for_upload;

const NO_TEXT: &str = "Could not extract text from the file";
const SUMMARY_CHARS: usize = 200;

const SKILL_PATTERNS: &[&str] = &[
    r"(?i)\b(?:Python|JavaScript|Java|React|Angular|Vue|Node\.js|Django|Flask|Spring|Laravel)\b",
    r"(?i)\bC\+\+",
    r"(?i)\b(?:SQL|PostgreSQL|MySQL|MongoDB|Redis|Elasticsearch)\b",
    r"(?i)\b(?:AWS|Azure|GCP|Docker|Kubernetes|Jenkins|Git)\b",
    r"(?i)\b(?:Machine Learning|AI|Data Science|Analytics|Statistics)\b",
    r"(?i)\b(?:Project Management|Leadership|Communication|Teamwork)\b",
];

const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience",
    r"(?i)experience\s*:?\s*(\d+)\+?\s*years?",
];

pub struct LocalCvAnalyzer {
    skill_patterns: Vec<Regex>,
    experience_patterns: Vec<Regex>,
    catalog: Vec<Course>,
}

impl LocalCvAnalyzer {
    pub fn new(catalog: Vec<Course>) -> Result<Self, regex::Error> {
        let compile = |patterns: &[&str]| patterns.iter().map(|p| Regex::new(p)).collect::<Result<Vec<_>, _>>();
        Ok(Self {
            skill_patterns: compile(SKILL_PATTERNS)?,
            experience_patterns: compile(EXPERIENCE_PATTERNS)?,
            catalog,
        })
    }

    /// Skills in order of first appearance per pattern family, de-duplicated
    /// case-insensitively (the first spelling wins).
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();
        for re in &self.skill_patterns {
            for m in re.find_iter(text) {
                let found = m.as_str();
                if !skills.iter().any(|s| s.eq_ignore_ascii_case(found)) {
                    skills.push(found.to_string());
                }
            }
        }
        skills
    }

    pub fn extract_experience_years(&self, text: &str) -> Option<u32> {
        self.experience_patterns.iter().find_map(|re| {
            re.captures(text)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse().ok())
        })
    }

    /// Runs the pattern analysis over already-extracted text.
    pub fn analyze_text(&self, text: &str) -> CvAnalysis {
        let skills = self.extract_skills(text);
        CvAnalysis {
            strengths: strengths_for(&skills),
            areas_for_improvement: areas_for(&skills),
            experience_years: self.extract_experience_years(text),
            current_role: None,
            summary: Some(summarize(text)),
            skills,
        }
    }
}

#[async_trait]
impl CvAnalyzer for LocalCvAnalyzer {
    async fn analyze(&self, upload: &CvUpload) -> Result<AnalyzeOutcome, AnalyzerError> {
        let is_pdf = upload.is_pdf();
        let bytes = upload.file.bytes.clone();

        // PDF parsing is CPU-bound; keep it off the async executor.
        let text = tokio::task::spawn_blocking(move || extract_text(&bytes, is_pdf))
            .await
            .map_err(|e| AnalyzerError::Extraction(format!("Text extraction failed: {e}")))??;

        let analysis = self.analyze_text(&text);
        let recommendations = recommend_for_upload(&analysis, &upload.target_job, &self.catalog);
        debug!(
            "CV analyzed locally: {} skills, experience {:?}, {} courses",
            analysis.skills.len(),
            analysis.experience_years,
            recommendations.len()
        );
        Ok(AnalyzeOutcome {
            analysis,
            recommendations,
        })
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}

fn extract_text(bytes: &[u8], is_pdf: bool) -> Result<String, AnalyzerError> {
    let text = if is_pdf {
        pdf_extract::extract_text_from_mem(bytes).unwrap_or_else(|e| {
            warn!("PDF text extraction failed: {e}");
            String::new()
        })
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };

    if text.trim().is_empty() {
        return Err(AnalyzerError::Extraction(NO_TEXT.to_string()));
    }
    Ok(text)
}

fn summarize(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() > SUMMARY_CHARS {
        let head: String = text.chars().take(SUMMARY_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strengths and improvement areas
// ────────────────────────────────────────────────────────────────────────────

fn strength(title: String, description: String, evidence: String, impact: &str) -> Strength {
    Strength::Detailed(StrengthDetail {
        title,
        description,
        evidence: Some(evidence),
        impact: Some(impact.to_string()),
    })
}

fn area(title: &str, description: &str, current_state: &str, recommendation: &str, priority: &str) -> ImprovementArea {
    ImprovementArea::Detailed(AreaDetail {
        title: title.to_string(),
        description: description.to_string(),
        current_state: Some(current_state.to_string()),
        recommendation: Some(recommendation.to_string()),
        priority: Some(priority.to_string()),
    })
}

fn detected_technologies(skills_lower: &[String]) -> Vec<&'static str> {
    let any = |pred: fn(&str) -> bool| skills_lower.iter().any(|s| pred(s));
    let mut tech = Vec::new();
    if any(|s| s.contains("python")) {
        tech.push("Python");
    }
    if any(|s| s.contains("javascript") || s.contains("js")) {
        tech.push("JavaScript");
    }
    if any(|s| s.contains("react")) {
        tech.push("React");
    }
    if any(|s| s == "java") {
        tech.push("Java");
    }
    if any(|s| s.contains("sql") || s.contains("database")) {
        tech.push("Database Management");
    }
    if any(|s| ["docker", "kubernetes", "aws", "azure"].iter().any(|k| s.contains(k))) {
        tech.push("Cloud/DevOps");
    }
    tech
}

fn strengths_for(skills: &[String]) -> Vec<Strength> {
    if skills.is_empty() {
        return vec![strength(
            "Technical Skills".to_string(),
            "Your CV demonstrates technical competency in programming and software development."
                .to_string(),
            "Skills identified: Various technical skills".to_string(),
            "These skills provide a foundation for career growth in technology.",
        )];
    }

    let lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let tech = detected_technologies(&lower);
    if tech.is_empty() {
        let first = &skills[0];
        let listed: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
        return vec![strength(
            format!("Foundation in {first}"),
            format!("Your CV shows experience with {first} and related technologies."),
            format!("Skills include: {}", listed.join(", ")),
            "This provides a solid base for further career development.",
        )];
    }

    let lead = tech.iter().take(2).copied().collect::<Vec<_>>().join(", ");
    let evidence: Vec<&str> = skills
        .iter()
        .filter(|s| {
            let s = s.to_lowercase();
            tech.iter().take(2).any(|t| s.contains(&t.to_lowercase()))
        })
        .take(3)
        .map(String::as_str)
        .collect();

    vec![
        strength(
            format!("Strong Technical Foundation in {lead}"),
            format!(
                "Your CV demonstrates solid expertise in {lead}, which are highly valued in the current job market."
            ),
            format!("Skills listed include: {}", evidence.join(", ")),
            "These skills position you well for roles requiring modern development practices and technical problem-solving.",
        ),
        strength(
            "Problem-Solving and Technical Competence".to_string(),
            "Your technical skill set shows ability to work with complex systems and solve challenging problems."
                .to_string(),
            format!("Experience with {} different technologies/skills", skills.len()),
            "This versatility makes you adaptable to different projects and technical requirements.",
        ),
    ]
}

fn areas_for(skills: &[String]) -> Vec<ImprovementArea> {
    let lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    if lower.is_empty() {
        return vec![area(
            "Advanced Technical Skills",
            "Consider developing deeper expertise in specific technologies or frameworks.",
            "Basic to intermediate skills demonstrated",
            "Focus on mastering one or two technologies deeply, build portfolio projects, and seek advanced courses or certifications.",
            "high",
        )];
    }

    if lower.iter().any(|s| s.contains("python")) {
        return vec![
            area(
                "Advanced Python Frameworks and Architecture",
                "Your CV doesn't show experience with frameworks like Django, FastAPI, or Flask that backend roles expect.",
                "Basic to intermediate Python knowledge demonstrated",
                "Build production-ready web applications with Django or FastAPI and add them to your portfolio.",
                "high",
            ),
            area(
                "System Design and Scalability",
                "Your CV lacks evidence of designing scalable systems or working with distributed architectures.",
                "No mention of system design, microservices, or scalability patterns",
                "Study distributed systems and practice designing scalable architectures.",
                "high",
            ),
            area(
                "DevOps and Deployment Practices",
                "Limited evidence of DevOps knowledge or production deployment experience.",
                "No mention of CI/CD, containerization, or cloud deployment",
                "Learn Docker, Kubernetes basics and CI/CD pipelines; deploy a project to a cloud provider.",
                "medium",
            ),
        ];
    }

    if lower.iter().any(|s| s.contains("react") || s.contains("javascript")) {
        return vec![
            area(
                "Advanced React Patterns and Performance Optimization",
                "Your CV shows React knowledge but no evidence of advanced patterns, performance work, or state management.",
                "Basic React skills mentioned",
                "Master hooks, context, memoization and code splitting, and a state management library such as Redux or Zustand.",
                "high",
            ),
            area(
                "System Design and Architecture",
                "Frontend developers benefit from understanding how the frontend integrates with backend systems.",
                "No mention of architecture patterns or system design",
                "Learn frontend architecture patterns, API design, and micro-frontends.",
                "medium",
            ),
            area(
                "Testing and Quality Assurance",
                "Your CV doesn't mention testing frameworks or quality assurance practices.",
                "No testing experience mentioned",
                "Learn Jest, React Testing Library, Cypress, or Playwright and add tests to your projects.",
                "high",
            ),
        ];
    }

    vec![
        area(
            "Advanced Programming Patterns and Best Practices",
            "Your CV could demonstrate knowledge of design patterns, clean code principles, and advanced programming concepts.",
            "Basic programming skills demonstrated",
            "Study design patterns, SOLID principles, and clean code practices.",
            "high",
        ),
        area(
            "System Design and Architecture",
            "Understanding how to design and architect systems is crucial for senior roles.",
            "No system design experience mentioned",
            "Learn system design fundamentals and practice designing systems from scratch.",
            "high",
        ),
        area(
            "Testing and Quality Assurance",
            "Professional development requires strong testing practices.",
            "No testing experience mentioned",
            "Learn the testing frameworks of your stack and practice test-driven development.",
            "medium",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::course_catalog;
    use crate::cv::UploadedFile;
    use bytes::Bytes;

    fn analyzer() -> LocalCvAnalyzer {
        LocalCvAnalyzer::new(course_catalog()).unwrap()
    }

    fn upload(bytes: &'static [u8]) -> CvUpload {
        CvUpload::validate(
            Some(UploadedFile {
                file_name: "cv.txt".into(),
                content_type: Some("text/plain".into()),
                bytes: Bytes::from_static(bytes),
            }),
            Some("Backend Developer".into()),
        )
        .unwrap()
    }

    #[test]
    fn test_skills_are_deduplicated_case_insensitively() {
        let skills = analyzer().extract_skills("Python, python, React and C++ on AWS with docker");
        assert_eq!(skills, vec!["Python", "React", "C++", "AWS", "docker"]);
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let skills = analyzer().extract_skills("JavaScript developer");
        assert_eq!(skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_experience_years() {
        let a = analyzer();
        assert_eq!(a.extract_experience_years("5+ years of experience in backend"), Some(5));
        assert_eq!(a.extract_experience_years("Experience: 3 years"), Some(3));
        assert_eq!(a.extract_experience_years("fresh graduate"), None);
    }

    #[test]
    fn test_python_track() {
        let analysis = analyzer().analyze_text("Python and SQL engineer with 4 years experience");
        assert_eq!(
            analysis.area_titles().next(),
            Some("Advanced Python Frameworks and Architecture")
        );
        assert_eq!(
            analysis.strength_titles().next(),
            Some("Strong Technical Foundation in Python, Database Management")
        );
        assert_eq!(analysis.experience_years, Some(4));
    }

    #[test]
    fn test_react_track() {
        let analysis = analyzer().analyze_text("Frontend engineer: React, CSS");
        assert_eq!(
            analysis.area_titles().next(),
            Some("Advanced React Patterns and Performance Optimization")
        );
    }

    #[test]
    fn test_no_skills_gets_generic_entries() {
        let analysis = analyzer().analyze_text("Barista and amateur photographer");
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.strength_titles().next(), Some("Technical Skills"));
        assert_eq!(analysis.area_titles().next(), Some("Advanced Technical Skills"));
    }

    #[test]
    fn test_summary_truncates_at_200_chars() {
        let long = "a".repeat(250);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), 203);
        assert!(summary.ends_with("..."));
        assert_eq!(summarize("short"), "short");
    }

    #[tokio::test]
    async fn test_whitespace_only_file_is_an_extraction_error() {
        let err = analyzer().analyze(&upload(b"   \n  ")).await.unwrap_err();
        assert_eq!(err.to_string(), "Could not extract text from the file");
    }

    #[tokio::test]
    async fn test_plain_text_upload() {
        let outcome = analyzer()
            .analyze(&upload(b"Kubernetes and Docker, 6 years experience"))
            .await
            .unwrap();
        assert_eq!(outcome.analysis.skills, vec!["Kubernetes", "Docker"]);
        // DevOps Essentials ties with Docker & Kubernetes and comes first in the catalog.
        let ids: Vec<&str> = outcome.recommendations.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(&ids[..2], &["5", "10"]);
    }
}
