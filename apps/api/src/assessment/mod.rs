//! Self-assessment questionnaire and scoring.
//!
//! Nine base questions across three categories, answered 1–5. A stored CV
//! analysis adds technology-specific questions and nudges category scores
//! for strengths that name the category.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::CvAnalysis;

pub mod handlers;

const MAX_ANSWER: f64 = 5.0;
const STRENGTH_BOOST: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub category: String,
    pub question: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            SkillLevel::Expert
        } else if pct >= 60.0 {
            SkillLevel::Advanced
        } else if pct >= 40.0 {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }

    fn feedback(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Outstanding! You demonstrate expert-level skills in this area.",
            SkillLevel::Advanced => "Great job! You have strong skills in this area.",
            SkillLevel::Intermediate => "Good foundation! There's room for growth.",
            SkillLevel::Beginner => "Getting started! Focus on building fundamentals.",
        }
    }

    fn recommendations(self) -> &'static [&'static str] {
        match self {
            SkillLevel::Expert => &[
                "Continue mentoring others",
                "Share your expertise through content",
                "Consider advanced certifications",
            ],
            SkillLevel::Advanced => &[
                "Take on leadership roles",
                "Mentor junior team members",
                "Pursue advanced training",
            ],
            SkillLevel::Intermediate => &[
                "Practice regularly",
                "Take relevant courses",
                "Seek feedback from peers",
            ],
            SkillLevel::Beginner => &[
                "Start with basics",
                "Find a mentor",
                "Take beginner courses",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: String,
    pub score: u32,
    pub level: SkillLevel,
    pub feedback: String,
    pub recommendations: Vec<String>,
}

fn question(id: &str, category: &str, text: &str, labels: [&str; 5]) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        category: category.to_string(),
        question: text.to_string(),
        options: labels
            .iter()
            .zip(1u8..)
            .map(|(label, value)| AnswerOption {
                value,
                label: label.to_string(),
            })
            .collect(),
    }
}

pub fn base_questions() -> Vec<AssessmentQuestion> {
    const TECH: &str = "Technical Skills";
    const COMM: &str = "Communication";
    const LEAD: &str = "Leadership";

    vec![
        question("1", TECH, "How comfortable are you with version control (Git)?", [
            "Never used it",
            "Basic understanding",
            "Can use basic commands",
            "Comfortable with branching/merging",
            "Expert - can resolve complex conflicts",
        ]),
        question("2", TECH, "Rate your problem-solving abilities", [
            "Struggle with complex problems",
            "Can solve simple problems",
            "Good at breaking down problems",
            "Excellent problem solver",
            "Expert - can solve any challenge",
        ]),
        question("3", TECH, "How would you rate your debugging skills?", [
            "Need help debugging",
            "Can debug simple issues",
            "Good at finding bugs",
            "Excellent debugger",
            "Expert - can debug anything",
        ]),
        question("4", COMM, "How effective are you at explaining technical concepts?", [
            "Struggle to explain",
            "Can explain to peers",
            "Good at explaining",
            "Excellent communicator",
            "Expert - can teach others",
        ]),
        question("5", COMM, "Rate your presentation skills", [
            "Avoid presentations",
            "Can present with notes",
            "Comfortable presenting",
            "Excellent presenter",
            "Expert - can present to any audience",
        ]),
        question("6", COMM, "How well do you document your work?", [
            "Rarely document",
            "Basic documentation",
            "Good documentation habits",
            "Excellent documentation",
            "Expert - comprehensive docs",
        ]),
        question("7", LEAD, "How comfortable are you leading a team?", [
            "Prefer to follow",
            "Can lead small tasks",
            "Comfortable leading",
            "Strong leader",
            "Expert - natural leader",
        ]),
        question("8", LEAD, "Rate your mentoring abilities", [
            "Never mentored",
            "Helped a few people",
            "Regularly mentor",
            "Excellent mentor",
            "Expert - mentor many people",
        ]),
        question("9", LEAD, "How well do you handle conflicts?", [
            "Avoid conflicts",
            "Struggle with conflicts",
            "Can handle conflicts",
            "Good at resolving",
            "Expert - excel at conflict resolution",
        ]),
    ]
}

/// Base questions plus CV-specific ones for React/JavaScript and Python.
pub fn customized_questions(analysis: Option<&CvAnalysis>) -> Vec<AssessmentQuestion> {
    let mut questions = base_questions();
    let Some(analysis) = analysis else {
        return questions;
    };
    let skills: Vec<String> = analysis.skills.iter().map(|s| s.to_lowercase()).collect();

    if skills.iter().any(|s| s.contains("react") || s.contains("javascript")) {
        let name = skills
            .iter()
            .find(|s| s.contains("react"))
            .map(String::as_str)
            .unwrap_or("React");
        questions.push(question(
            "cv-1",
            "Technical Skills",
            &format!("How proficient are you with {name}?"),
            [
                "Just learning",
                "Basic projects",
                "Comfortable building apps",
                "Advanced patterns",
                "Expert level",
            ],
        ));
    }

    if skills.iter().any(|s| s.contains("python")) {
        questions.push(question(
            "cv-2",
            "Technical Skills",
            "Rate your Python programming expertise",
            ["Beginner", "Intermediate", "Advanced", "Expert", "Master level"],
        ));
    }

    questions
}

/// Scores answers per category, in first-appearance order of the categories.
/// Missing answers count as 0.
pub fn score_assessment(
    questions: &[AssessmentQuestion],
    answers: &HashMap<String, u8>,
    analysis: Option<&CvAnalysis>,
) -> Vec<CategoryResult> {
    let mut categories: Vec<(String, Vec<f64>)> = Vec::new();
    for q in questions {
        let answer = answers.get(&q.id).copied().unwrap_or(0).min(5) as f64;
        match categories.iter_mut().find(|(c, _)| *c == q.category) {
            Some((_, scores)) => scores.push(answer),
            None => categories.push((q.category.clone(), vec![answer])),
        }
    }

    if let Some(analysis) = analysis {
        for strength in analysis.strength_titles() {
            let strength = strength.trim().to_lowercase();
            if strength.is_empty() {
                continue;
            }
            for (category, scores) in categories.iter_mut() {
                let category = category.to_lowercase();
                if strength.contains(&category) || category.contains(&strength) {
                    for s in scores.iter_mut() {
                        *s = (*s + STRENGTH_BOOST).min(MAX_ANSWER);
                    }
                }
            }
        }
    }

    categories
        .into_iter()
        .map(|(category, scores)| {
            let total: f64 = scores.iter().sum();
            let pct = total / (scores.len() as f64 * MAX_ANSWER) * 100.0;
            let level = SkillLevel::from_percentage(pct);
            CategoryResult {
                category,
                score: pct.round() as u32,
                level,
                feedback: level.feedback().to_string(),
                recommendations: level.recommendations().iter().map(|r| r.to_string()).collect(),
            }
        })
        .collect()
}
