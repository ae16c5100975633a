//! Career plan: the personalisation questionnaire, the stored answers, and a
//! development plan with learning items and skill gaps whose progress the user
//! updates over time.
//!
//! Unlike the milestone planner, the plan and the answers are kept in the
//! profile store. A plan can only be built once a CV analysis exists.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::CvAnalysis;

pub mod handlers;

pub const MAX_SKILL_PROGRESS: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    CareerGoals,
    SkillsInterests,
    ExperienceLevel,
    IndustryPreference,
    WorkEnvironment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerQuestion {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub order: u32,
}

/// The built-in questionnaire, in display order.
pub fn career_questions() -> Vec<CareerQuestion> {
    use QuestionType::*;

    [
        ("What are your primary career goals for the next 2-3 years?", CareerGoals),
        ("What specific skills would you like to develop or improve?", SkillsInterests),
        ("How many years of professional experience do you have?", ExperienceLevel),
        ("What industry or field are you most interested in working in?", IndustryPreference),
        ("What type of work environment do you prefer?", WorkEnvironment),
        ("What are your salary expectations for your next role?", CareerGoals),
        ("Are you interested in leadership or management roles?", CareerGoals),
        ("What motivates you most in your career?", CareerGoals),
        ("Do you prefer working independently or in teams?", WorkEnvironment),
        ("What are your biggest professional challenges right now?", SkillsInterests),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((text, question_type), n)| CareerQuestion {
        id: n,
        text: text.to_string(),
        question_type,
        order: n,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerResponse {
    pub question_id: u32,
    pub response_text: String,
}

/// Merges `incoming` into `stored`, one answer per question.
///
/// Blank answers are skipped. An answer to an unknown question rejects the
/// whole batch and leaves `stored` untouched. Returns how many were recorded.
pub fn record_responses(
    stored: &mut Vec<CareerResponse>,
    incoming: Vec<CareerResponse>,
    questions: &[CareerQuestion],
) -> Result<usize, AppError> {
    if let Some(unknown) = incoming
        .iter()
        .find(|r| !questions.iter().any(|q| q.id == r.question_id))
    {
        return Err(AppError::NotFound(format!(
            "Career question {}",
            unknown.question_id
        )));
    }

    let mut recorded = 0;
    for response in incoming {
        if response.response_text.trim().is_empty() {
            continue;
        }
        match stored.iter_mut().find(|r| r.question_id == response.question_id) {
            Some(existing) => existing.response_text = response.response_text,
            None => stored.push(response),
        }
        recorded += 1;
    }
    stored.sort_by_key(|r| r.question_id);
    Ok(recorded)
}

/// Answer counts per question type, used for logging what a plan was built from.
pub fn answered_by_type(
    responses: &[CareerResponse],
    questions: &[CareerQuestion],
) -> HashMap<QuestionType, usize> {
    let mut counts = HashMap::new();
    for r in responses {
        if let Some(q) = questions.iter().find(|q| q.id == r.question_id) {
            *counts.entry(q.question_type).or_insert(0) += 1;
        }
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

impl FromStr for ItemStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(ItemStatus::NotStarted),
            "in_progress" => Ok(ItemStatus::InProgress),
            "completed" => Ok(ItemStatus::Completed),
            "paused" => Ok(ItemStatus::Paused),
            _ => Err(AppError::Validation("Invalid status".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `course`, `certification`, `practice`, `reading`, `workshop` or `mentorship`.
    #[serde(rename = "type")]
    pub item_type: String,
    pub duration: String,
    pub priority: String,
    pub status: ItemStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub id: String,
    pub skill_name: String,
    pub current_level: String,
    pub target_level: String,
    pub priority: String,
    pub progress_percentage: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub short_term: Vec<String>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub career_goals: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub learning_items: Vec<LearningItem>,
    pub timeline: Timeline,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn learning_item(title: &str, duration: &str, priority: &str, description: &str) -> LearningItem {
    LearningItem {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        item_type: "course".to_string(),
        duration: duration.to_string(),
        priority: priority.to_string(),
        status: ItemStatus::NotStarted,
    }
}

fn skill_gap(skill: &str, current: &str, target: &str, priority: &str) -> SkillGap {
    SkillGap {
        id: Uuid::new_v4().to_string(),
        skill_name: skill.to_string(),
        current_level: current.to_string(),
        target_level: target.to_string(),
        priority: priority.to_string(),
        progress_percentage: 0,
    }
}

/// The standard development plan, titled after the CV's current role.
/// Every item starts `not_started` and every skill gap at 0%.
pub fn build_plan(analysis: &CvAnalysis, now: DateTime<Utc>) -> CareerPlan {
    let role = analysis
        .current_role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or("Professional");

    CareerPlan {
        id: Uuid::new_v4().to_string(),
        title: format!("Career Development Plan - {role}"),
        description:
            "Career development plan based on your CV analysis and responses.".to_string(),
        career_goals: strings(&[
            "Advance in current field",
            "Develop new skills",
            "Increase marketability",
        ]),
        skill_gaps: vec![
            skill_gap("Communication", "intermediate", "advanced", "high"),
            skill_gap("Leadership", "beginner", "intermediate", "medium"),
        ],
        learning_items: vec![
            learning_item(
                "Communication Skills Course",
                "4 weeks",
                "high",
                "Improve verbal and written communication",
            ),
            learning_item(
                "Leadership Workshop",
                "6 weeks",
                "medium",
                "Develop leadership and management skills",
            ),
        ],
        timeline: Timeline {
            short_term: strings(&["Complete communication course", "Update LinkedIn profile"]),
            medium_term: strings(&[
                "Take on leadership role",
                "Network with industry professionals",
            ]),
            long_term: strings(&["Apply for senior positions", "Consider advanced certifications"]),
        },
        recommendations: strings(&[
            "Focus on skill development",
            "Build professional network",
            "Stay updated with industry trends",
        ]),
        created_at: now,
    }
}

pub fn set_item_status(plan: &mut CareerPlan, item_id: &str, status: ItemStatus) -> Result<(), AppError> {
    let item = plan
        .learning_items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| AppError::NotFound(format!("Learning item {item_id}")))?;
    item.status = status;
    Ok(())
}

/// Accepts 0..=100 inclusive.
pub fn set_skill_progress(plan: &mut CareerPlan, skill_id: &str, progress: i64) -> Result<(), AppError> {
    if !(0..=MAX_SKILL_PROGRESS).contains(&progress) {
        return Err(AppError::Validation("Invalid progress percentage".to_string()));
    }
    let gap = plan
        .skill_gaps
        .iter_mut()
        .find(|g| g.id == skill_id)
        .ok_or_else(|| AppError::NotFound(format!("Skill gap {skill_id}")))?;
    gap.progress_percentage = progress as u8;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: u32, text: &str) -> CareerResponse {
        CareerResponse {
            question_id,
            response_text: text.to_string(),
        }
    }

    fn plan() -> CareerPlan {
        build_plan(&CvAnalysis::default(), Utc::now())
    }

    #[test]
    fn test_questionnaire_order_and_types() {
        let questions = career_questions();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[2].question_type, QuestionType::ExperienceLevel);
        assert!(questions.iter().zip(1..).all(|(q, n)| q.id == n && q.order == n));
    }

    #[test]
    fn test_responses_merge_per_question_and_skip_blanks() {
        let questions = career_questions();
        let mut stored = vec![answer(2, "Rust")];

        let recorded = record_responses(
            &mut stored,
            vec![answer(1, "Lead a team"), answer(2, "Go"), answer(3, "   ")],
            &questions,
        )
        .unwrap();

        assert_eq!(recorded, 2);
        assert_eq!(stored, vec![answer(1, "Lead a team"), answer(2, "Go")]);
    }

    #[test]
    fn test_unknown_question_rejects_the_batch() {
        let mut stored = Vec::new();
        let err = record_responses(
            &mut stored,
            vec![answer(1, "Lead a team"), answer(42, "?")],
            &career_questions(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(stored.is_empty());
    }

    #[test]
    fn test_answers_counted_by_type() {
        let counts = answered_by_type(
            &[answer(1, "a"), answer(6, "b"), answer(5, "c")],
            &career_questions(),
        );
        assert_eq!(counts[&QuestionType::CareerGoals], 2);
        assert_eq!(counts[&QuestionType::WorkEnvironment], 1);
    }

    #[test]
    fn test_plan_title_follows_current_role() {
        let analysis = CvAnalysis {
            current_role: Some("Data Analyst".into()),
            ..Default::default()
        };
        let titled = build_plan(&analysis, Utc::now());
        assert_eq!(titled.title, "Career Development Plan - Data Analyst");
        assert_eq!(plan().title, "Career Development Plan - Professional");
    }

    #[test]
    fn test_new_plan_starts_untouched() {
        let plan = plan();
        assert_eq!(plan.learning_items.len(), 2);
        assert!(plan
            .learning_items
            .iter()
            .all(|i| i.status == ItemStatus::NotStarted && i.item_type == "course"));
        assert!(plan.skill_gaps.iter().all(|g| g.progress_percentage == 0));
        assert_eq!(plan.skill_gaps[0].skill_name, "Communication");
        assert_eq!(plan.timeline.long_term.len(), 2);
    }

    #[test]
    fn test_item_status_updates() {
        let mut plan = plan();
        let id = plan.learning_items[1].id.clone();

        set_item_status(&mut plan, &id, "paused".parse().unwrap()).unwrap();
        assert_eq!(plan.learning_items[1].status, ItemStatus::Paused);

        assert!(matches!(
            "done".parse::<ItemStatus>(),
            Err(AppError::Validation(ref m)) if m == "Invalid status"
        ));
        assert!(matches!(
            set_item_status(&mut plan, "missing", ItemStatus::Completed),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_skill_progress_bounds() {
        let mut plan = plan();
        let id = plan.skill_gaps[0].id.clone();

        set_skill_progress(&mut plan, &id, 100).unwrap();
        assert_eq!(plan.skill_gaps[0].progress_percentage, 100);
        set_skill_progress(&mut plan, &id, 0).unwrap();
        assert_eq!(plan.skill_gaps[0].progress_percentage, 0);

        for bad in [-1, 101] {
            assert!(matches!(
                set_skill_progress(&mut plan, &id, bad),
                Err(AppError::Validation(ref m)) if m == "Invalid progress percentage"
            ));
        }
        assert!(matches!(
            set_skill_progress(&mut plan, "missing", 50),
            Err(AppError::NotFound(_))
        ));
    }
}
