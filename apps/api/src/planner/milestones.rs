use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::CvAnalysis;

/// Suggestions are spaced this many days apart.
const SUGGESTION_SPACING_DAYS: i64 = 30;
const MAX_AREA_SUGGESTIONS: usize = 3;
const MAX_SKILL_SUGGESTIONS: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneCategory {
    #[default]
    Skill,
    Certification,
    Project,
    Role,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub status: MilestoneStatus,
    #[serde(default)]
    pub category: MilestoneCategory,
    #[serde(default)]
    pub priority: Priority,
}

/// The add-milestone form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilestoneDraft {
    pub title: String,
    pub description: String,
    pub target_date: Option<NaiveDate>,
    pub category: MilestoneCategory,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    pub completed: usize,
    pub in_progress: usize,
    pub total: usize,
    /// 0–100, unrounded.
    pub overall: f64,
}

/// Appends a new `not-started` milestone. Title and target date are required.
pub fn add_milestone(plan: &mut Vec<Milestone>, draft: MilestoneDraft) -> Result<&Milestone, AppError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Milestone title is required".to_string()));
    }
    let target_date = draft
        .target_date
        .ok_or_else(|| AppError::Validation("Milestone target date is required".to_string()))?;

    plan.push(Milestone {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: draft.description,
        target_date,
        status: MilestoneStatus::NotStarted,
        category: draft.category,
        priority: draft.priority,
    });
    Ok(&plan[plan.len() - 1])
}

pub fn set_status(plan: &mut [Milestone], id: &str, status: MilestoneStatus) -> Result<(), AppError> {
    let milestone = plan
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Milestone {id} not found")))?;
    milestone.status = status;
    Ok(())
}

/// Removing an unknown id leaves the plan as it was.
pub fn remove_milestone(plan: &mut Vec<Milestone>, id: &str) {
    plan.retain(|m| m.id != id);
}

/// Moves a suggestion into the plan under a fresh id and drops it from the
/// suggestion list.
pub fn accept_suggestion(plan: &mut Vec<Milestone>, suggestions: &mut Vec<Milestone>, id: &str) -> Result<(), AppError> {
    let pos = suggestions
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Suggestion {id} not found")))?;
    let mut milestone = suggestions.remove(pos);
    milestone.id = Uuid::new_v4().to_string();
    plan.push(milestone);
    Ok(())
}

pub fn progress(plan: &[Milestone]) -> PlanProgress {
    let completed = plan
        .iter()
        .filter(|m| m.status == MilestoneStatus::Completed)
        .count();
    let in_progress = plan
        .iter()
        .filter(|m| m.status == MilestoneStatus::InProgress)
        .count();
    let overall = if plan.is_empty() {
        0.0
    } else {
        completed as f64 / plan.len() as f64 * 100.0
    };
    PlanProgress {
        completed,
        in_progress,
        total: plan.len(),
        overall,
    }
}

fn classify_area(area: &str) -> (MilestoneCategory, Priority) {
    let area = area.to_lowercase();
    if area.contains("certification") || area.contains("certificate") {
        (MilestoneCategory::Certification, Priority::High)
    } else if area.contains("project") || area.contains("portfolio") {
        (MilestoneCategory::Project, Priority::High)
    } else if area.contains("role") || area.contains("position") {
        (MilestoneCategory::Role, Priority::High)
    } else {
        (MilestoneCategory::Skill, Priority::Medium)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Milestones derived from a CV: one per leading improvement area, then
/// training for the top skills not already covered by those titles.
pub fn suggest_milestones(analysis: &CvAnalysis, today: NaiveDate) -> Vec<Milestone> {
    let mut suggestions: Vec<Milestone> = analysis
        .area_titles()
        .take(MAX_AREA_SUGGESTIONS)
        .enumerate()
        .map(|(i, area)| {
            let (category, priority) = classify_area(area);
            let lead: Vec<&str> = area.split_whitespace().take(3).collect();
            Milestone {
                id: format!("suggested-{i}"),
                title: format!("Master {}", lead.join(" ")),
                description: format!(
                    "Focus on developing {} to advance your career",
                    area.to_lowercase()
                ),
                target_date: today + Duration::days(SUGGESTION_SPACING_DAYS * (i as i64 + 1)),
                status: MilestoneStatus::NotStarted,
                category,
                priority,
            }
        })
        .collect();

    let skills: Vec<String> = analysis
        .skills
        .iter()
        .take(MAX_SKILL_SUGGESTIONS)
        .map(|s| s.trim().to_lowercase())
        .collect();
    for (i, skill) in skills.iter().enumerate() {
        if skill.is_empty() || suggestions.iter().any(|s| s.title.to_lowercase().contains(skill)) {
            continue;
        }
        suggestions.push(Milestone {
            id: format!("skill-{i}"),
            title: format!("Advanced {} Training", capitalize(skill)),
            description: format!("Deepen your expertise in {skill}"),
            target_date: today + Duration::days(SUGGESTION_SPACING_DAYS * (i as i64 + 2)),
            status: MilestoneStatus::NotStarted,
            category: MilestoneCategory::Skill,
            priority: Priority::Medium,
        });
    }

    suggestions
}

/// The plan a new user starts with.
pub fn default_milestones() -> Vec<Milestone> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Milestone {
            id: "1".to_string(),
            title: "Complete Advanced React Course".to_string(),
            description: "Master advanced React patterns and state management".to_string(),
            target_date: date(2024, 12, 31),
            status: MilestoneStatus::NotStarted,
            category: MilestoneCategory::Skill,
            priority: Priority::High,
        },
        Milestone {
            id: "2".to_string(),
            title: "AWS Cloud Practitioner Certification".to_string(),
            description: "Get certified in AWS fundamentals".to_string(),
            target_date: date(2025, 2, 28),
            status: MilestoneStatus::NotStarted,
            category: MilestoneCategory::Certification,
            priority: Priority::Medium,
        },
        Milestone {
            id: "3".to_string(),
            title: "Build Portfolio Project".to_string(),
            description: "Create a full-stack application showcasing skills".to_string(),
            target_date: date(2025, 1, 15),
            status: MilestoneStatus::InProgress,
            category: MilestoneCategory::Project,
            priority: Priority::High,
        },
    ]
}
