use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStep {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub priority: String,
    pub deadline: NaiveDate,
    /// 0–100.
    pub progress: u32,
    #[serde(default)]
    pub milestones: Vec<GoalStep>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub estimated_hours: u32,
    pub completed_hours: u32,
}

impl Goal {
    /// Completed share of the estimated hours, rounded; 0 when nothing was estimated.
    pub fn hours_percent(&self) -> u32 {
        if self.estimated_hours == 0 {
            return 0;
        }
        (self.completed_hours as f64 / self.estimated_hours as f64 * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub average_progress: u32,
    pub completed_hours: u32,
}

/// `All` passes every goal; otherwise exact category match.
pub fn filter_goals<'a>(goals: &'a [Goal], category: &str) -> Vec<&'a Goal> {
    goals
        .iter()
        .filter(|g| category == ALL_CATEGORIES || g.category == category)
        .collect()
}

pub fn goal_stats(goals: &[Goal]) -> GoalStats {
    let average_progress = if goals.is_empty() {
        0
    } else {
        let sum: u32 = goals.iter().map(|g| g.progress).sum();
        (sum as f64 / goals.len() as f64).round() as u32
    };
    GoalStats {
        total: goals.len(),
        completed: goals.iter().filter(|g| g.progress == 100).count(),
        average_progress,
        completed_hours: goals.iter().map(|g| g.completed_hours).sum(),
    }
}

pub fn default_goals() -> Vec<Goal> {
    let step = |title: &str, completed| GoalStep {
        title: title.to_string(),
        completed,
    };
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        Goal {
            id: 1,
            title: "Become a Senior Software Engineer".to_string(),
            description: "Advance to senior level within 2 years with expertise in React, Node.js, and cloud technologies".to_string(),
            category: "Career Advancement".to_string(),
            priority: "High".to_string(),
            deadline: date(2025, 12, 31),
            progress: 65,
            milestones: vec![
                step("Complete React Advanced Course", true),
                step("Lead 2 major projects", true),
                step("Get AWS certification", false),
                step("Mentor junior developers", false),
            ],
            skills: strings(&["React", "Node.js", "AWS", "Leadership"]),
            estimated_hours: 200,
            completed_hours: 130,
        },
        Goal {
            id: 2,
            title: "Start a Tech Blog".to_string(),
            description: "Create and maintain a technical blog with 50+ articles about web development".to_string(),
            category: "Personal Branding".to_string(),
            priority: "Medium".to_string(),
            deadline: date(2024, 6, 30),
            progress: 40,
            milestones: vec![
                step("Set up blog platform", true),
                step("Write 20 articles", true),
                step("Reach 1000 subscribers", false),
                step("Monetize the blog", false),
            ],
            skills: strings(&["Writing", "SEO", "Marketing", "Content Creation"]),
            estimated_hours: 150,
            completed_hours: 60,
        },
        Goal {
            id: 3,
            title: "Learn Machine Learning".to_string(),
            description: "Master ML fundamentals and build 3 practical projects".to_string(),
            category: "Skill Development".to_string(),
            priority: "High".to_string(),
            deadline: date(2024, 9, 15),
            progress: 25,
            milestones: vec![
                step("Complete ML fundamentals course", false),
                step("Build recommendation system", false),
                step("Create image classifier", false),
                step("Deploy ML model to cloud", false),
            ],
            skills: strings(&["Python", "TensorFlow", "Data Science", "Statistics"]),
            estimated_hours: 300,
            completed_hours: 75,
        },
    ]
}
