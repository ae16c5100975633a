//! Interview prep: question bank, filtering, saved/completed toggles and
//! practice stats. The service keeps no per-user question state; clients send
//! their current list and get the updated one back.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub mod handlers;

/// Practice sessions draw at most this many questions.
pub const PRACTICE_SET_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Case,
    Hr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub category: QuestionCategory,
    /// `Beginner`, `Intermediate` or `Advanced`.
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub time_estimate: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub sample_answer: String,
}

/// Which boolean a toggle request flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionFlag {
    Saved,
    Completed,
}

fn default_all() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionFilter {
    pub category: QuestionCategory,
    #[serde(default)]
    pub search: String,
    /// `all` or a difficulty name, compared case-insensitively.
    #[serde(default = "default_all")]
    pub difficulty: String,
    /// `all` or a fragment of the time estimate, e.g. `15`.
    #[serde(default = "default_all")]
    pub time: String,
}

impl Default for QuestionFilter {
    fn default() -> Self {
        Self {
            category: QuestionCategory::Technical,
            search: String::new(),
            difficulty: default_all(),
            time: default_all(),
        }
    }
}

impl QuestionFilter {
    pub fn matches(&self, q: &Question) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = q.title.to_lowercase().contains(&needle)
            || q.tags.iter().any(|t| t.to_lowercase().contains(&needle));
        let matches_difficulty =
            self.difficulty == "all" || q.difficulty.eq_ignore_ascii_case(&self.difficulty);
        let matches_time = self.time == "all" || q.time_estimate.contains(&self.time);

        q.category == self.category && matches_search && matches_difficulty && matches_time
    }
}

pub fn filter_questions<'a>(questions: &'a [Question], filter: &QuestionFilter) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q)).collect()
}

/// Flips one flag on the question with `id`.
pub fn toggle_flag(questions: &mut [Question], id: &str, flag: QuestionFlag) -> Result<(), AppError> {
    let question = questions
        .iter_mut()
        .find(|q| q.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))?;
    match flag {
        QuestionFlag::Saved => question.is_saved = !question.is_saved,
        QuestionFlag::Completed => question.is_completed = !question.is_completed,
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct NextMilestone {
    pub target: u32,
    pub current: u32,
    pub reward: String,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeStats {
    pub weekly_questions: u32,
    pub current_streak: u32,
    pub completed: usize,
    pub saved: usize,
    pub practice_set_size: usize,
    pub next_milestone: NextMilestone,
}

pub fn practice_stats(questions: &[Question], filtered: usize) -> PracticeStats {
    let (target, current) = (100, 73);
    PracticeStats {
        weekly_questions: 25,
        current_streak: 7,
        completed: questions.iter().filter(|q| q.is_completed).count(),
        saved: questions.iter().filter(|q| q.is_saved).count(),
        practice_set_size: filtered.min(PRACTICE_SET_SIZE),
        next_milestone: NextMilestone {
            target,
            current,
            reward: "Interview Master badge".to_string(),
            percent: ((current as f64 / target as f64) * 100.0).round() as u32,
        },
    }
}

pub fn seed_questions() -> Vec<Question> {
    #[allow(clippy::too_many_arguments)]
    fn q(
        id: &str,
        title: &str,
        category: QuestionCategory,
        difficulty: &str,
        tags: &[&str],
        time_estimate: &str,
        done: bool,
        hints: &[&str],
        sample_answer: &str,
    ) -> Question {
        Question {
            id: id.to_string(),
            title: title.to_string(),
            category,
            difficulty: difficulty.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            time_estimate: time_estimate.to_string(),
            is_completed: done,
            is_saved: done,
            hints: hints.iter().map(|s| s.to_string()).collect(),
            sample_answer: sample_answer.to_string(),
        }
    }

    vec![
        q(
            "1",
            "Explain Big-O notation for your solution",
            QuestionCategory::Technical,
            "Intermediate",
            &["Algorithms", "Complexity"],
            "15 min",
            false,
            &[
                "Start with time complexity",
                "Consider space complexity",
                "Give examples with different inputs",
            ],
            "Big-O notation describes the upper bound of algorithm performance. For example, O(n) means linear time complexity where execution time grows proportionally with input size.",
        ),
        q(
            "2",
            "Tell me about a time you handled conflicting priorities",
            QuestionCategory::Behavioral,
            "Beginner",
            &["Leadership", "Time Management"],
            "10 min",
            true,
            &[
                "Use STAR method",
                "Be specific about the situation",
                "Focus on your actions and results",
            ],
            "Use the STAR method: Situation (context), Task (what needed to be done), Action (what you did), Result (outcome). Be specific and quantify results when possible.",
        ),
        q(
            "3",
            "Estimate daily ride demand for a new city",
            QuestionCategory::Case,
            "Advanced",
            &["Estimation", "Market Analysis"],
            "30 min",
            false,
            &[
                "Break down by population segments",
                "Consider usage patterns",
                "Factor in competition and market penetration",
            ],
            "Start with population size, segment by demographics, estimate adoption rates, consider daily usage patterns, and factor in seasonal variations.",
        ),
        q(
            "4",
            "Why this role at our company?",
            QuestionCategory::Hr,
            "Beginner",
            &["Motivation", "Company Research"],
            "5 min",
            false,
            &[
                "Research the company values",
                "Connect your goals with role requirements",
                "Be genuine and specific",
            ],
            "Connect your career goals with the specific role and company mission. Show you've researched the company and explain how you can contribute to their success.",
        ),
    ]
}
