use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub skill: String,
    /// 0–100 demand index; personalised views may push it above 100.
    pub demand: u32,
    pub trend: TrendDirection,
    /// Year-over-year growth in percent.
    pub growth: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub role: String,
    pub min: u32,
    pub max: u32,
    pub average: u32,
    pub experience: String,
}

impl SalaryBand {
    /// Renders the band the way the insights page shows it, e.g. `$70K - $140K`.
    pub fn range_label(&self) -> String {
        format!("${}K - ${}K", self.min / 1000, self.max / 1000)
    }
}

/// The fixed job-title enumeration used for default course filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTitle {
    #[default]
    FrontendDeveloper,
    BackendDeveloper,
    MlEngineer,
    DevopsEngineer,
    DataScientist,
    FullstackDeveloper,
}

impl JobTitle {
    /// Course skills shown for this job when no CV has been analysed yet.
    pub fn default_skills(self) -> &'static [&'static str] {
        match self {
            JobTitle::FrontendDeveloper => &["react", "javascript", "frontend", "hooks"],
            JobTitle::BackendDeveloper => &["python", "algorithms", "docker", "aws"],
            JobTitle::MlEngineer => &["ml", "python", "algorithms"],
            JobTitle::DevopsEngineer => &["devops", "ci/cd", "docker", "aws"],
            JobTitle::DataScientist => &["python", "ml", "algorithms"],
            JobTitle::FullstackDeveloper => &["react", "javascript", "python", "docker"],
        }
    }
}

/// A role the job-market matcher scores a CV against.
#[derive(Debug, Clone, Serialize)]
pub struct JobProfile {
    pub title: &'static str,
    /// Requirement list used for the match percentage.
    pub match_skills: &'static [&'static str],
    /// Headline skills shown to the user.
    pub display_skills: &'static [&'static str],
    pub growth: u32,
    /// All groups must be satisfied; a group is satisfied by any CV skill matching any of its terms.
    #[serde(skip)]
    pub strong_signals: &'static [&'static [&'static str]],
    #[serde(skip)]
    pub strong_reason: &'static str,
    #[serde(skip)]
    pub weak_reason: &'static str,
}

pub fn market_trends() -> Vec<MarketTrend> {
    use TrendDirection::*;

    [
        ("React", 95, Up, 12),
        ("Python", 92, Up, 8),
        ("AWS", 88, Up, 15),
        ("Machine Learning", 85, Up, 20),
        ("Docker", 82, Up, 10),
        ("TypeScript", 90, Up, 18),
        ("Kubernetes", 78, Up, 25),
        ("GraphQL", 75, Stable, 5),
    ]
    .into_iter()
    .map(|(skill, demand, trend, growth)| MarketTrend {
        skill: skill.to_string(),
        demand,
        trend,
        growth,
    })
    .collect()
}

pub fn salary_bands() -> Vec<SalaryBand> {
    [
        ("Frontend Developer", 70_000, 140_000, 105_000, "2-5 years"),
        ("Backend Developer", 80_000, 150_000, 115_000, "2-5 years"),
        ("Full Stack Developer", 85_000, 160_000, 120_000, "3-6 years"),
        ("DevOps Engineer", 90_000, 170_000, 130_000, "3-7 years"),
        ("Data Scientist", 95_000, 180_000, 135_000, "2-5 years"),
        ("ML Engineer", 100_000, 200_000, 150_000, "3-7 years"),
    ]
    .into_iter()
    .map(|(role, min, max, average, experience)| SalaryBand {
        role: role.to_string(),
        min,
        max,
        average,
        experience: experience.to_string(),
    })
    .collect()
}

/// Job profiles; each title has a salary band with the same role name.
pub fn job_profiles() -> Vec<JobProfile> {
    vec![
        JobProfile {
            title: "Frontend Developer",
            match_skills: &["react", "javascript", "typescript", "css", "html"],
            display_skills: &["React", "JavaScript", "TypeScript", "CSS"],
            growth: 15,
            strong_signals: &[&["react", "frontend"]],
            strong_reason: "Strong match - Your React/frontend skills align perfectly",
            weak_reason: "Good potential - Frontend skills are in high demand",
        },
        JobProfile {
            title: "Backend Developer",
            match_skills: &["python", "node.js", "java", "sql", "api"],
            display_skills: &["Python", "Node.js", "SQL", "API Development"],
            growth: 12,
            strong_signals: &[&["python", "backend", "api"]],
            strong_reason: "Strong match - Your backend skills are highly valued",
            weak_reason: "Good potential - Backend development offers great opportunities",
        },
        JobProfile {
            title: "Full Stack Developer",
            match_skills: &["react", "node.js", "python", "javascript", "sql"],
            display_skills: &["React", "Node.js", "Python", "Full Stack"],
            growth: 18,
            strong_signals: &[&["react"], &["python", "node.js"]],
            strong_reason: "Excellent match - You have both frontend and backend skills",
            weak_reason: "Good potential - Full stack developers are in high demand",
        },
        JobProfile {
            title: "DevOps Engineer",
            match_skills: &["docker", "kubernetes", "aws", "ci/cd", "devops"],
            display_skills: &["Docker", "Kubernetes", "AWS", "CI/CD"],
            growth: 25,
            strong_signals: &[&["docker", "aws", "devops"]],
            strong_reason: "Strong match - Your DevOps skills are highly sought after",
            weak_reason: "Good potential - DevOps is one of the fastest-growing fields",
        },
        JobProfile {
            title: "Data Scientist",
            match_skills: &["python", "machine learning", "data", "analytics", "sql"],
            display_skills: &["Python", "Machine Learning", "Data Analysis", "SQL"],
            growth: 20,
            strong_signals: &[&["python"], &["data", "ml", "machine learning"]],
            strong_reason: "Strong match - Your data science skills are in high demand",
            weak_reason: "Good potential - Data science offers excellent career growth",
        },
        JobProfile {
            title: "ML Engineer",
            match_skills: &["machine learning", "python", "ai", "tensorflow", "pytorch"],
            display_skills: &["Machine Learning", "Python", "AI", "Deep Learning"],
            growth: 30,
            strong_signals: &[&["ml", "machine learning", "ai"]],
            strong_reason: "Excellent match - ML engineering is one of the hottest fields",
            weak_reason: "Good potential - ML engineers command top salaries",
        },
    ]
}
