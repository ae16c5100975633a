use serde::Serialize;

use crate::catalog::MarketTrend;
use crate::models::CvAnalysis;
use crate::recommendations::tokens::SkillSet;

/// Demand bonus for a trend skill the CV lists verbatim.
const EXACT_SKILL_BOOST: u32 = 5;
const TOP_SKILL_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TrendInsights {
    /// True when the trends were narrowed to the CV's skills.
    pub personalized: bool,
    pub trends: Vec<MarketTrend>,
    pub top_skills: Vec<MarketTrend>,
}

/// Trends relevant to the CV, most in-demand first. Falls back to the full
/// table when there is no analysis or nothing in it overlaps.
pub fn personalized_trends(analysis: Option<&CvAnalysis>, table: &[MarketTrend]) -> (Vec<MarketTrend>, bool) {
    let Some(analysis) = analysis else {
        return (table.to_vec(), false);
    };
    let cv_skills = SkillSet::new(&analysis.skills);

    let mut relevant: Vec<MarketTrend> = table
        .iter()
        .filter(|t| cv_skills.matches_str(&t.skill))
        .map(|t| {
            let mut trend = t.clone();
            if cv_skills.contains_phrase(&t.skill) {
                trend.demand += EXACT_SKILL_BOOST;
            }
            trend
        })
        .collect();

    if relevant.is_empty() {
        return (table.to_vec(), false);
    }
    relevant.sort_by(|a, b| b.demand.cmp(&a.demand));
    (relevant, true)
}

/// Builds the insights view: personalised trends narrowed by the search text,
/// plus the top skills by demand (unaffected by search).
pub fn trend_insights(analysis: Option<&CvAnalysis>, table: &[MarketTrend], search: &str) -> TrendInsights {
    let (trends, personalized) = personalized_trends(analysis, table);

    let mut top_skills = trends.clone();
    top_skills.sort_by(|a, b| b.demand.cmp(&a.demand));
    top_skills.truncate(TOP_SKILL_COUNT);

    let needle = search.trim().to_lowercase();
    let trends = trends
        .into_iter()
        .filter(|t| t.skill.to_lowercase().contains(&needle))
        .collect();

    TrendInsights {
        personalized,
        trends,
        top_skills,
    }
}
