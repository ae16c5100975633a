use serde::{Deserialize, Serialize};

use crate::models::coerce::{lenient_list, lenient_string, lenient_strings, lenient_text, lenient_years};

/// A strength as reported by the analyzer. Older clients stored plain strings,
/// newer analyzer versions return structured entries; both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Strength {
    Text(String),
    Detailed(StrengthDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

/// An improvement area, in either of the two shapes the analyzer has produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImprovementArea {
    Text(String),
    Detailed(AreaDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Untitled entries are headed by their description.
fn heading<'a>(title: &'a str, description: &'a str) -> &'a str {
    if title.trim().is_empty() {
        description
    } else {
        title
    }
}

impl Strength {
    /// The text used for matching and display headings.
    pub fn title(&self) -> &str {
        match self {
            Strength::Text(s) => s,
            Strength::Detailed(d) => heading(&d.title, &d.description),
        }
    }
}

impl ImprovementArea {
    pub fn title(&self) -> &str {
        match self {
            ImprovementArea::Text(s) => s,
            ImprovementArea::Detailed(d) => heading(&d.title, &d.description),
        }
    }
}

impl From<&str> for ImprovementArea {
    fn from(s: &str) -> Self {
        ImprovementArea::Text(s.to_string())
    }
}

impl From<&str> for Strength {
    fn from(s: &str) -> Self {
        Strength::Text(s.to_string())
    }
}

/// Structured result of analysing one uploaded CV.
/// Overwrites any previous analysis for the same user. Mistyped fields read as
/// absent and unreadable list entries are dropped, never the whole analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub strengths: Vec<Strength>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub areas_for_improvement: Vec<ImprovementArea>,
    #[serde(default, deserialize_with = "lenient_years", skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl CvAnalysis {
    pub fn area_titles(&self) -> impl Iterator<Item = &str> {
        self.areas_for_improvement.iter().map(ImprovementArea::title)
    }

    pub fn strength_titles(&self) -> impl Iterator<Item = &str> {
        self.strengths.iter().map(Strength::title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_string_shapes() {
        let json = r#"{
            "skills": ["React", "CSS"],
            "strengths": ["Frontend"],
            "areas_for_improvement": ["Testing"]
        }"#;
        let analysis: CvAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.strengths[0], Strength::Text("Frontend".into()));
        assert_eq!(analysis.area_titles().collect::<Vec<_>>(), vec!["Testing"]);
        assert!(analysis.experience_years.is_none());
    }

    #[test]
    fn test_accepts_structured_shapes() {
        let json = r#"{
            "skills": ["Python"],
            "strengths": [{"title": "Backend depth", "description": "Django APIs", "impact": "High"}],
            "areas_for_improvement": [{"title": "System Design", "description": "No evidence", "priority": "high"}],
            "experience_years": 4,
            "current_role": "Developer"
        }"#;
        let analysis: CvAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.strength_titles().next(), Some("Backend depth"));
        match &analysis.areas_for_improvement[0] {
            ImprovementArea::Detailed(d) => assert_eq!(d.priority.as_deref(), Some("high")),
            other => panic!("expected detailed area, got {other:?}"),
        }
        assert_eq!(analysis.experience_years, Some(4));
    }

    #[test]
    fn test_mixed_shapes_in_one_list() {
        let json = r#"{"areas_for_improvement": ["Docker", {"title": "Kubernetes"}]}"#;
        let analysis: CvAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(
            analysis.area_titles().collect::<Vec<_>>(),
            vec!["Docker", "Kubernetes"]
        );
        assert!(analysis.skills.is_empty());
    }

    #[test]
    fn test_untitled_area_is_kept_and_headed_by_description() {
        let json = r#"{"areas_for_improvement": [{"description": "Kubernetes depth"}, "Testing"]}"#;
        let analysis: CvAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(
            analysis.area_titles().collect::<Vec<_>>(),
            vec!["Kubernetes depth", "Testing"]
        );
    }

    #[test]
    fn test_mistyped_fields_read_as_absent() {
        let json = r#"{
            "skills": ["Go", 7, null],
            "strengths": [42, {"title": "APIs", "impact": 3}],
            "experience_years": 3.5,
            "current_role": ["Engineer"]
        }"#;
        let analysis: CvAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.skills, vec!["Go", "7"]);
        assert_eq!(analysis.strength_titles().collect::<Vec<_>>(), vec!["APIs"]);
        assert_eq!(analysis.experience_years, Some(4));
        assert!(analysis.current_role.is_none());

        let analysis: CvAnalysis =
            serde_json::from_str(r#"{"experience_years": "6+ years"}"#).unwrap();
        assert_eq!(analysis.experience_years, Some(6));
    }

    #[test]
    fn test_round_trip_preserves_shape() {
        let analysis = CvAnalysis {
            skills: vec!["rust".into()],
            strengths: vec!["Systems".into()],
            areas_for_improvement: vec![ImprovementArea::Detailed(AreaDetail {
                title: "Cloud".into(),
                description: String::new(),
                current_state: None,
                recommendation: None,
                priority: None,
            })],
            ..Default::default()
        };
        let json = serde_json::to_string(&analysis).unwrap();
        let back: CvAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
