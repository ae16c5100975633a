use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::coerce::{flag, number, strings, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Case-insensitive parse; anything unrecognised yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(CourseLevel::Beginner),
            "intermediate" => Some(CourseLevel::Intermediate),
            "advanced" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

/// A catalog course. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub url: String,
    pub skills: Vec<String>,
    pub level: CourseLevel,
    pub duration: String,
    pub rating: f32,
    pub price: String,
    pub is_free: bool,
    pub description: String,
}

/// Permissive wire shape for courses recommended by the external analyzer.
/// Every field may be missing or mistyped; `into_course` fills in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCourse {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub provider: Option<Value>,
    pub url: Option<Value>,
    pub skills: Option<Value>,
    pub level: Option<Value>,
    pub duration: Option<Value>,
    pub rating: Option<Value>,
    pub price: Option<Value>,
    pub is_free: Option<Value>,
    pub description: Option<Value>,
}

const DEFAULT_DURATION: &str = "10h";
const DEFAULT_RATING: f32 = 4.5;
const FREE: &str = "Free";

fn field_text(value: &Option<Value>) -> Option<String> {
    value.as_ref().and_then(text)
}

/// `0` (or `"0"`) means free; other bare numbers are read as dollar prices.
fn price_label(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::Number(n) => Some(match n.as_f64() {
            Some(p) if p <= 0.0 => FREE.to_string(),
            _ => format!("${n}"),
        }),
        other => text(other).map(|p| {
            if p.trim() == "0" {
                FREE.to_string()
            } else {
                p
            }
        }),
    }
}

impl RawCourse {
    /// Reads one entry of an analyzer `recommendations` array; non-objects are skipped.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }

    pub fn into_course(self) -> Course {
        let id = match &self.id {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let rating = self
            .rating
            .as_ref()
            .and_then(number)
            .map(|r| r as f32)
            .unwrap_or(DEFAULT_RATING);

        let price = price_label(&self.price);
        let is_free = self
            .is_free
            .as_ref()
            .and_then(flag)
            .unwrap_or_else(|| price.as_deref().map_or(true, |p| p == FREE));

        Course {
            id,
            title: field_text(&self.title).unwrap_or_default(),
            provider: field_text(&self.provider).unwrap_or_default(),
            url: field_text(&self.url).unwrap_or_default(),
            skills: self
                .skills
                .as_ref()
                .map(|s| match s {
                    Value::Array(_) => strings(s),
                    _ => Vec::new(),
                })
                .unwrap_or_default(),
            level: field_text(&self.level)
                .as_deref()
                .and_then(CourseLevel::parse)
                .unwrap_or(CourseLevel::Intermediate),
            duration: field_text(&self.duration).unwrap_or_else(|| DEFAULT_DURATION.to_string()),
            rating,
            price: price.unwrap_or_else(|| FREE.to_string()),
            is_free,
            description: field_text(&self.description).unwrap_or_default(),
        }
    }
}
