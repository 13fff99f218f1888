use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw preference submission, one per user form post
///
/// Field names follow the camelCase JSON the preference form produces.
/// Everything except the email identifier is optional: the data comes from
/// free-form user input and a missing or garbled field must degrade, not
/// fail deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPreference {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub income: Option<String>,
    #[serde(rename = "currentCity", default)]
    pub current_city: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(rename = "foodPreferences", default)]
    pub food_preferences: Vec<String>,
    #[serde(rename = "targetCity", default)]
    pub target_city: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "transportType", default)]
    pub transport_type: Vec<String>,
    #[serde(rename = "accommodationType", default)]
    pub accommodation_type: Vec<String>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
    #[serde(default)]
    pub safety: Option<String>,
    #[serde(rename = "pagesVisited", default)]
    pub pages_visited: Vec<String>,
}

/// Lifestyle arrives as either a bare string or a list, depending on the
/// form version that produced the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lifestyle {
    One(String),
    Many(Vec<String>),
}

impl Lifestyle {
    /// Number of declared lifestyle items; an empty string declares none.
    pub fn item_count(&self) -> usize {
        match self {
            Lifestyle::One(s) => usize::from(!s.trim().is_empty()),
            Lifestyle::Many(items) => items.len(),
        }
    }
}

/// Scored lead, as consumed by the admin analysis and marketing views
///
/// Carries the original preference fields the dashboards display alongside
/// the rank and score; the engine must not discard information the caller
/// needs for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLead {
    pub rank: usize,
    pub email: String,
    pub phone: Option<String>,
    pub score: f64,
    pub score_percentage: String,
    pub current_city: Option<String>,
    pub target_city: Option<String>,
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub food_preferences: Vec<String>,
    pub transport_type: Vec<String>,
    pub accommodation_type: Vec<String>,
    pub lifestyle: Option<Lifestyle>,
    pub safety: Option<String>,
}

impl ScoredLead {
    pub fn from_record(record: RawPreference, score: f64, rank: usize) -> Self {
        Self {
            rank,
            email: record.email,
            phone: record.phone,
            score,
            score_percentage: format!("{:.1}%", score),
            current_city: record.current_city,
            target_city: record.target_city,
            budget: record.budget,
            duration: record.duration,
            food_preferences: record.food_preferences,
            transport_type: record.transport_type,
            accommodation_type: record.accommodation_type,
            lifestyle: record.lifestyle,
            safety: record.safety,
        }
    }
}

/// Factor names reported alongside every batch, in scoring order.
pub const FEATURES_USED: [&str; 9] = [
    "Income",
    "Budget",
    "Distance",
    "Duration",
    "Safety",
    "Start Date",
    "Food Preferences",
    "Transport Type",
    "Accommodation Type",
];

/// Per-batch computation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMetrics {
    pub total_customers: usize,
    pub features_used: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl BatchMetrics {
    pub fn new(total_customers: usize, timestamp: DateTime<Utc>) -> Self {
        Self {
            total_customers,
            features_used: FEATURES_USED.iter().map(|s| s.to_string()).collect(),
            timestamp,
        }
    }
}

/// Point caps for the seven scoring factors
#[derive(Debug, Clone, Copy)]
pub struct FactorWeights {
    pub income: f64,
    pub budget: f64,
    pub duration: f64,
    pub safety: f64,
    pub distance: f64,
    pub start_date: f64,
    pub preferences: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            income: 20.0,
            budget: 15.0,
            duration: 20.0,
            safety: 10.0,
            distance: 10.0,
            start_date: 10.0,
            preferences: 15.0,
        }
    }
}
