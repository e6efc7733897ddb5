use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use utoipa::ToSchema;

/// One of the three hypothesized sources of mental strain.
///
/// The declaration order is significant: exact score ties resolve in this
/// order (decision, then cognitive, then emotional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoadCategory {
    Decision,
    Cognitive,
    Emotional,
}

impl LoadCategory {
    pub const ALL: [LoadCategory; 3] = [
        LoadCategory::Decision,
        LoadCategory::Cognitive,
        LoadCategory::Emotional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadCategory::Decision => "decision",
            LoadCategory::Cognitive => "cognitive",
            LoadCategory::Emotional => "emotional",
        }
    }
}

impl fmt::Display for LoadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse intensity bucket, ordered low < moderate < high
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-category scores before classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadScores {
    pub decision: f64,
    pub cognitive: f64,
    pub emotional: f64,
}

impl LoadScores {
    pub fn get(&self, category: LoadCategory) -> f64 {
        match category {
            LoadCategory::Decision => self.decision,
            LoadCategory::Cognitive => self.cognitive,
            LoadCategory::Emotional => self.emotional,
        }
    }

    /// Categories ordered by descending score; exact ties keep declaration order
    pub fn ranked(&self) -> [(LoadCategory, f64); 3] {
        let mut ranked = LoadCategory::ALL.map(|c| (c, self.get(c)));
        // slice::sort_by is stable; -0.0 and 0.0 must compare equal here
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

/// Outcome of scoring one answer set. Travels between pages as flat JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    pub dominant: LoadCategory,
    pub secondary: LoadCategory,
    pub severity: Severity,
    /// Little downtime between obligations (q7 >= 2)
    pub recovery: bool,
    /// Focus trouble read as a discipline problem (q10 >= 2)
    pub reframe: bool,
}

/// What the breakdown page reads from its `data` parameter.
///
/// Only `dominant` is required. A missing or unrecognised `secondary` reads
/// as `None` and selects the dominant category's default variant. Any other
/// fields of a [`ClassificationResult`] are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BreakdownData {
    pub dominant: LoadCategory,
    #[serde(default, deserialize_with = "lenient_category")]
    pub secondary: Option<LoadCategory>,
}

impl From<&ClassificationResult> for BreakdownData {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            dominant: result.dominant,
            secondary: Some(result.secondary),
        }
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<LoadCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(LoadCategory::deserialize(value).ok())
}
