use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Qualitative band for a dimension score. Ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Low,
    Mid,
    High,
}

/// One vertex of the radar chart. Field names match what the chart
/// renderer keys on (`dataKey="dimension"`, `dataKey="score"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RadarPoint {
    pub dimension: String,
    pub score: u32,
    pub full_mark: u32,
}

/// One row of the text summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionResult {
    pub dimension_id: String,
    pub label: String,
    pub score: u32,
    pub max_score: u32,
    pub tier: Tier,
    pub sentence: String,
}

/// Everything the results view shows for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub session_id: Uuid,
    pub instrument_id: String,
    pub instrument_name: String,
    pub answered: usize,
    pub total: usize,
    pub completion_rate: f64,
    pub dimensions: Vec<DimensionResult>,
    pub radar: Vec<RadarPoint>,
    pub generated_at: jiff::Timestamp,
}

/// Tooltip text for a chart value: `27` becomes `"27分"`.
pub fn format_points(value: u32) -> String {
    format!("{value}分")
}
