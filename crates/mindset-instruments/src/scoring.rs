use mindset_core::models::answer::{AnswerSet, Rating, SCALE_LABELS};
use mindset_core::models::report::{RadarPoint, Tier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Negative-polarity ratings are inverted as `INVERSION_BASE - rating`.
pub const INVERSION_BASE: u32 = 6;

/// Share of the maximum (in percent) a score must reach for each tier.
pub const HIGH_THRESHOLD_PERCENT: u32 = 80;
pub const MID_THRESHOLD_PERCENT: u32 = 60;

/// A single Likert statement.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Statement {
    pub id: String,
    pub text: String,
    /// `true` when agreement counts toward the trait directly, `false` when
    /// the rating is inverted.
    pub positive: bool,
}

impl Statement {
    /// What this statement adds to its dimension total.
    ///
    /// An unanswered statement is read as 0, so a missing negative item
    /// contributes `6 - 0 = 6` while a missing positive item contributes 0.
    pub fn contribution(&self, answers: &AnswerSet) -> u32 {
        let rating = answers.value_or_zero(&self.id);
        if self.positive {
            rating
        } else {
            INVERSION_BASE - rating
        }
    }
}

/// The three fixed sentences for a dimension, one per tier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub high: String,
    pub mid: String,
    pub low: String,
}

impl Interpretation {
    pub fn sentence(&self, tier: Tier) -> &str {
        match tier {
            Tier::High => &self.high,
            Tier::Mid => &self.mid,
            Tier::Low => &self.low,
        }
    }
}

/// A measured trait: an ordered list of statements plus its interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimension {
    pub id: String,
    pub label: String,
    pub statements: Vec<Statement>,
    pub interpretation: Interpretation,
}

impl Dimension {
    pub fn max_score(&self) -> u32 {
        u32::from(Rating::MAX) * self.statements.len() as u32
    }

    pub fn positive_count(&self) -> usize {
        self.statements.iter().filter(|s| s.positive).count()
    }

    pub fn negative_count(&self) -> usize {
        self.statements.len() - self.positive_count()
    }

    /// Lowest score that lands in the high tier (80% of max, rounded up).
    pub fn high_threshold(&self) -> u32 {
        percent_of(self.max_score(), HIGH_THRESHOLD_PERCENT)
    }

    /// Lowest score that lands in the mid tier (60% of max, rounded up).
    pub fn mid_threshold(&self) -> u32 {
        percent_of(self.max_score(), MID_THRESHOLD_PERCENT)
    }

    pub fn score(&self, answers: &AnswerSet) -> u32 {
        self.statements.iter().map(|s| s.contribution(answers)).sum()
    }

    /// Total over every `u32`; scores above the nominal max stay high.
    pub fn interpret(&self, score: u32) -> Tier {
        if score >= self.high_threshold() {
            Tier::High
        } else if score >= self.mid_threshold() {
            Tier::Mid
        } else {
            Tier::Low
        }
    }
}

fn percent_of(value: u32, percent: u32) -> u32 {
    (value * percent).div_ceil(100)
}

/// A computed total for one dimension, carrying what renderers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScore {
    pub dimension_id: String,
    pub label: String,
    pub score: u32,
    pub max_score: u32,
}

/// Score every dimension, in catalog order. Never fails: an empty answer
/// set is a valid input.
pub fn compute_scores(dimensions: &[Dimension], answers: &AnswerSet) -> Vec<DimensionScore> {
    dimensions
        .iter()
        .map(|d| DimensionScore {
            dimension_id: d.id.clone(),
            label: d.label.clone(),
            score: d.score(answers),
            max_score: d.max_score(),
        })
        .collect()
}

/// Radar vertices in the same order as `scores`.
pub fn build_radar_data(scores: &[DimensionScore]) -> Vec<RadarPoint> {
    scores
        .iter()
        .map(|s| RadarPoint {
            dimension: s.label.clone(),
            score: s.score,
            full_mark: s.max_score,
        })
        .collect()
}

/// Percentage of catalog statements that have a rating.
pub fn completion_rate(dimensions: &[Dimension], answers: &AnswerSet) -> f64 {
    let total: usize = dimensions.iter().map(|d| d.statements.len()).sum();
    if total == 0 {
        return 0.0;
    }
    let answered = dimensions
        .iter()
        .flat_map(|d| &d.statements)
        .filter(|s| answers.contains(&s.id))
        .count();
    answered as f64 / total as f64 * 100.0
}

/// The scale legend: `1=非常不符合, 2=比较不符合, 3=一般, 4=比较符合, 5=非常符合`.
pub fn scale_legend() -> String {
    SCALE_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}={label}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}
