use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, RatingOutOfRange};

/// Labels for the five points of the agreement scale, lowest first.
pub const SCALE_LABELS: [&str; 5] = ["非常不符合", "比较不符合", "一般", "比较符合", "非常符合"];

/// A Likert rating on the 1–5 agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, RatingOutOfRange> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Agreement label shown next to the number, e.g. "一般" for 3.
    pub fn label(self) -> &'static str {
        SCALE_LABELS[usize::from(self.0 - Self::MIN)]
    }

    /// Every rating in ascending order.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ratings a respondent has given so far, keyed by statement id.
///
/// Sparse: a statement the respondent skipped has no entry at all. Scoring
/// reads a missing entry as 0 through [`AnswerSet::value_or_zero`], so an
/// unanswered negative-polarity statement contributes 6 once inverted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    ratings: BTreeMap<String, Rating>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the rating for `statement_id`.
    ///
    /// Values outside 1..=5 are rejected and leave the set untouched.
    /// Returns the rating that was replaced, if any.
    pub fn record(&mut self, statement_id: &str, value: i64) -> Result<Option<Rating>, CoreError> {
        let rating = Rating::new(value).map_err(|e| CoreError::InvalidRating {
            statement_id: statement_id.to_string(),
            value: e.0,
        })?;
        let previous = self.ratings.insert(statement_id.to_string(), rating);
        tracing::debug!(statement_id, rating = rating.value(), ?previous, "answer recorded");
        Ok(previous)
    }

    pub fn get(&self, statement_id: &str) -> Option<Rating> {
        self.ratings.get(statement_id).copied()
    }

    /// The value scoring sees: the rating, or 0 when unanswered.
    pub fn value_or_zero(&self, statement_id: &str) -> u32 {
        self.get(statement_id).map_or(0, |r| u32::from(r.value()))
    }

    pub fn contains(&self, statement_id: &str) -> bool {
        self.ratings.contains_key(statement_id)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// One rating event, as typed on the command line: `gm1=4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEvent {
    pub statement_id: String,
    pub value: i64,
}

impl FromStr for AnswerEvent {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, value) = s
            .split_once('=')
            .ok_or_else(|| CoreError::MalformedAnswer(s.to_string()))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(CoreError::MalformedAnswer(s.to_string()));
        }
        let value = value
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::MalformedAnswer(s.to_string()))?;
        Ok(Self {
            statement_id: id.to_string(),
            value,
        })
    }
}
