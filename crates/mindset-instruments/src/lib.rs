//! mindset-instruments
//!
//! Questionnaire definitions. Pure data plus arithmetic: the statement
//! catalog, polarity-aware scoring, tier interpretation, and the radar
//! data handed to chart renderers.

pub mod error;
pub mod instruments;
pub mod scoring;

use mindset_core::models::answer::AnswerSet;
use mindset_core::models::report::{AssessmentReport, DimensionResult};
use uuid::Uuid;

use error::InstrumentError;
use scoring::{Dimension, DimensionScore, Statement};

/// Trait implemented by each self-assessment questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "mindset").
    fn id(&self) -> &str;

    /// Human-readable title shown above the questionnaire.
    fn name(&self) -> &str;

    /// The dimensions this instrument measures, in display order.
    fn dimensions(&self) -> &[Dimension];

    fn statement_count(&self) -> usize {
        self.dimensions().iter().map(|d| d.statements.len()).sum()
    }

    fn statements(&self) -> Vec<&Statement> {
        self.dimensions()
            .iter()
            .flat_map(|d| &d.statements)
            .collect()
    }

    /// Look up a statement, failing for ids outside the catalog.
    fn statement(&self, statement_id: &str) -> Result<&Statement, InstrumentError> {
        self.dimensions()
            .iter()
            .flat_map(|d| &d.statements)
            .find(|s| s.id == statement_id)
            .ok_or_else(|| InstrumentError::UnknownStatement {
                instrument_id: self.id().to_string(),
                statement_id: statement_id.to_string(),
            })
    }

    fn compute_scores(&self, answers: &AnswerSet) -> Vec<DimensionScore> {
        scoring::compute_scores(self.dimensions(), answers)
    }

    fn completion_rate(&self, answers: &AnswerSet) -> f64 {
        scoring::completion_rate(self.dimensions(), answers)
    }

    /// Pair each dimension score with its tier and fixed sentence.
    fn interpret(&self, scores: &[DimensionScore]) -> Vec<DimensionResult> {
        self.dimensions()
            .iter()
            .zip(scores)
            .map(|(dimension, s)| {
                let tier = dimension.interpret(s.score);
                DimensionResult {
                    dimension_id: s.dimension_id.clone(),
                    label: s.label.clone(),
                    score: s.score,
                    max_score: s.max_score,
                    tier,
                    sentence: dimension.interpretation.sentence(tier).to_string(),
                }
            })
            .collect()
    }

    /// Score, interpret, and chart one answer set.
    fn report(&self, session_id: Uuid, answers: &AnswerSet) -> AssessmentReport {
        let scores = self.compute_scores(answers);
        let answered = self
            .statements()
            .iter()
            .filter(|s| answers.contains(&s.id))
            .count();
        tracing::debug!(instrument = self.id(), answered, "report computed");
        AssessmentReport {
            session_id,
            instrument_id: self.id().to_string(),
            instrument_name: self.name().to_string(),
            answered,
            total: self.statement_count(),
            completion_rate: self.completion_rate(answers),
            dimensions: self.interpret(&scores),
            radar: scoring::build_radar_data(&scores),
            generated_at: jiff::Timestamp::now(),
        }
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::mindset::MindsetAssessment)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
