use mindset_core::error::CoreError;
use mindset_core::models::answer::{AnswerEvent, AnswerSet, Rating};
use mindset_core::models::report::AssessmentReport;
use mindset_core::models::view::ViewMode;
use mindset_instruments::error::InstrumentError;
use mindset_instruments::{Instrument, get_instrument};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("results are shown; return to the questionnaire before changing answers")]
    ResultsShown,
}

/// One respondent working through one instrument.
///
/// Owns the answer set and the view flag. Neither view transition touches
/// the answers, so toggling between the questionnaire and the results
/// keeps every rating.
pub struct Session {
    id: Uuid,
    started_at: jiff::Timestamp,
    instrument: Box<dyn Instrument>,
    answers: AnswerSet,
    view: ViewMode,
}

impl Session {
    pub fn new(instrument: Box<dyn Instrument>) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            instrument,
            answers: AnswerSet::new(),
            view: ViewMode::Questionnaire,
        };
        tracing::info!(session_id = %session.id, instrument = session.instrument.id(), "session started");
        session
    }

    pub fn for_instrument(instrument_id: &str) -> Result<Self, SessionError> {
        Ok(Self::new(get_instrument(instrument_id)?))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Record a rating for a catalog statement. Only accepted while the
    /// questionnaire is showing.
    pub fn record(&mut self, statement_id: &str, value: i64) -> Result<Option<Rating>, SessionError> {
        if self.view == ViewMode::Results {
            return Err(SessionError::ResultsShown);
        }
        self.instrument.statement(statement_id)?;
        Ok(self.answers.record(statement_id, value)?)
    }

    /// Record a batch of events in order, stopping at the first rejected one.
    pub fn record_events(&mut self, events: &[AnswerEvent]) -> Result<(), SessionError> {
        for event in events {
            self.record(&event.statement_id, event.value)?;
        }
        Ok(())
    }

    pub fn completion_rate(&self) -> f64 {
        self.instrument.completion_rate(&self.answers)
    }

    /// Score what has been answered so far. Does not change the view.
    pub fn report(&self) -> AssessmentReport {
        self.instrument.report(self.id, &self.answers)
    }

    /// Switch to the results view. No completeness check: unanswered
    /// statements are scored as 0.
    pub fn show_results(&mut self) -> AssessmentReport {
        if self.view != ViewMode::Results {
            self.view = ViewMode::Results;
            tracing::info!(
                session_id = %self.id,
                answered = self.answers.len(),
                total = self.instrument.statement_count(),
                "results shown"
            );
        }
        self.report()
    }

    pub fn return_to_questionnaire(&mut self) {
        if self.view != ViewMode::Questionnaire {
            self.view = ViewMode::Questionnaire;
            tracing::info!(session_id = %self.id, "returned to questionnaire");
        }
    }
}
