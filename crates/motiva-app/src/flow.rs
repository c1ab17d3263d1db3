use thiserror::Error;

use motiva_core::error::CoreError;
use motiva_core::models::answer::{AnswerSet, Rating};

/// Where one assessment run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    InProgress,
    AwaitingAuthorization,
    ResultsReady,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("all questions must be answered before submitting")]
    Incomplete,

    #[error("an email address is required to submit")]
    MissingEmail,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// One assessment run: participant details, answer state, flow stage.
/// Whether results may be disclosed is the gate's decision, not the flow's;
/// the flow only tracks that the questionnaire earned a gate check.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    pub name: String,
    pub email: String,
    answers: AnswerSet,
    stage: Stage,
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            answers: AnswerSet::new(),
            stage: Stage::InProgress,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Record a rating. Out-of-range values and unknown question ids are
    /// rejected with no state change.
    pub fn record_answer(&mut self, question_id: &str, value: u8) -> Result<(), FlowError> {
        let rating = Rating::new(value)?;
        self.answers.record(question_id, rating)?;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// Submit the finished questionnaire. Requires every answer plus an
    /// email address; moves the run to `AwaitingAuthorization`.
    pub fn submit(&mut self) -> Result<(), FlowError> {
        if !self.answers.is_complete() {
            return Err(FlowError::Incomplete);
        }
        if self.email.trim().is_empty() {
            return Err(FlowError::MissingEmail);
        }
        self.stage = Stage::AwaitingAuthorization;
        Ok(())
    }

    /// The gate authorized disclosure.
    pub fn mark_authorized(&mut self) {
        self.stage = Stage::ResultsReady;
    }

    /// Start over: answers cleared, name and email kept.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.stage = Stage::InProgress;
    }
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}
