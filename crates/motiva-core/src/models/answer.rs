use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

use super::question::{question, question_bank, QUESTION_COUNT};

/// A single Likert rating in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// The mutable answer state of one assessment run: every question id maps
/// to a rating or to "unanswered".
///
/// Created all-unanswered; one entry is overwritten per response. Scoring
/// reads it without consuming it, so recomputing after every answer is safe.
#[derive(Debug, Clone)]
pub struct AnswerSet {
    answers: BTreeMap<&'static str, Option<Rating>>,
}

impl AnswerSet {
    /// A fresh set with every question in the bank unanswered.
    pub fn new() -> Self {
        let answers = question_bank().iter().map(|q| (q.id, None)).collect();
        Self { answers }
    }

    /// Record (or overwrite) the rating for one question.
    pub fn record(&mut self, question_id: &str, rating: Rating) -> Result<(), CoreError> {
        let q = question(question_id)
            .ok_or_else(|| CoreError::UnknownQuestion(question_id.to_string()))?;
        self.answers.insert(q.id, Some(rating));
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<Rating> {
        self.answers.get(question_id).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|v| v.is_some()).count()
    }

    /// Percent of questions answered, rounded to the nearest integer.
    pub fn progress_percent(&self) -> u8 {
        let pct = self.answered_count() as f64 / QUESTION_COUNT as f64 * 100.0;
        pct.round() as u8
    }

    /// True iff every question has a rating.
    pub fn is_complete(&self) -> bool {
        self.answers.values().all(|v| v.is_some())
    }

    /// Reset every entry back to unanswered.
    pub fn clear(&mut self) {
        for v in self.answers.values_mut() {
            *v = None;
        }
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::new()
    }
}
