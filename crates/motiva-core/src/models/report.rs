use jiff::civil::Date;
use serde::Serialize;

use crate::scoring::DriverScore;

/// Read-only projection of one assessment result: participant metadata plus
/// the full ranking. Built fresh whenever results are displayed; never
/// persisted beyond the current view or export.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub participant: String,
    pub date: Date,
    pub scores: Vec<DriverScore>,
}

impl Report {
    pub fn new(participant: impl Into<String>, date: Date, scores: Vec<DriverScore>) -> Self {
        Self {
            participant: participant.into(),
            date,
            scores,
        }
    }

    /// The top-ranked driver, if the ranking is non-empty.
    pub fn primary(&self) -> Option<&DriverScore> {
        self.scores.first()
    }

    /// The second-ranked driver.
    pub fn secondary(&self) -> Option<&DriverScore> {
        self.scores.get(1)
    }

    /// The assessment date formatted for display, e.g. "August 24, 2026".
    pub fn date_human(&self) -> String {
        self.date.strftime("%B %-d, %Y").to_string()
    }
}
