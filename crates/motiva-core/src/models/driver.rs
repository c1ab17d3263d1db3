use serde::{Deserialize, Serialize};

/// One of the six motivation drivers the assessment measures.
///
/// The declaration order is the canonical enumeration order: ranking ties
/// are broken by it, and per-driver accumulators index by `driver as usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    Certainty,
    Variety,
    Significance,
    Connection,
    Growth,
    Contribution,
}

impl Driver {
    /// All drivers in canonical order.
    pub const ALL: [Driver; 6] = [
        Driver::Certainty,
        Driver::Variety,
        Driver::Significance,
        Driver::Connection,
        Driver::Growth,
        Driver::Contribution,
    ];

    /// Display label with its short gloss, as shown in the questionnaire
    /// and the report.
    pub fn label(self) -> &'static str {
        match self {
            Driver::Certainty => "Certainty (stability & predictability)",
            Driver::Variety => "Variety (freedom & change)",
            Driver::Significance => "Significance (recognition & achievement)",
            Driver::Connection => "Connection (belonging & relationships)",
            Driver::Growth => "Growth (learning & challenge)",
            Driver::Contribution => "Contribution (meaning & impact)",
        }
    }
}
