//! Driver scoring and ranking.
//!
//! Pure functions over an [`AnswerSet`], safe to recompute after every
//! answer change.

use serde::Serialize;

use crate::models::answer::AnswerSet;
use crate::models::driver::Driver;
use crate::models::question::question_bank;

/// One driver's derived score: the mean of its answered ratings and that
/// mean rescaled from [1, 5] to [0, 100].
#[derive(Debug, Clone, Serialize)]
pub struct DriverScore {
    pub driver: Driver,
    pub label: &'static str,
    pub mean: f64,
    pub scaled: u8,
}

/// Compute all six driver scores and rank them.
///
/// Each driver gets `mean = sum/count` over its answered questions (0 when
/// none are answered) and `scaled = round((mean - 1) / 4 * 100)` clamped to
/// [0, 100]. The result is sorted descending by scaled value; the sort is
/// stable, so ties keep [`Driver::ALL`] order. The first two entries are the
/// primary and secondary drivers.
pub fn compute_ranking(answers: &AnswerSet) -> Vec<DriverScore> {
    let mut sums = [0u32; Driver::ALL.len()];
    let mut counts = [0u32; Driver::ALL.len()];

    for q in question_bank() {
        if let Some(rating) = answers.get(q.id) {
            let i = q.driver as usize;
            sums[i] += u32::from(rating.value());
            counts[i] += 1;
        }
    }

    let mut scores: Vec<DriverScore> = Driver::ALL
        .iter()
        .map(|&driver| {
            let i = driver as usize;
            let (mean, scaled) = if counts[i] > 0 {
                let mean = f64::from(sums[i]) / f64::from(counts[i]);
                (mean, scale(mean))
            } else {
                // No answered questions in this category: score floor, not
                // a division by zero.
                (0.0, 0)
            };
            DriverScore {
                driver,
                label: driver.label(),
                mean,
                scaled,
            }
        })
        .collect();

    scores.sort_by(|a, b| b.scaled.cmp(&a.scaled));
    scores
}

fn scale(mean: f64) -> u8 {
    let pct = (mean - 1.0) / 4.0 * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}
