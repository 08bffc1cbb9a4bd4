use crate::types::report::RadarChartRow;
use crate::types::scoring::{Score, TechnologyScore};

/// Second series emitted when only one technology is compared; two-series
/// charts need it to render at all.
pub const SINGLE_SERIES_PLACEHOLDER: Score = 0.0;

/// One row per criterion of the first technology, one slot per technology in
/// input order. A technology without a score for that criterion gets 0.
pub fn build_radar(scores: &[TechnologyScore]) -> Vec<RadarChartRow> {
    let Some(first) = scores.first() else {
        return Vec::new();
    };

    first
        .criteria_scores
        .iter()
        .map(|entry| {
            let mut slots: Vec<Score> = scores
                .iter()
                .map(|score| score.criterion_score(&entry.criterion).unwrap_or(0.0))
                .collect();
            if slots.len() == 1 {
                slots.push(SINGLE_SERIES_PLACEHOLDER);
            }
            RadarChartRow::new(entry.criterion.clone(), slots)
        })
        .collect()
}
