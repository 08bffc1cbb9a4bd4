use crate::types::scoring::{clamp_score, Score, MIN_SCORE};

const FIVE_POINT_CEILING: f64 = 5.0;
const TEN_POINT_CEILING: f64 = 10.0;
const PERCENT_CEILING: f64 = 100.0;
const COUNT_CAP: f64 = 100_000.0;

/// Maps a raw metric onto 0-100, inferring the scale from magnitude alone:
/// a 5-point rating, a 10-point scale, a percentage, or an unbounded count
/// compressed logarithmically and capped at 100k.
pub fn normalize(value: f64) -> Score {
    if value.is_nan() || value <= 0.0 {
        return MIN_SCORE;
    }

    let normalized = if value <= FIVE_POINT_CEILING {
        value / FIVE_POINT_CEILING * 100.0
    } else if value <= TEN_POINT_CEILING {
        value * 10.0
    } else if value <= PERCENT_CEILING {
        value
    } else {
        let capped = value.min(COUNT_CAP);
        (capped + 1.0).log10() / (COUNT_CAP + 1.0).log10() * 100.0
    };

    clamp_score(normalized)
}
