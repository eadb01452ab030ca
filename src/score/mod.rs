//! Golf scoring arithmetic: per-hole labels, score differentials, Equitable
//! Stroke Control, the handicap index estimate and multi-round aggregates.
//!
//! Everything here is synchronous and free of shared state.

pub mod differential;
pub mod esc;
pub mod handicap;
pub mod round_stats;
pub mod score_aggregators;

pub use differential::*;
pub use esc::*;
pub use handicap::*;
pub use round_stats::*;
pub use score_aggregators::*;

use crate::model::{ScoreColor, ScoreDisplay, ScoreName};

#[must_use]
pub fn score_to_par(strokes: i32, par: i32) -> i32 {
    strokes - par
}

#[must_use]
pub fn score_name(strokes: i32, par: i32) -> ScoreName {
    ScoreName::from(score_to_par(strokes, par))
}

#[must_use]
pub fn score_color(strokes: i32, par: i32) -> ScoreColor {
    ScoreColor::from_i32(score_to_par(strokes, par))
}

#[must_use]
pub fn score_display(strokes: i32, par: i32) -> ScoreDisplay {
    ScoreDisplay {
        color: score_color(strokes, par),
        name: score_name(strokes, par),
        diff: score_to_par(strokes, par),
    }
}

/// `E` for even, otherwise the signed delta (`+5`, `-2`).
#[must_use]
pub fn format_score_to_par(score_to_par: i32) -> String {
    match score_to_par {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

/// One decimal place, halves rounded away from zero.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
