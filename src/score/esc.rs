use serde::Serialize;
use tracing::debug;

use crate::error::ScoreError;
use crate::model::{HoleResult, HoleScore};

/// Equitable Stroke Control band, chosen from the player's handicap index.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EscBand {
    /// Index 9.0 or better: par + 2 on every hole.
    DoubleBogey,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl EscBand {
    /// # Errors
    ///
    /// Will return `Err` if the index is NaN or infinite
    pub fn from_handicap_index(handicap_index: f64) -> Result<Self, ScoreError> {
        if !handicap_index.is_finite() {
            return Err(ScoreError::invalid("handicap index must be a finite number"));
        }
        Ok(if handicap_index <= 9.0 {
            EscBand::DoubleBogey
        } else if handicap_index < 20.0 {
            EscBand::Seven
        } else if handicap_index < 30.0 {
            EscBand::Eight
        } else if handicap_index < 40.0 {
            EscBand::Nine
        } else {
            EscBand::Ten
        })
    }

    #[must_use]
    pub fn cap_for_par(self, par: i32) -> i32 {
        match self {
            EscBand::DoubleBogey => par.saturating_add(2),
            EscBand::Seven => 7,
            EscBand::Eight => 8,
            EscBand::Nine => 9,
            EscBand::Ten => 10,
        }
    }
}

/// Most strokes that count on a hole of `par` for a player of `handicap_index`.
///
/// # Errors
///
/// Will return `Err` if the index is NaN or infinite
pub fn max_hole_score(par: i32, handicap_index: f64) -> Result<i32, ScoreError> {
    Ok(EscBand::from_handicap_index(handicap_index)?.cap_for_par(par))
}

#[must_use]
pub fn net_double_bogey(par: i32, strokes_received: i32) -> i32 {
    par.saturating_add(2).saturating_add(strokes_received)
}

/// Adjusted gross score: each hole is clamped to its own cap, then summed.
///
/// # Errors
///
/// Will return `Err` if the slices are empty or differ in length, a stroke
/// count is negative, a par is outside 3-5, or the index is not finite
pub fn apply_equitable_stroke_control(
    strokes: &[i32],
    handicap_index: f64,
    par_values: &[i32],
) -> Result<i32, ScoreError> {
    if strokes.is_empty() {
        return Err(ScoreError::invalid("no hole scores to adjust"));
    }
    if strokes.len() != par_values.len() {
        return Err(ScoreError::invalid(format!(
            "{} hole scores but {} par values",
            strokes.len(),
            par_values.len()
        )));
    }
    let band = EscBand::from_handicap_index(handicap_index)?;

    let mut adjusted = 0;
    for (idx, (&raw, &par)) in strokes.iter().zip(par_values).enumerate() {
        if raw < 0 {
            return Err(ScoreError::invalid(format!(
                "hole {}: negative strokes {raw}",
                idx + 1
            )));
        }
        if !(3..=5).contains(&par) {
            return Err(ScoreError::invalid(format!(
                "hole {}: par {par} outside 3-5",
                idx + 1
            )));
        }
        let cap = band.cap_for_par(par);
        if raw > cap {
            debug!(hole = idx + 1, raw, cap, "capping hole score");
        }
        adjusted += raw.min(cap);
    }
    Ok(adjusted)
}

/// Applies ESC hole by hole. Without a known index every hole is capped at
/// double bogey.
///
/// # Errors
///
/// Will return `Err` if the index is not finite
pub fn adjust_holes(
    holes: &[HoleScore],
    handicap_index: Option<f64>,
) -> Result<Vec<HoleResult>, ScoreError> {
    let band = match handicap_index {
        Some(idx) => EscBand::from_handicap_index(idx)?,
        None => EscBand::DoubleBogey,
    };
    Ok(holes
        .iter()
        .map(|hole| {
            let mut score = hole.clone();
            if score.par < 4 {
                score.fairway_hit = None;
            }
            let adjusted_strokes = score.strokes.min(band.cap_for_par(score.par));
            HoleResult {
                score,
                adjusted_strokes,
            }
        })
        .collect())
}
